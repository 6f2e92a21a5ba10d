use leptos::prelude::*;

/// Text input with label, bound through a callback
#[component]
pub fn TextField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    /// "text" (default), "email", "password", "url", "date"
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");

    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                class="form__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Parse a numeric form value; commas are accepted as decimal separator.
pub fn parse_number(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Numeric input. Blank or unparsable text yields `None`.
#[component]
pub fn NumberField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<Option<f64>>,
    on_change: Callback<Option<f64>>,
    #[prop(optional)]
    step: Option<&'static str>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let step = step.unwrap_or("0.01");

    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                class="form__input"
                type="number"
                min="0"
                step=step
                prop:value=move || value.get().map(|v| v.to_string()).unwrap_or_default()
                on:input=move |ev| on_change.run(parse_number(&event_target_value(&ev)))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_number;

    #[test]
    fn parses_decimal_comma() {
        assert_eq!(parse_number("1,5"), Some(1.5));
        assert_eq!(parse_number(" 2.25 "), Some(2.25));
    }

    #[test]
    fn blank_and_garbage_are_none() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
    }
}
