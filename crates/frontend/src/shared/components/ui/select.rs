use contracts::domain::common::AdminRecord;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub id: i64,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            disabled: false,
        }
    }

    /// One option per record, labelled with its display name.
    pub fn from_records<T: AdminRecord>(records: &[T]) -> Vec<Self> {
        records
            .iter()
            .map(|r| Self::new(r.id(), r.display_name()))
            .collect()
    }
}

/// `""` is the placeholder option.
pub fn parse_option_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Select over record ids with an empty placeholder entry
#[component]
pub fn IdSelect(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<Option<i64>>,
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    on_change: Callback<Option<i64>>,
    /// Text of the empty entry
    #[prop(optional)]
    placeholder: Option<&'static str>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or("Seleccionar...");

    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <select
                class="form__select"
                on:change=move |ev| on_change.run(parse_option_id(&event_target_value(&ev)))
            >
                <option value="" selected=move || value.get().is_none()>{placeholder}</option>
                <For
                    each=move || options.get()
                    key=|opt| (opt.id, opt.disabled)
                    children=move |opt| {
                        let id = opt.id;
                        view! {
                            <option
                                value=id.to_string()
                                disabled=opt.disabled
                                selected=move || value.get() == Some(id)
                            >
                                {opt.label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Unlabelled select for list toolbars; `None` means no filter.
#[component]
pub fn FilterSelect(
    value: RwSignal<Option<i64>>,
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Text of the "no filter" entry
    all_label: &'static str,
) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            on:change=move |ev| value.set(parse_option_id(&event_target_value(&ev)))
        >
            <option value="" selected=move || value.get().is_none()>{all_label}</option>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|opt| {
                        let id = opt.id;
                        view! {
                            <option value=id.to_string() selected=move || value.get() == Some(id)>
                                {opt.label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_means_none() {
        assert_eq!(parse_option_id(""), None);
        assert_eq!(parse_option_id("12"), Some(12));
        assert_eq!(parse_option_id("x"), None);
    }
}
