use leptos::prelude::*;

/// Multi-line text input with label, bound through a callback
#[component]
pub fn TextAreaField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let rows = rows.unwrap_or(3);

    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <textarea
                class="form__textarea"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
