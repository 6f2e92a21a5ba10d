use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Header of a detail tab: title, optional badge slot, edit and close.
#[component]
pub fn DetailHeader(
    #[prop(into)]
    title: Signal<String>,
    #[prop(into)]
    loading: Signal<bool>,
    on_edit: Callback<()>,
    on_close: Callback<()>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <Button
                    appearance=ButtonAppearance::Subtle
                    attr:title="Cerrar"
                    on_click=move |_| on_close.run(())
                >
                    {icon("arrow-left")}
                </Button>
                <h1 class="page__title">{move || title.get()}</h1>
                {children.map(|c| c())}
            </div>
            <div class="page__header-right">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=loading
                    on_click=move |_| on_edit.run(())
                >
                    {icon("edit")}
                    " Editar"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("x")}
                    " Cerrar"
                </Button>
            </div>
        </div>
    }
}

/// Label / value pair inside a `detail-grid`.
#[component]
pub fn DetailField(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <span class="form__label">{label}</span>
        <span class="detail-grid__value">{children()}</span>
    }
}
