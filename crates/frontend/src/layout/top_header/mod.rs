//! Top bar: sidebar toggle, application title and the open-tabs dropdown.

pub mod open_tabs;

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;
use open_tabs::OpenTabsDropdown;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar navegación" } else { "Mostrar navegación" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Catálogo de precios · Administración"</span>
            </div>

            <div class="top-header__actions">
                <OpenTabsDropdown />
            </div>
        </div>
    }
}
