//! Dropdown listing the open tabs: switch to one or close it.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn OpenTabsDropdown() -> impl IntoView {
    let ctx = use_app_context();
    let is_open = RwSignal::new(false);

    let active_title = move || {
        let active_key = ctx.active.get();
        if let Some(key) = active_key {
            ctx.opened
                .get()
                .iter()
                .find(|tab| tab.key == key)
                .map(|tab| tab.title.clone())
                .unwrap_or_else(|| "Pestañas".to_string())
        } else {
            "Pestañas".to_string()
        }
    };

    let tab_count = move || ctx.opened.get().len();

    let toggle_dropdown = move |_| {
        is_open.update(|open| *open = !*open);
    };

    let switch_tab = move |key: String| {
        ctx.activate_tab(&key);
        is_open.set(false);
    };

    let close_tab = move |key: String| {
        ctx.close_tab(&key);
    };

    view! {
        <div class="open-tabs">
            <button
                class="open-tabs__trigger"
                on:click=toggle_dropdown
                title="Pestañas abiertas"
            >
                <span class="open-tabs__trigger-text">
                    {move || {
                        let count = tab_count();
                        if count > 0 {
                            format!("{} ({})", active_title(), count)
                        } else {
                            "Pestañas (0)".to_string()
                        }
                    }}
                </span>
                {icon("chevron-down")}
            </button>

            <Show when=move || is_open.get()>
                <div class="open-tabs__menu">
                    {move || {
                        let tabs = ctx.opened.get();
                        if tabs.is_empty() {
                            view! {
                                <div class="open-tabs__empty">
                                    "No hay pestañas abiertas"
                                </div>
                            }.into_any()
                        } else {
                            view! {
                                <div>
                                    {tabs.into_iter().map(|tab| {
                                        let is_active = ctx.active.get().as_ref() == Some(&tab.key);
                                        let key_for_switch = tab.key.clone();
                                        let key_for_close = tab.key.clone();

                                        view! {
                                            <div
                                                class="open-tabs__item"
                                                class:open-tabs__item--active=is_active
                                                on:click=move |_| {
                                                    switch_tab(key_for_switch.clone());
                                                }
                                            >
                                                <span class="open-tabs__item-title">
                                                    {tab.title.clone()}
                                                </span>
                                                <button
                                                    class="open-tabs__item-close"
                                                    on:click=move |ev: ev::MouseEvent| {
                                                        ev.stop_propagation();
                                                        close_tab(key_for_close.clone());
                                                    }
                                                    title="Cerrar pestaña"
                                                >
                                                    {icon("x")}
                                                </button>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            }.into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
