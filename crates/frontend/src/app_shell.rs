//! Main layout: Shell with the sidebar and the open tabs.

use crate::layout::global_context::{use_app_context, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use leptos::prelude::*;

/// Restores the tab from `?page=` on start and keeps it in sync.
#[component]
pub fn MainLayout() -> impl IntoView {
    let tabs_store = use_app_context();

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <Show
                        when=move || tabs_store.opened.with(|t| !t.is_empty())
                        fallback=|| view! {
                            <div class="app-welcome">
                                <h2>"Catálogo de precios"</h2>
                                <p>"Elija una sección en el menú lateral."</p>
                            </div>
                        }
                    >
                        <For
                            each=move || tabs_store.opened.get()
                            key=|tab| tab.key.clone()
                            children=move |tab: TabData| {
                                view! { <TabPage tab=tab tabs_store=tabs_store /> }
                            }
                        />
                    </Show>
                }.into_any()
            }
        />
    }
}
