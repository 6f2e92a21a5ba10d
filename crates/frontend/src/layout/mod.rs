pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use global_context::use_app_context;
use leptos::prelude::*;
use top_header::TopHeader;

/// Application frame: top bar, collapsible sidebar and the tab area.
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_app_context();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <aside data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
                    {left()}
                </aside>

                <main data-zone="center" class="app-main app-tabs">
                    {center()}
                </main>
            </div>
        </div>
    }
}
