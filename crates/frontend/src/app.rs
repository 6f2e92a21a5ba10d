use crate::app_shell::MainLayout;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Navigation and notifications are the only app-wide state.
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());

    view! {
        <MainLayout />
        <ToastHost />
    }
}
