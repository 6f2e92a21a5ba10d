use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Modal create / edit dialog.
///
/// Renders the overlay, a header with the title, the form body and the
/// Cancel / Save footer. The submit button stays disabled while
/// `can_submit` is false; `hint` shows the first failing validation rule and
/// `error` the last server error.
#[component]
pub fn FormDialog(
    #[prop(into)]
    title: Signal<String>,
    #[prop(into)]
    can_submit: Signal<bool>,
    #[prop(into)]
    saving: Signal<bool>,
    #[prop(optional, into)]
    hint: Signal<Option<String>>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only when press and release both happen on the overlay itself.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close && !saving.get_untracked() {
            // Deferred: the overlay must not be removed during its own click dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_cancel.run(());
            });
        }
    };

    let handle_submit = move |_: ev::MouseEvent| {
        if can_submit.get_untracked() {
            on_submit.run(());
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" && !saving.get_untracked() {
            on_cancel.run(());
        }
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
            on:keydown=handle_keydown
        >
            <div class="modal" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h3 class="modal-title">{move || title.get()}</h3>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        on_click=move |_| on_cancel.run(())
                    >
                        {icon("x")}
                    </Button>
                </div>
                <div class="modal-body">
                    {children()}
                    {move || {
                        hint.get()
                            .map(|h| view! { <div class="form__hint">{h}</div> })
                    }}
                    {move || {
                        error.get()
                            .map(|e| view! { <div class="form__error">{e}</div> })
                    }}
                </div>
                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=saving
                        on_click=move |_| on_cancel.run(())
                    >
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !can_submit.get())
                        on_click=handle_submit
                    >
                        {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
