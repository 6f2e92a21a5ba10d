use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// Tooltip of a delete button blocked by usage.
pub fn usage_tooltip(usage_total: i64) -> String {
    if usage_total > 0 {
        format!("En uso por {} registros", usage_total)
    } else {
        "Eliminar".to_string()
    }
}

/// Row delete action. Disabled while the record is referenced elsewhere.
#[component]
pub fn DeleteButton(usage_total: i64, on_delete: Callback<()>) -> impl IntoView {
    let blocked = usage_total > 0;

    view! {
        <span title=usage_tooltip(usage_total)>
            <Button
                appearance=ButtonAppearance::Transparent
                disabled=blocked
                on_click=move |e: ev::MouseEvent| {
                    e.stop_propagation();
                    if !blocked {
                        on_delete.run(());
                    }
                }
            >
                {icon("delete")}
            </Button>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::usage_tooltip;

    #[test]
    fn tooltip_names_usage() {
        assert_eq!(usage_tooltip(3), "En uso por 3 registros");
        assert_eq!(usage_tooltip(0), "Eliminar");
    }
}
