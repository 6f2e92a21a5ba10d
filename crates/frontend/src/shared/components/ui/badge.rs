use leptos::prelude::*;
use thaw::*;

/// "Activo" / "Inactivo" status badge
#[component]
pub fn ActiveBadge(
    active: bool,
    #[prop(optional)]
    inactive_label: Option<&'static str>,
) -> impl IntoView {
    if active {
        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Activo"</Badge> }
            .into_any()
    } else {
        let label = inactive_label.unwrap_or("Inactivo");
        view! { <Badge appearance=BadgeAppearance::Tint>{label}</Badge> }.into_any()
    }
}

/// Usage counter shown in list tables; highlighted when non-zero.
#[component]
pub fn CountBadge(count: i64) -> impl IntoView {
    if count > 0 {
        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>{count}</Badge> }
            .into_any()
    } else {
        view! { <Badge appearance=BadgeAppearance::Ghost>"0"</Badge> }.into_any()
    }
}
