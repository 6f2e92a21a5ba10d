//! Sidebar with collapsible menu groups. Each item opens its page as a tab.

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_labels::{self, tab_label_for_key};
use crate::shared::icons::icon;
use contracts::domain::a007_lookup::LookupKind;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
}

fn lookup_icon(kind: LookupKind) -> &'static str {
    match kind {
        LookupKind::Tag => "tag",
        LookupKind::Unit => "ruler",
        LookupKind::Gender => "user",
        LookupKind::ListMode => "list",
        LookupKind::AcquisitionMethod => "download",
    }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalog",
            label: "Catálogo",
            icon: "layers",
            items: vec![
                (tab_labels::CATEGORY, "folder"),
                (tab_labels::PRODUCT_TYPE, "layers"),
                (tab_labels::BRAND, "award"),
                (tab_labels::PRODUCT, "package"),
            ],
        },
        MenuGroup {
            id: "commerce",
            label: "Comercio",
            icon: "store",
            items: vec![
                (tab_labels::SUPERMARKET, "store"),
                (tab_labels::PRICE, "dollar-sign"),
            ],
        },
        MenuGroup {
            id: "lookups",
            label: "Valores",
            icon: "database",
            items: LookupKind::ALL
                .into_iter()
                .map(|kind| (kind.page_key(), lookup_icon(kind)))
                .collect(),
        },
        MenuGroup {
            id: "system",
            label: "Sistema",
            icon: "users",
            items: vec![(tab_labels::USERS, "users")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    let expanded_groups = RwSignal::new(vec!["catalog".to_string(), "commerce".to_string()]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        {
                            let items_stored = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&group_id)>
                                    <div class="app-sidebar__children">
                                        {items_stored.get_value().into_iter().map(|(key, icon_name)| {
                                            let label = tab_label_for_key(key).unwrap_or(key);
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.get().as_deref() == Some(key)
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.open_tab(key, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        }
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_item_has_a_label() {
        for group in get_menu_groups() {
            for (key, _) in group.items {
                assert!(tab_label_for_key(key).is_some(), "no label for {}", key);
            }
        }
    }
}
