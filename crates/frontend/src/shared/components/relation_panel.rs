//! Many-to-many editor shown on detail pages.
//!
//! Lists the records linked to an owner (`/brands/3/products`), searches the
//! target collection for records not yet linked and associates the selected
//! ones in bulk. Removing a link asks for confirmation first. Both mutations
//! re-fetch the linked list from the server.

use crate::shared::confirm::confirm;
use crate::shared::http;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::common::AdminRecord;
use contracts::shared::{ListQuery, Relation, Resource};
use leptos::ev;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Toggle `id` in the pending selection.
pub fn toggle_selection(selected: &mut Vec<i64>, id: i64) {
    if let Some(pos) = selected.iter().position(|s| *s == id) {
        selected.remove(pos);
    } else {
        selected.push(id);
    }
}

#[component]
pub fn RelationPanel<T>(
    owner: Resource,
    owner_id: i64,
    relation: Relation,
    #[prop(into)]
    title: String,
    /// Opens a linked record, e.g. in its own tab
    #[prop(optional)]
    on_open: Option<Callback<i64>>,
    #[prop(optional)]
    _marker: PhantomData<T>,
) -> impl IntoView
where
    T: AdminRecord + DeserializeOwned + Send + Sync + 'static,
{
    let toast = use_toast();
    let linked = RwSignal::new(Vec::<T>::new());
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let candidates = RwSignal::new(Vec::<T>::new());
    let searching = RwSignal::new(false);
    let searched = RwSignal::new(false);
    let selected = RwSignal::new(Vec::<i64>::new());
    let busy = RwSignal::new(false);

    let load_linked = move || {
        loading.set(true);
        spawn_local(async move {
            match http::get_related::<T>(owner, owner_id, relation).await {
                Ok(items) => linked.set(items),
                Err(e) => {
                    linked.set(Vec::new());
                    toast.api_error(&e);
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| load_linked());

    let run_search = move || {
        let query = ListQuery::new()
            .with_search(&search.get_untracked())
            .excluding(owner, owner_id);
        searching.set(true);
        selected.set(Vec::new());
        spawn_local(async move {
            match http::get_list::<T>(relation.target(), &query).await {
                Ok(items) => candidates.set(items),
                Err(e) => {
                    candidates.set(Vec::new());
                    toast.api_error(&e);
                }
            }
            searching.set(false);
            searched.set(true);
        });
    };

    let add_selected = move || {
        let ids = selected.get_untracked();
        if ids.is_empty() {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            let count = ids.len();
            match http::associate(owner, owner_id, relation, ids).await {
                Ok(ack) => {
                    toast.success(
                        ack.message
                            .unwrap_or_else(|| format!("{} registros asociados", count)),
                    );
                    selected.set(Vec::new());
                    candidates.set(Vec::new());
                    searched.set(false);
                    load_linked();
                }
                Err(e) => {
                    toast.api_error(&e);
                }
            }
            busy.set(false);
        });
    };

    let remove_link = move |related_id: i64, name: String| {
        if !confirm(&format!("¿Quitar \"{}\" de la relación?", name)) {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            match http::disassociate(owner, owner_id, relation, related_id).await {
                Ok(ack) => {
                    toast.success(ack.message.unwrap_or_else(|| format!("\"{}\" quitado", name)));
                    load_linked();
                }
                Err(e) => {
                    toast.api_error(&e);
                }
            }
            busy.set(false);
        });
    };

    let linked_rows = move || {
        let items = linked.get();
        if items.is_empty() {
            let text = if loading.get() { "Cargando..." } else { "Sin registros asociados" };
            return view! { <div class="relation__empty">{text}</div> }.into_any();
        }
        items
            .into_iter()
            .map(|item| {
                let id = item.id();
                let name = item.display_name();
                let name_for_remove = name.clone();
                let label = match on_open {
                    Some(open) => view! {
                        <a class="relation__link" href="#" on:click=move |e: ev::MouseEvent| {
                            e.prevent_default();
                            open.run(id);
                        }>{name}</a>
                    }
                    .into_any(),
                    None => view! { <span>{name}</span> }.into_any(),
                };
                view! {
                    <div class="relation__row">
                        {label}
                        <Button
                            appearance=ButtonAppearance::Transparent
                            disabled=busy
                            on_click=move |_| remove_link(id, name_for_remove.clone())
                        >
                            {icon("x")}
                        </Button>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    let candidate_rows = move || {
        let items = candidates.get();
        if items.is_empty() {
            return searched
                .get()
                .then(|| view! { <div class="relation__empty">"Sin resultados"</div> })
                .into_any();
        }
        items
            .into_iter()
            .map(|item| {
                let id = item.id();
                view! {
                    <label class="relation__candidate">
                        <input
                            type="checkbox"
                            prop:checked=move || selected.with(|s| s.contains(&id))
                            on:change=move |_| selected.update(|s| toggle_selection(s, id))
                        />
                        <span>{item.display_name()}</span>
                    </label>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="relation">
            <div class="relation__header">
                <h3 class="relation__title">{title}</h3>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                    {move || linked.with(|l| l.len())}
                </Badge>
            </div>
            <div class="relation__list">{linked_rows}</div>
            <div class="relation__search">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Input value=search placeholder="Buscar para asociar..." />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=searching
                        on_click=move |_| run_search()
                    >
                        {icon("search")}
                        " Buscar"
                    </Button>
                </Flex>
                <div class="relation__candidates">{candidate_rows}</div>
                <Show when=move || selected.with(|s| !s.is_empty())>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=busy
                        on_click=move |_| add_selected()
                    >
                        {icon("link")}
                        {move || format!(" Agregar seleccionados ({})", selected.with(|s| s.len()))}
                    </Button>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::toggle_selection;

    #[test]
    fn selection_toggles() {
        let mut selected = vec![];
        toggle_selection(&mut selected, 4);
        toggle_selection(&mut selected, 7);
        assert_eq!(selected, vec![4, 7]);
        toggle_selection(&mut selected, 4);
        assert_eq!(selected, vec![7]);
    }
}
