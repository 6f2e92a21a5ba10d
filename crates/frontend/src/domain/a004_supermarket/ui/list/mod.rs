use super::form::SupermarketForm;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_labels::{self, detail_key, detail_tab_label};
use crate::shared::components::table::{SortableHeaderCell, StateRow};
use crate::shared::components::ui::{ActiveBadge, CountBadge};
use crate::shared::components::{DeleteButton, ListToolbar};
use crate::shared::crud::{delete_record, use_options, FormViewModel, ListState};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, SortState, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a004_supermarket::{Supermarket, SupermarketDto};
use contracts::domain::a007_lookup::LookupValue;
use contracts::domain::common::ref_value;
use contracts::shared::{filter_items, HasUsage, ListQuery, Resource};
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for Supermarket {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "method" => cmp_text(
                &ref_value(&self.acquisition_method),
                &ref_value(&other.acquisition_method),
            ),
            // unset frequency sorts last
            "frequency" => match (self.update_frequency_hours, other.update_frequency_hours) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            "brands" => self.counts.get("brands").cmp(&other.counts.get("brands")),
            "prices" => self.counts.get("prices").cmp(&other.counts.get("prices")),
            "active" => self.active.cmp(&other.active),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn SupermarketList() -> impl IntoView {
    let toast = use_toast();
    let tabs_store = use_app_context();
    let list = ListState::<Supermarket>::new(Resource::Supermarkets);
    let vm = FormViewModel::<SupermarketDto>::new(Resource::Supermarkets);
    let methods = use_options::<LookupValue>(Resource::AcquisitionMethods);
    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(SortState::new("name"));

    let reload = move || list.load(ListQuery::new());
    Effect::new(move |_| reload());
    let on_saved = Callback::new(move |_: ()| reload());

    let visible = Signal::derive(move || {
        let mut items = list.items.with(|items| filter_items(items, &search.get()));
        sort.with(|s| s.apply(&mut items));
        items
    });

    let rows = move || {
        visible
            .get()
            .into_iter()
            .map(|market| {
                let id = market.id;
                let name = market.name.clone();
                let label = name.clone();
                let method = ref_value(&market.acquisition_method);
                let frequency = market.frequency_label();
                let brands = market.counts.get("brands");
                let prices = market.counts.get("prices");
                let active = market.active;
                let usage = market.usage_total();
                let for_edit = SupermarketDto::from(&market);
                let for_delete = market;
                view! {
                    <TableRow>
                        <TableCell>
                            <TableCellLayout truncate=true>
                                <a
                                    href="#"
                                    class="table__link"
                                    on:click=move |e| {
                                        e.prevent_default();
                                        tabs_store.open_tab(
                                            &detail_key(tab_labels::SUPERMARKET, id),
                                            &detail_tab_label(tab_labels::SUPERMARKET, &label),
                                        );
                                    }
                                >
                                    {name}
                                </a>
                            </TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout truncate=true>{method}</TableCellLayout>
                        </TableCell>
                        <TableCell>{frequency}</TableCell>
                        <TableCell><CountBadge count=brands /></TableCell>
                        <TableCell><CountBadge count=prices /></TableCell>
                        <TableCell><ActiveBadge active=active /></TableCell>
                        <TableCell>
                            <Flex gap=FlexGap::Small>
                                <Button
                                    appearance=ButtonAppearance::Transparent
                                    attr:title="Editar"
                                    on_click=move |_| vm.show(for_edit.clone())
                                >
                                    {icon("edit")}
                                </Button>
                                <DeleteButton
                                    usage_total=usage
                                    on_delete=Callback::new(move |_| {
                                        delete_record(&for_delete, toast, on_saved)
                                    })
                                />
                            </Flex>
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="a004_supermarket--list" category=PAGE_CAT_LIST>
            <ListToolbar
                title=Resource::Supermarkets.list_name()
                count=Signal::derive(move || visible.with(|v| v.len()))
                search=search
                loading=list.loading
                on_refresh=Callback::new(move |_| reload())
                on_create=Callback::new(move |_| vm.show_new())
            />

            <div class="page__content">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Nombre" field="name" sort=sort min_width=180.0 />
                            <SortableHeaderCell label="Método de obtención" field="method" sort=sort min_width=160.0 />
                            <SortableHeaderCell label="Actualización" field="frequency" sort=sort />
                            <SortableHeaderCell label="Marcas" field="brands" sort=sort />
                            <SortableHeaderCell label="Precios" field="prices" sort=sort />
                            <SortableHeaderCell label="Estado" field="active" sort=sort />
                            <TableHeaderCell attr:style="width: 100px;"></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <Show
                            when=move || visible.with(|v| !v.is_empty())
                            fallback=move || view! { <StateRow colspan=7 loading=list.loading /> }
                        >
                            {rows}
                        </Show>
                    </TableBody>
                </Table>
            </div>

            <SupermarketForm vm=vm acquisition_methods=methods on_saved=on_saved />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::UsageCounts;

    fn market(name: &str, hours: Option<u32>) -> Supermarket {
        Supermarket {
            id: 1,
            name: name.to_string(),
            description: None,
            website: None,
            logo_url: None,
            acquisition_method_id: None,
            acquisition_method: None,
            update_frequency_hours: hours,
            active: true,
            counts: UsageCounts::default(),
        }
    }

    #[test]
    fn missing_frequency_sorts_last() {
        let mut items = vec![market("Dia", None), market("Lidl", Some(48)), market("Aldi", Some(6))];
        SortState::new("frequency").apply(&mut items);
        let names: Vec<_> = items.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Aldi", "Lidl", "Dia"]);
    }
}
