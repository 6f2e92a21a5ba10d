//! One page serves every lookup table; `LookupKind` picks the endpoint
//! and the usage column.

use super::form::LookupForm;
use crate::shared::components::table::{SortableHeaderCell, StateRow};
use crate::shared::components::ui::CountBadge;
use crate::shared::components::{DeleteButton, ListToolbar};
use crate::shared::crud::{delete_record_in, FormViewModel, ListState};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, SortState, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a007_lookup::{LookupDto, LookupKind, LookupValue};
use contracts::shared::{filter_items, HasUsage, ListQuery};
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for LookupValue {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "value" => cmp_text(&self.value, &other.value),
            "description" => cmp_text(
                self.description.as_deref().unwrap_or(""),
                other.description.as_deref().unwrap_or(""),
            ),
            "usage" => self.usage_total().cmp(&other.usage_total()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn LookupList(kind: LookupKind) -> impl IntoView {
    let toast = use_toast();
    let resource = kind.resource();
    let list = ListState::<LookupValue>::new(resource);
    let vm = FormViewModel::<LookupDto>::new(resource);
    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(SortState::new("value"));
    let (counter, counter_label) = kind.usage_counter();

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
            .map(|item| {
                let value = item.value.clone();
                let description = item.description.clone().unwrap_or_default();
                let used_by = item.counts.get(counter);
                let usage = item.usage_total();
                let for_edit = LookupDto::from(&item);
                let for_delete = item;
                view! {
                    <TableRow>
                        <TableCell>
                            <TableCellLayout truncate=true>
                                <strong>{value}</strong>
                            </TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout truncate=true>{description}</TableCellLayout>
                        </TableCell>
                        <TableCell><CountBadge count=used_by /></TableCell>
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
                                        delete_record_in(resource, &for_delete, toast, on_saved)
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
        <PageFrame page_id=format!("{}--list", kind.page_key()) category=PAGE_CAT_LIST>
            <ListToolbar
                title=kind.list_name()
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
                            <SortableHeaderCell label="Valor" field="value" sort=sort min_width=160.0 />
                            <SortableHeaderCell label="Descripción" field="description" sort=sort min_width=240.0 />
                            <SortableHeaderCell label=counter_label field="usage" sort=sort />
                            <TableHeaderCell attr:style="width: 100px;"></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <Show
                            when=move || visible.with(|v| !v.is_empty())
                            fallback=move || view! { <StateRow colspan=4 loading=list.loading /> }
                        >
                            {rows}
                        </Show>
                    </TableBody>
                </Table>
            </div>

            <LookupForm kind=kind vm=vm on_saved=on_saved />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::UsageCounts;

    fn value(v: &str, description: Option<&str>) -> LookupValue {
        LookupValue {
            id: 1,
            value: v.to_string(),
            description: description.map(str::to_string),
            counts: UsageCounts::default(),
        }
    }

    #[test]
    fn missing_description_sorts_first() {
        let mut items = vec![value("kg", Some("Kilogramo")), value("ud", None)];
        SortState::new("description").apply(&mut items);
        assert_eq!(items[0].value, "ud");
    }
}
