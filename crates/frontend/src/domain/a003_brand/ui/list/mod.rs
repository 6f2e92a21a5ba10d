use super::form::BrandForm;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_labels::{self, detail_key, detail_tab_label};
use crate::shared::components::table::{SortableHeaderCell, StateRow};
use crate::shared::components::ui::{ActiveBadge, CountBadge};
use crate::shared::components::{DeleteButton, ListToolbar};
use crate::shared::crud::{delete_record, FormViewModel, ListState};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, SortState, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a003_brand::{Brand, BrandDto};
use contracts::shared::{filter_items, HasUsage, ListQuery, Resource};
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for Brand {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "website" => cmp_text(
                self.website.as_deref().unwrap_or(""),
                other.website.as_deref().unwrap_or(""),
            ),
            "products" => self.counts.get("products").cmp(&other.counts.get("products")),
            "supermarkets" => self
                .counts
                .get("supermarkets")
                .cmp(&other.counts.get("supermarkets")),
            "active" => self.active.cmp(&other.active),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn BrandList() -> impl IntoView {
    let toast = use_toast();
    let tabs_store = use_app_context();
    let list = ListState::<Brand>::new(Resource::Brands);
    let vm = FormViewModel::<BrandDto>::new(Resource::Brands);
    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(SortState::new("name"));

    let reload = move || list.load(ListQuery::new());
    Effect::new(move |_| reload());
    let on_saved = Callback::new(move |_: ()| reload());

    let open_detail = move |brand: &Brand| {
        tabs_store.open_tab(
            &detail_key(tab_labels::BRAND, brand.id),
            &detail_tab_label(tab_labels::BRAND, &brand.name),
        );
    };

    let visible = Signal::derive(move || {
        let mut items = list.items.with(|items| filter_items(items, &search.get()));
        sort.with(|s| s.apply(&mut items));
        items
    });

    let rows = move || {
        visible
            .get()
            .into_iter()
            .map(|brand| {
                let name = brand.name.clone();
                let website = brand.website.clone().unwrap_or_default();
                let href = website.clone();
                let products = brand.counts.get("products");
                let supermarkets = brand.counts.get("supermarkets");
                let active = brand.active;
                let usage = brand.usage_total();
                let for_edit = BrandDto::from(&brand);
                let for_delete = brand.clone();
                let for_open = brand;
                view! {
                    <TableRow>
                        <TableCell>
                            <TableCellLayout truncate=true>
                                <a
                                    href="#"
                                    class="table__link"
                                    on:click=move |e| {
                                        e.prevent_default();
                                        open_detail(&for_open);
                                    }
                                >
                                    {name}
                                </a>
                            </TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout truncate=true>
                                {if website.is_empty() {
                                    view! { <span class="text-muted">"-"</span> }.into_any()
                                } else {
                                    view! {
                                        <a href=href target="_blank" rel="noopener">{website}</a>
                                    }
                                    .into_any()
                                }}
                            </TableCellLayout>
                        </TableCell>
                        <TableCell><CountBadge count=products /></TableCell>
                        <TableCell><CountBadge count=supermarkets /></TableCell>
                        <TableCell><ActiveBadge active=active inactive_label="Inactiva" /></TableCell>
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
        <PageFrame page_id="a003_brand--list" category=PAGE_CAT_LIST>
            <ListToolbar
                title=Resource::Brands.list_name()
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
                            <SortableHeaderCell label="Nombre" field="name" sort=sort min_width=200.0 />
                            <SortableHeaderCell label="Sitio web" field="website" sort=sort min_width=180.0 />
                            <SortableHeaderCell label="Productos" field="products" sort=sort />
                            <SortableHeaderCell label="Supermercados" field="supermarkets" sort=sort />
                            <SortableHeaderCell label="Estado" field="active" sort=sort />
                            <TableHeaderCell attr:style="width: 100px;"></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <Show
                            when=move || visible.with(|v| !v.is_empty())
                            fallback=move || view! { <StateRow colspan=6 loading=list.loading /> }
                        >
                            {rows}
                        </Show>
                    </TableBody>
                </Table>
            </div>

            <BrandForm vm=vm on_saved=on_saved />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::UsageCounts;

    fn brand(name: &str, website: Option<&str>) -> Brand {
        Brand {
            id: 1,
            name: name.to_string(),
            description: None,
            logo_url: None,
            website: website.map(str::to_string),
            active: true,
            counts: UsageCounts::default(),
        }
    }

    #[test]
    fn brands_without_website_sort_first() {
        let mut items = vec![
            brand("Pascual", Some("https://www.lechepascual.es")),
            brand("Hacendado", None),
            brand("Danone", Some("https://www.danone.es")),
        ];
        SortState::new("website").apply(&mut items);
        let names: Vec<_> = items.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Hacendado", "Danone", "Pascual"]);
    }
}
