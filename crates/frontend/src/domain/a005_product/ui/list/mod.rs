use super::form::{ProductForm, ProductOptions};
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_labels::{self, detail_key, detail_tab_label};
use crate::shared::components::table::{SortableHeaderCell, StateRow};
use crate::shared::components::ui::{ActiveBadge, CountBadge, FilterSelect};
use crate::shared::components::{DeleteButton, ListToolbar};
use crate::shared::crud::{delete_record, FormViewModel, ListState};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_f64, cmp_text, SortState, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a005_product::{Product, ProductDto};
use contracts::domain::common::ref_name;
use contracts::shared::{filter_items, HasUsage, ListQuery, Resource};
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "brand" => cmp_text(&ref_name(&self.brand), &ref_name(&other.brand)),
            "type" => cmp_text(&ref_name(&self.product_type), &ref_name(&other.product_type)),
            "quantity" => cmp_f64(self.quantity, other.quantity),
            "prices" => self.prices_count().cmp(&other.prices_count()),
            "status" => self.discontinued.cmp(&other.discontinued),
            _ => Ordering::Equal,
        }
    }
}

/// Server-side filters of the product list.
pub fn product_query(brand_id: Option<i64>, product_type_id: Option<i64>) -> ListQuery {
    let mut query = ListQuery::new();
    if let Some(id) = brand_id {
        query = query.with_filter("brandId", id);
    }
    if let Some(id) = product_type_id {
        query = query.with_filter("productTypeId", id);
    }
    query
}

#[component]
pub fn ProductList() -> impl IntoView {
    let toast = use_toast();
    let tabs_store = use_app_context();
    let list = ListState::<Product>::new(Resource::Products);
    let vm = FormViewModel::<ProductDto>::new(Resource::Products);
    let options = ProductOptions::load();
    let search = RwSignal::new(String::new());
    let brand_filter = RwSignal::new(None::<i64>);
    let type_filter = RwSignal::new(None::<i64>);
    let sort = RwSignal::new(SortState::new("name"));

    let reload = move || {
        list.load(product_query(
            brand_filter.get_untracked(),
            type_filter.get_untracked(),
        ))
    };
    Effect::new(move |_| {
        brand_filter.track();
        type_filter.track();
        reload();
    });
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
            .map(|product| {
                let id = product.id;
                let name = product.name.clone();
                let label = product.name.clone();
                let brand = ref_name(&product.brand);
                let product_type = ref_name(&product.product_type);
                let content = product.content_label();
                let prices = product.prices_count();
                let discontinued = product.discontinued;
                let usage = product.usage_total();
                let for_edit = ProductDto::from(&product);
                let tags = product
                    .tags
                    .iter()
                    .map(|t| {
                        let value = t.value.clone();
                        view! {
                            <Badge appearance=BadgeAppearance::Ghost color=BadgeColor::Brand>
                                {value}
                            </Badge>
                        }
                    })
                    .collect_view();
                let for_delete = product;
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
                                            &detail_key(tab_labels::PRODUCT, id),
                                            &detail_tab_label(tab_labels::PRODUCT, &label),
                                        );
                                    }
                                >
                                    {name}
                                </a>
                            </TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout truncate=true>{brand}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout truncate=true>{product_type}</TableCellLayout>
                        </TableCell>
                        <TableCell>{content}</TableCell>
                        <TableCell>
                            <Flex gap=FlexGap::Small>{tags}</Flex>
                        </TableCell>
                        <TableCell><CountBadge count=prices /></TableCell>
                        <TableCell>
                            <ActiveBadge active=!discontinued inactive_label="Descatalogado" />
                        </TableCell>
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
        <PageFrame page_id="a005_product--list" category=PAGE_CAT_LIST>
            <ListToolbar
                title=Resource::Products.list_name()
                count=Signal::derive(move || visible.with(|v| v.len()))
                search=search
                loading=list.loading
                on_refresh=Callback::new(move |_| reload())
                on_create=Callback::new(move |_| vm.show_new())
            >
                <FilterSelect value=brand_filter options=options.brands all_label="Todas las marcas" />
                <FilterSelect
                    value=type_filter
                    options=options.product_types
                    all_label="Todos los tipos"
                />
            </ListToolbar>

            <div class="page__content">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Nombre" field="name" sort=sort min_width=200.0 />
                            <SortableHeaderCell label="Marca" field="brand" sort=sort min_width=140.0 />
                            <SortableHeaderCell label="Tipo" field="type" sort=sort min_width=140.0 />
                            <SortableHeaderCell label="Contenido" field="quantity" sort=sort />
                            <TableHeaderCell min_width=140.0>"Etiquetas"</TableHeaderCell>
                            <SortableHeaderCell label="Precios" field="prices" sort=sort />
                            <SortableHeaderCell label="Estado" field="status" sort=sort />
                            <TableHeaderCell attr:style="width: 100px;"></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <Show
                            when=move || visible.with(|v| !v.is_empty())
                            fallback=move || view! { <StateRow colspan=8 loading=list.loading /> }
                        >
                            {rows}
                        </Show>
                    </TableBody>
                </Table>
            </div>

            <ProductForm vm=vm options=options on_saved=on_saved />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::product_query;

    #[test]
    fn filters_become_query_params() {
        assert!(product_query(None, None).is_empty());
        let query = product_query(Some(3), Some(8));
        assert_eq!(query.get("brandId"), Some("3"));
        assert_eq!(query.get("productTypeId"), Some("8"));
        assert_eq!(product_query(None, Some(8)).get("brandId"), None);
    }
}
