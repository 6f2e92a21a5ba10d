use super::form::ProductTypeForm;
use crate::domain::a001_category::ui::form::parent_options;
use crate::shared::components::table::{SortableHeaderCell, StateRow};
use crate::shared::components::ui::{ActiveBadge, CountBadge, FilterSelect, SelectOption};
use crate::shared::components::{DeleteButton, ListToolbar};
use crate::shared::crud::{delete_record, FormViewModel, ListState};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, SortState, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a001_category::{build_tree, Category};
use contracts::domain::a002_product_type::{ProductType, ProductTypeDto};
use contracts::domain::common::ref_name;
use contracts::shared::{filter_items, HasUsage, ListQuery, Resource};
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for ProductType {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "category" => cmp_text(&ref_name(&self.category), &ref_name(&other.category)),
            "products" => self.products_count().cmp(&other.products_count()),
            "active" => self.active.cmp(&other.active),
            _ => Ordering::Equal,
        }
    }
}

/// Category select entries, indented by depth.
pub fn category_options(categories: &[Category]) -> Vec<SelectOption> {
    parent_options(&build_tree(categories), None)
}

#[component]
pub fn ProductTypeList() -> impl IntoView {
    let toast = use_toast();
    let list = ListState::<ProductType>::new(Resource::ProductTypes);
    let categories = ListState::<Category>::new(Resource::Categories);
    let vm = FormViewModel::<ProductTypeDto>::new(Resource::ProductTypes);
    let search = RwSignal::new(String::new());
    let category_filter = RwSignal::new(None::<i64>);
    let sort = RwSignal::new(SortState::new("name"));

    let reload = move || {
        let mut query = ListQuery::new();
        if let Some(id) = category_filter.get_untracked() {
            query = query.with_filter("categoryId", id);
        }
        list.load(query);
    };

    Effect::new(move |_| {
        category_filter.track();
        reload();
    });
    Effect::new(move |_| categories.load(ListQuery::new()));

    let on_saved = Callback::new(move |_: ()| reload());
    let options = Signal::derive(move || categories.items.with(|c| category_options(c)));

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
                let name = item.name.clone();
                let category = ref_name(&item.category);
                let products = item.products_count();
                let usage = item.usage_total();
                let active = item.active;
                let for_edit = ProductTypeDto::from(&item);
                let for_delete = item;
                view! {
                    <TableRow>
                        <TableCell>
                            <TableCellLayout truncate=true>{name}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout truncate=true>{category}</TableCellLayout>
                        </TableCell>
                        <TableCell><CountBadge count=products /></TableCell>
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
        <PageFrame page_id="a002_product_type--list" category=PAGE_CAT_LIST>
            <ListToolbar
                title=Resource::ProductTypes.list_name()
                count=Signal::derive(move || visible.with(|v| v.len()))
                search=search
                loading=list.loading
                on_refresh=Callback::new(move |_| reload())
                on_create=Callback::new(move |_| vm.show_new())
            >
                <FilterSelect value=category_filter options=options all_label="Todas las categorías" />
            </ListToolbar>

            <div class="page__content">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Nombre" field="name" sort=sort min_width=200.0 />
                            <SortableHeaderCell label="Categoría" field="category" sort=sort min_width=160.0 />
                            <SortableHeaderCell label="Productos" field="products" sort=sort />
                            <SortableHeaderCell label="Estado" field="active" sort=sort />
                            <TableHeaderCell attr:style="width: 100px;"></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <Show
                            when=move || visible.with(|v| !v.is_empty())
                            fallback=move || view! { <StateRow colspan=5 loading=list.loading /> }
                        >
                            {rows}
                        </Show>
                    </TableBody>
                </Table>
            </div>

            <ProductTypeForm vm=vm categories=options on_saved=on_saved />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::NamedRef;
    use contracts::shared::UsageCounts;

    fn product_type(id: i64, name: &str, category: &str, products: i64) -> ProductType {
        ProductType {
            id,
            name: name.to_string(),
            description: None,
            image_url: None,
            active: true,
            category_id: 1,
            category: Some(NamedRef {
                id: 1,
                name: category.to_string(),
            }),
            counts: UsageCounts::from_pairs([("products", products)]),
        }
    }

    #[test]
    fn sorts_by_category_then_count() {
        let mut items = vec![
            product_type(1, "Gaseosas", "Refrescos", 4),
            product_type(2, "Yogur", "lácteos", 1),
        ];
        SortState::new("category").apply(&mut items);
        assert_eq!(items[0].name, "Yogur");

        SortState::new("products").apply(&mut items);
        assert_eq!(items[0].name, "Yogur");
        assert_eq!(items[1].products_count(), 4);
    }
}
