use super::form::PriceForm;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_labels;
use crate::shared::components::table::{SortableHeaderCell, StateRow};
use crate::shared::components::ui::FilterSelect;
use crate::shared::components::{DeleteButton, ListToolbar};
use crate::shared::crud::{delete_record, use_options, FormViewModel, ListState};
use crate::shared::date_utils::{format_datetime, format_money, format_optional_date};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_f64, cmp_text, SortState, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use chrono::Utc;
use contracts::domain::a004_supermarket::Supermarket;
use contracts::domain::a005_product::Product;
use contracts::domain::a006_price::{Price, PriceDto};
use contracts::domain::common::ref_name;
use contracts::shared::{filter_items, HasUsage, ListQuery, Resource};
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for Price {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "product" => cmp_text(&ref_name(&self.product), &ref_name(&other.product)),
            "supermarket" => cmp_text(&ref_name(&self.supermarket), &ref_name(&other.supermarket)),
            "price" => cmp_f64(self.price, other.price),
            "effective" => {
                let now = Utc::now();
                cmp_f64(self.effective_price(now), other.effective_price(now))
            }
            "updated" => self.updated_at.cmp(&other.updated_at),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn PriceList() -> impl IntoView {
    let toast = use_toast();
    let tabs_store = use_app_context();
    let list = ListState::<Price>::new(Resource::Prices);
    let vm = FormViewModel::<PriceDto>::new(Resource::Prices);
    let products = use_options::<Product>(Resource::Products);
    let supermarkets = use_options::<Supermarket>(Resource::Supermarkets);
    let search = RwSignal::new(String::new());
    let supermarket_filter = RwSignal::new(None::<i64>);
    let sort = RwSignal::new(SortState::new("product"));
    let open_product = tabs_store.detail_opener(tab_labels::PRODUCT);

    let reload = move || {
        let mut query = ListQuery::new();
        if let Some(id) = supermarket_filter.get_untracked() {
            query = query.with_filter("supermarketId", id);
        }
        list.load(query);
    };

    Effect::new(move |_| {
        supermarket_filter.track();
        reload();
    });
    let on_saved = Callback::new(move |_: ()| reload());

    let visible = Signal::derive(move || {
        let mut items = list.items.with(|items| filter_items(items, &search.get()));
        sort.with(|s| s.apply(&mut items));
        items
    });

    let rows = move || {
        let now = Utc::now();
        visible
            .get()
            .into_iter()
            .map(|price| {
                let product_id = price.product_id;
                let product = ref_name(&price.product);
                let supermarket = ref_name(&price.supermarket);
                let regular = format_money(price.price);
                let effective = format_money(price.effective_price(now));
                let updated = format_datetime(&price.updated_at);
                let promo = match price.promo_price {
                    Some(p) if price.promo_active(now) => {
                        let text = format!(
                            "{} hasta {}",
                            format_money(p),
                            format_optional_date(&price.promo_ends_at)
                        );
                        view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>{text}</Badge>
                        }
                        .into_any()
                    }
                    Some(p) => view! {
                        <span class="text-muted">{format!("{} (vencida)", format_money(p))}</span>
                    }
                    .into_any(),
                    None => view! { <span class="text-muted">"-"</span> }.into_any(),
                };
                let usage = price.usage_total();
                let for_edit = PriceDto::from(&price);
                let for_delete = price;
                view! {
                    <TableRow>
                        <TableCell>
                            <TableCellLayout truncate=true>
                                <a
                                    href="#"
                                    class="table__link"
                                    on:click=move |e| {
                                        e.prevent_default();
                                        open_product.run(product_id);
                                    }
                                >
                                    {product}
                                </a>
                            </TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout truncate=true>{supermarket}</TableCellLayout>
                        </TableCell>
                        <TableCell attr:style="text-align: right;">{regular}</TableCell>
                        <TableCell>{promo}</TableCell>
                        <TableCell attr:style="text-align: right;">
                            <strong>{effective}</strong>
                        </TableCell>
                        <TableCell>{updated}</TableCell>
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
        <PageFrame page_id="a006_price--list" category=PAGE_CAT_LIST>
            <ListToolbar
                title=Resource::Prices.list_name()
                count=Signal::derive(move || visible.with(|v| v.len()))
                search=search
                loading=list.loading
                search_placeholder="Producto o supermercado..."
                on_refresh=Callback::new(move |_| reload())
                on_create=Callback::new(move |_| vm.show_new())
            >
                <FilterSelect
                    value=supermarket_filter
                    options=supermarkets
                    all_label="Todos los supermercados"
                />
            </ListToolbar>

            <div class="page__content">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Producto" field="product" sort=sort min_width=200.0 />
                            <SortableHeaderCell label="Supermercado" field="supermarket" sort=sort min_width=160.0 />
                            <SortableHeaderCell label="Precio" field="price" sort=sort align="right" />
                            <TableHeaderCell min_width=160.0>"Promoción"</TableHeaderCell>
                            <SortableHeaderCell label="Vigente" field="effective" sort=sort align="right" />
                            <SortableHeaderCell label="Actualizado" field="updated" sort=sort min_width=140.0 />
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

            <PriceForm vm=vm products=products supermarkets=supermarkets on_saved=on_saved />
        </PageFrame>
    }
}
