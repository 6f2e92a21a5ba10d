//! Prices of one product, at every supermarket that sells it.

use crate::domain::a006_price::ui::form::PriceForm;
use crate::shared::components::table::StateRow;
use crate::shared::components::ui::SelectOption;
use crate::shared::confirm::confirm;
use crate::shared::crud::FormViewModel;
use crate::shared::date_utils::{format_date, format_money, format_optional_date};
use crate::shared::http;
use crate::shared::icons::icon;
use crate::shared::list_utils::SortState;
use crate::shared::toast::use_toast;
use chrono::Utc;
use contracts::domain::a006_price::{Price, PriceDto};
use contracts::domain::common::{ref_name, AdminRecord};
use contracts::shared::{Relation, Resource};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ProductPrices(
    product_id: i64,
    #[prop(into)]
    products: Signal<Vec<SelectOption>>,
    #[prop(into)]
    supermarkets: Signal<Vec<SelectOption>>,
) -> impl IntoView {
    let toast = use_toast();
    let prices = RwSignal::new(Vec::<Price>::new());
    let loading = RwSignal::new(false);
    let vm = FormViewModel::<PriceDto>::new(Resource::Prices);

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match http::get_related::<Price>(Resource::Products, product_id, Relation::Prices).await {
                Ok(mut items) => {
                    SortState::new("effective").apply(&mut items);
                    prices.set(items);
                }
                Err(e) => {
                    prices.set(Vec::new());
                    toast.api_error(&e);
                }
            }
            loading.set(false);
        });
    };
    Effect::new(move |_| load());
    let on_saved = Callback::new(move |_: ()| load());

    let remove = move |price: Price| {
        if !confirm(&price.delete_confirmation()) {
            return;
        }
        spawn_local(async move {
            match http::disassociate(Resource::Products, product_id, Relation::Prices, price.id).await {
                Ok(ack) => {
                    toast.success(ack.message.unwrap_or_else(|| "Precio eliminado".to_string()));
                    load();
                }
                Err(e) => {
                    toast.api_error(&e);
                }
            }
        });
    };

    let rows = move || {
        let now = Utc::now();
        prices
            .get()
            .into_iter()
            .map(|price| {
                let supermarket = ref_name(&price.supermarket);
                let regular = format_money(price.price);
                let effective = format_money(price.effective_price(now));
                let updated = format_date(&price.updated_at);
                let for_edit = PriceDto::from(&price);
                let promo = if price.promo_active(now) {
                    format!(
                        "{} hasta {}",
                        format_money(price.promo_price.unwrap_or(price.price)),
                        format_optional_date(&price.promo_ends_at)
                    )
                } else {
                    "-".to_string()
                };
                let for_remove = price;
                view! {
                    <TableRow>
                        <TableCell>{supermarket}</TableCell>
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
                                <Button
                                    appearance=ButtonAppearance::Transparent
                                    attr:title="Eliminar"
                                    on_click=move |_| remove(for_remove.clone())
                                >
                                    {icon("delete")}
                                </Button>
                            </Flex>
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view()
    };

    view! {
        <div class="relation">
            <div class="relation__header">
                <h3 class="relation__title">
                    "Precios "
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {move || prices.with(|p| p.len())}
                    </Badge>
                </h3>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.show(PriceDto::for_product(product_id))
                >
                    {icon("plus")}
                    " Agregar precio"
                </Button>
            </div>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Supermercado"</TableHeaderCell>
                        <TableHeaderCell>"Precio"</TableHeaderCell>
                        <TableHeaderCell>"Promoción"</TableHeaderCell>
                        <TableHeaderCell>"Vigente"</TableHeaderCell>
                        <TableHeaderCell>"Actualizado"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 100px;"></TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <Show
                        when=move || prices.with(|p| !p.is_empty())
                        fallback=move || {
                            view! { <StateRow colspan=6 loading=loading empty_text="Sin precios registrados" /> }
                        }
                    >
                        {rows}
                    </Show>
                </TableBody>
            </Table>

            <PriceForm vm=vm products=products supermarkets=supermarkets on_saved=on_saved />
        </div>
    }
}
