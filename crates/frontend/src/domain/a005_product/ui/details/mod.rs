//! Product detail tab: product data, its prices and its tags.

mod prices;

use super::form::{ProductForm, ProductOptions};
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_labels::{self, detail_key, detail_tab_label};
use crate::shared::components::ui::{ActiveBadge, SelectOption};
use crate::shared::components::{DetailField, DetailHeader, RelationPanel};
use crate::shared::crud::{use_options, DetailState, FormViewModel};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a004_supermarket::Supermarket;
use contracts::domain::a005_product::{Product, ProductDto};
use contracts::domain::a007_lookup::LookupValue;
use contracts::domain::common::ref_name;
use contracts::shared::{Relation, Resource};
use leptos::prelude::*;
use prices::ProductPrices;
use thaw::*;

#[component]
pub fn ProductDetail(id: i64, on_close: Callback<()>) -> impl IntoView {
    let tabs_store = use_app_context();
    let detail = DetailState::<Product>::new(Resource::Products);
    let vm = FormViewModel::<ProductDto>::new(Resource::Products);
    let options = ProductOptions::load();
    let supermarkets = use_options::<Supermarket>(Resource::Supermarkets);
    let tab_key = detail_key(tab_labels::PRODUCT, id);

    Effect::new(move |_| detail.load(id));
    let on_saved = Callback::new(move |_: ()| detail.load(id));

    {
        let tab_key = tab_key.clone();
        Effect::new(move |_| {
            if let Some(name) = detail.record.with(|p| p.as_ref().map(|p| p.name.clone())) {
                tabs_store
                    .update_tab_title(&tab_key, &detail_tab_label(tab_labels::PRODUCT, &name));
            }
        });
    }
    Effect::new(move |_| {
        if detail.missing.get() {
            tabs_store.replace_tab(&tab_key, tab_labels::PRODUCT);
        }
    });

    // the price form only needs this product as its choice
    let this_product = Signal::derive(move || {
        detail
            .record
            .with(|p| p.as_ref().map(|p| vec![SelectOption::new(p.id, p.name.clone())]))
            .unwrap_or_default()
    });

    let title = Signal::derive(move || {
        detail
            .record
            .with(|p| p.as_ref().map(|p| p.name.clone()))
            .unwrap_or_else(|| Resource::Products.element_name().to_string())
    });
    let on_edit = Callback::new(move |_: ()| {
        if let Some(product) = detail.record.get_untracked() {
            vm.show(ProductDto::from(&product));
        }
    });
    let open_brand = tabs_store.detail_opener(tab_labels::BRAND);

    view! {
        <PageFrame page_id="a005_product--detail" category=PAGE_CAT_DETAIL>
            <DetailHeader title=title loading=detail.loading on_edit=on_edit on_close=on_close>
                {move || {
                    detail
                        .record
                        .with(|p| p.as_ref().map(|p| p.discontinued))
                        .map(|discontinued| {
                            view! { <ActiveBadge active=!discontinued inactive_label="Descatalogado" /> }
                        })
                }}
            </DetailHeader>

            <div class="page__content detail">
                {move || {
                    detail
                        .record
                        .get()
                        .map(|product| {
                            let brand_id = product.brand_id;
                            let brand = ref_name(&product.brand);
                            let product_type = ref_name(&product.product_type);
                            let content = product.content_label();
                            let description = product.description.unwrap_or_else(|| "-".to_string());
                            let photo = product.photo_url.map(|url| {
                                view! { <img class="detail__photo" src=url alt=product.name /> }
                            });
                            view! {
                                <Card>
                                    <div class="detail-grid">
                                        <DetailField label="Marca">
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |e| {
                                                    e.prevent_default();
                                                    open_brand.run(brand_id);
                                                }
                                            >
                                                {brand}
                                            </a>
                                        </DetailField>
                                        <DetailField label="Tipo de producto">{product_type}</DetailField>
                                        <DetailField label="Contenido">{content}</DetailField>
                                        <DetailField label="Descripción">{description}</DetailField>
                                        <DetailField label="Foto">{photo}</DetailField>
                                    </div>
                                </Card>
                            }
                        })
                }}

                <ProductPrices product_id=id products=this_product supermarkets=supermarkets />

                <RelationPanel<LookupValue>
                    owner=Resource::Products
                    owner_id=id
                    relation=Relation::Tags
                    title="Etiquetas"
                />
            </div>

            <ProductForm vm=vm options=options on_saved=on_saved />
        </PageFrame>
    }
}
