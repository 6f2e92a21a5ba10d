//! Brand detail tab: brand data plus the products and supermarkets linked to it.

use super::form::BrandForm;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_labels::{self, detail_key, detail_tab_label};
use crate::shared::components::ui::ActiveBadge;
use crate::shared::components::{DetailField, DetailHeader, RelationPanel};
use crate::shared::crud::{DetailState, FormViewModel};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_brand::{Brand, BrandDto};
use contracts::domain::a004_supermarket::Supermarket;
use contracts::domain::a005_product::Product;
use contracts::shared::{Relation, Resource};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BrandDetail(id: i64, on_close: Callback<()>) -> impl IntoView {
    let tabs_store = use_app_context();
    let detail = DetailState::<Brand>::new(Resource::Brands);
    let vm = FormViewModel::<BrandDto>::new(Resource::Brands);
    let tab_key = detail_key(tab_labels::BRAND, id);

    Effect::new(move |_| detail.load(id));
    let on_saved = Callback::new(move |_: ()| detail.load(id));

    {
        let tab_key = tab_key.clone();
        Effect::new(move |_| {
            if let Some(name) = detail.record.with(|b| b.as_ref().map(|b| b.name.clone())) {
                tabs_store.update_tab_title(&tab_key, &detail_tab_label(tab_labels::BRAND, &name));
            }
        });
    }
    Effect::new(move |_| {
        if detail.missing.get() {
            tabs_store.replace_tab(&tab_key, tab_labels::BRAND);
        }
    });

    let title = Signal::derive(move || {
        detail
            .record
            .with(|b| b.as_ref().map(|b| b.name.clone()))
            .unwrap_or_else(|| Resource::Brands.element_name().to_string())
    });
    let on_edit = Callback::new(move |_: ()| {
        if let Some(brand) = detail.record.get_untracked() {
            vm.show(BrandDto::from(&brand));
        }
    });

    view! {
        <PageFrame page_id="a003_brand--detail" category=PAGE_CAT_DETAIL>
            <DetailHeader title=title loading=detail.loading on_edit=on_edit on_close=on_close>
                {move || {
                    detail
                        .record
                        .with(|b| b.as_ref().map(|b| b.active))
                        .map(|active| view! { <ActiveBadge active=active inactive_label="Inactiva" /> })
                }}
            </DetailHeader>

            <div class="page__content detail">
                {move || {
                    detail
                        .record
                        .get()
                        .map(|brand| {
                            let description = brand.description.unwrap_or_else(|| "-".to_string());
                            let website = brand.website.unwrap_or_else(|| "-".to_string());
                            let logo = brand.logo_url.map(|url| {
                                view! { <img class="detail__logo" src=url alt=brand.name /> }
                            });
                            view! {
                                <Card>
                                    <div class="detail-grid">
                                        <DetailField label="Descripción">{description}</DetailField>
                                        <DetailField label="Sitio web">{website}</DetailField>
                                        <DetailField label="Logo">{logo}</DetailField>
                                    </div>
                                </Card>
                            }
                        })
                }}

                <RelationPanel<Product>
                    owner=Resource::Brands
                    owner_id=id
                    relation=Relation::Products
                    title="Productos"
                    on_open=tabs_store.detail_opener(tab_labels::PRODUCT)
                />
                <RelationPanel<Supermarket>
                    owner=Resource::Brands
                    owner_id=id
                    relation=Relation::Supermarkets
                    title="Supermercados"
                    on_open=tabs_store.detail_opener(tab_labels::SUPERMARKET)
                />
            </div>

            <BrandForm vm=vm on_saved=on_saved />
        </PageFrame>
    }
}
