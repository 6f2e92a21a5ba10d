use super::form::SupermarketForm;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_labels::{self, detail_key, detail_tab_label};
use crate::shared::components::ui::{ActiveBadge, CountBadge};
use crate::shared::components::{DetailField, DetailHeader, RelationPanel};
use crate::shared::crud::{use_options, DetailState, FormViewModel};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_brand::Brand;
use contracts::domain::a004_supermarket::{Supermarket, SupermarketDto};
use contracts::domain::a007_lookup::LookupValue;
use contracts::domain::common::ref_value;
use contracts::shared::{Relation, Resource};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SupermarketDetail(id: i64, on_close: Callback<()>) -> impl IntoView {
    let tabs_store = use_app_context();
    let detail = DetailState::<Supermarket>::new(Resource::Supermarkets);
    let vm = FormViewModel::<SupermarketDto>::new(Resource::Supermarkets);
    let methods = use_options::<LookupValue>(Resource::AcquisitionMethods);
    let tab_key = detail_key(tab_labels::SUPERMARKET, id);

    Effect::new(move |_| detail.load(id));
    let on_saved = Callback::new(move |_: ()| detail.load(id));

    {
        let tab_key = tab_key.clone();
        Effect::new(move |_| {
            if let Some(name) = detail.record.with(|s| s.as_ref().map(|s| s.name.clone())) {
                tabs_store.update_tab_title(
                    &tab_key,
                    &detail_tab_label(tab_labels::SUPERMARKET, &name),
                );
            }
        });
    }
    Effect::new(move |_| {
        if detail.missing.get() {
            tabs_store.replace_tab(&tab_key, tab_labels::SUPERMARKET);
        }
    });

    let title = Signal::derive(move || {
        detail
            .record
            .with(|s| s.as_ref().map(|s| s.name.clone()))
            .unwrap_or_else(|| Resource::Supermarkets.element_name().to_string())
    });
    let on_edit = Callback::new(move |_: ()| {
        if let Some(market) = detail.record.get_untracked() {
            vm.show(SupermarketDto::from(&market));
        }
    });

    view! {
        <PageFrame page_id="a004_supermarket--detail" category=PAGE_CAT_DETAIL>
            <DetailHeader title=title loading=detail.loading on_edit=on_edit on_close=on_close>
                {move || {
                    detail
                        .record
                        .with(|s| s.as_ref().map(|s| s.active))
                        .map(|active| view! { <ActiveBadge active=active /> })
                }}
            </DetailHeader>

            <div class="page__content detail">
                {move || {
                    detail
                        .record
                        .get()
                        .map(|market| {
                            let description = market.description.clone().unwrap_or_else(|| "-".to_string());
                            let website = market.website.clone().unwrap_or_else(|| "-".to_string());
                            let method = ref_value(&market.acquisition_method);
                            let frequency = market.frequency_label();
                            let prices = market.counts.get("prices");
                            view! {
                                <Card>
                                    <div class="detail-grid">
                                        <DetailField label="Descripción">{description}</DetailField>
                                        <DetailField label="Sitio web">{website}</DetailField>
                                        <DetailField label="Método de obtención">{method}</DetailField>
                                        <DetailField label="Actualización">{frequency}</DetailField>
                                        <DetailField label="Precios registrados">
                                            <CountBadge count=prices />
                                        </DetailField>
                                    </div>
                                </Card>
                            }
                        })
                }}

                <RelationPanel<Brand>
                    owner=Resource::Supermarkets
                    owner_id=id
                    relation=Relation::Brands
                    title="Marcas"
                    on_open=tabs_store.detail_opener(tab_labels::BRAND)
                />
            </div>

            <SupermarketForm vm=vm acquisition_methods=methods on_saved=on_saved />
        </PageFrame>
    }
}
