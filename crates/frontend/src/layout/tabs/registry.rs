//! Tab key → view. Every page reachable from the sidebar or the URL is listed here.

use super::tab_labels::{self, parse_detail_key};
use crate::domain::a001_category::ui::tree::CategoryTree;
use crate::domain::a002_product_type::ui::list::ProductTypeList;
use crate::domain::a003_brand::ui::details::BrandDetail;
use crate::domain::a003_brand::ui::list::BrandList;
use crate::domain::a004_supermarket::ui::details::SupermarketDetail;
use crate::domain::a004_supermarket::ui::list::SupermarketList;
use crate::domain::a005_product::ui::details::ProductDetail;
use crate::domain::a005_product::ui::list::ProductList;
use crate::domain::a006_price::ui::list::PriceList;
use crate::domain::a007_lookup::ui::list::LookupList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::users::ui::list::UsersListPage;
use contracts::domain::a007_lookup::LookupKind;
use leptos::prelude::*;

pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_: ()| tabs_store.close_tab(&key_for_close));

    match key {
        tab_labels::CATEGORY => view! { <CategoryTree /> }.into_any(),
        tab_labels::PRODUCT_TYPE => view! { <ProductTypeList /> }.into_any(),
        tab_labels::BRAND => view! { <BrandList /> }.into_any(),
        tab_labels::SUPERMARKET => view! { <SupermarketList /> }.into_any(),
        tab_labels::PRODUCT => view! { <ProductList /> }.into_any(),
        tab_labels::PRICE => view! { <PriceList /> }.into_any(),
        tab_labels::USERS => view! { <UsersListPage /> }.into_any(),
        k => {
            if let Some(kind) = LookupKind::from_page_key(k) {
                return view! { <LookupList kind=kind /> }.into_any();
            }
            match parse_detail_key(k) {
                Some((tab_labels::BRAND, id)) => {
                    view! { <BrandDetail id=id on_close=on_close /> }.into_any()
                }
                Some((tab_labels::SUPERMARKET, id)) => {
                    view! { <SupermarketDetail id=id on_close=on_close /> }.into_any()
                }
                Some((tab_labels::PRODUCT, id)) => {
                    view! { <ProductDetail id=id on_close=on_close /> }.into_any()
                }
                _ => {
                    log::warn!("no page registered for tab '{}'", k);
                    view! {
                        <div class="page">
                            <div class="page__placeholder">"Página no encontrada: " {k.to_string()}</div>
                        </div>
                    }
                    .into_any()
                }
            }
        }
    }
}
