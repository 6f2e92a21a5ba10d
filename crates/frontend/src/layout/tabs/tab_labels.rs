//! Tab keys and titles.
//!
//! List pages use a fixed key per entity (`a003_brand`); detail pages use
//! `<entity>_detail_<id>` (`a003_brand_detail_12`).

use contracts::domain::a007_lookup::LookupKind;
use contracts::shared::Resource;

pub const CATEGORY: &str = "a001_category";
pub const PRODUCT_TYPE: &str = "a002_product_type";
pub const BRAND: &str = "a003_brand";
pub const SUPERMARKET: &str = "a004_supermarket";
pub const PRODUCT: &str = "a005_product";
pub const PRICE: &str = "a006_price";
pub const USERS: &str = "sys_users";

/// Entities that have a detail tab.
pub const DETAIL_ENTITIES: [&str; 3] = [BRAND, SUPERMARKET, PRODUCT];

/// Title of a list tab, `None` for keys that are not list pages.
pub fn tab_label_for_key(key: &str) -> Option<&'static str> {
    let label = match key {
        CATEGORY => Resource::Categories.list_name(),
        PRODUCT_TYPE => Resource::ProductTypes.list_name(),
        BRAND => Resource::Brands.list_name(),
        SUPERMARKET => Resource::Supermarkets.list_name(),
        PRODUCT => Resource::Products.list_name(),
        PRICE => Resource::Prices.list_name(),
        USERS => Resource::Users.list_name(),
        other => return LookupKind::from_page_key(other).map(LookupKind::list_name),
    };
    Some(label)
}

fn element_name(entity: &str) -> &'static str {
    match entity {
        BRAND => Resource::Brands.element_name(),
        SUPERMARKET => Resource::Supermarkets.element_name(),
        PRODUCT => Resource::Products.element_name(),
        _ => "",
    }
}

pub fn detail_key(entity: &str, id: i64) -> String {
    format!("{}_detail_{}", entity, id)
}

/// `(entity, id)` of a detail key.
pub fn parse_detail_key(key: &str) -> Option<(&'static str, i64)> {
    DETAIL_ENTITIES.into_iter().find_map(|entity| {
        key.strip_prefix(entity)
            .and_then(|rest| rest.strip_prefix("_detail_"))
            .and_then(|id| id.parse::<i64>().ok())
            .map(|id| (entity, id))
    })
}

/// Title shown on a detail tab: «<entity> · <identifier>».
pub fn detail_tab_label(entity: &str, identifier: &str) -> String {
    format!("{} · {}", element_name(entity), identifier)
}

/// Initial title for any valid key; detail tabs are renamed once their record loads.
pub fn title_for_key(key: &str) -> Option<String> {
    if let Some(label) = tab_label_for_key(key) {
        return Some(label.to_string());
    }
    parse_detail_key(key).map(|(entity, id)| detail_tab_label(entity, &format!("#{}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_labels() {
        assert_eq!(tab_label_for_key(BRAND), Some("Marcas"));
        assert_eq!(tab_label_for_key("a007_lookup_units"), Some("Unidades"));
        assert_eq!(tab_label_for_key("a009_unknown"), None);
    }

    #[test]
    fn detail_keys_round_trip() {
        let key = detail_key(SUPERMARKET, 42);
        assert_eq!(key, "a004_supermarket_detail_42");
        assert_eq!(parse_detail_key(&key), Some((SUPERMARKET, 42)));
        assert_eq!(parse_detail_key("a004_supermarket_detail_x"), None);
        assert_eq!(parse_detail_key("a006_price_detail_1"), None);
    }

    #[test]
    fn titles() {
        assert_eq!(title_for_key(PRODUCT).as_deref(), Some("Productos"));
        assert_eq!(title_for_key("a005_product_detail_3").as_deref(), Some("Producto · #3"));
        assert_eq!(title_for_key("nope"), None);
    }
}
