//! Page category constants.
//!
//! Every page rendered inside a tab declares an HTML `id` of the form
//! `{entity}--{category}` (e.g. `"a003_brand--list"`) and a
//! `data-page-category` taken from the constants below.

/// Table of records with search and actions.
pub const PAGE_CAT_LIST: &str = "list";

/// One record with its related collections.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Hierarchical view (category tree).
pub const PAGE_CAT_TREE: &str = "tree";

/// Administration of accounts.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_id_format() {
        assert!(is_valid_page_id("a003_brand--list"));
        assert!(is_valid_page_id("a001_category--tree"));
        assert!(!is_valid_page_id("a003_brand"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a003_brand--"));
    }
}
