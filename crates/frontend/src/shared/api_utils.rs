//! API utilities for frontend-backend communication
//!
//! Builds absolute URLs for the admin REST API.

use contracts::shared::ListQuery;

/// Port the admin API listens on when no explicit base is configured.
pub const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// `ADMIN_API_BASE` set at build time wins. Otherwise the URL is derived from
/// the current window location with port 3000.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("ADMIN_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&Resource::Brands.item(3));
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Append the query string of `query` to `path`.
pub fn with_query(path: &str, query: &ListQuery) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::Resource;

    #[test]
    fn empty_query_leaves_path_alone() {
        assert_eq!(
            with_query("/api/admin/brands", &ListQuery::new()),
            "/api/admin/brands"
        );
    }

    #[test]
    fn relation_search_query() {
        let query = ListQuery::new()
            .with_search("cola")
            .excluding(Resource::Brands, 3);
        assert_eq!(
            with_query(&Resource::Products.collection(), &query),
            "/api/admin/products?excludeBrandId=3&search=cola"
        );
    }

    #[test]
    fn search_text_is_encoded() {
        let query = ListQuery::new().with_search("agua con gas");
        let url = with_query("/api/admin/products", &query);
        assert!(url == "/api/admin/products?search=agua+con+gas"
            || url == "/api/admin/products?search=agua%20con%20gas");
    }
}
