//! Admin REST resources and the paths built from them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const API_PREFIX: &str = "/api/admin";

/// HTTP verb a resource expects for updates. The backend is not uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateVerb {
    Patch,
    Put,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Users,
    Categories,
    ProductTypes,
    Brands,
    Supermarkets,
    Products,
    Prices,
    Tags,
    Units,
    Genders,
    ListModes,
    AcquisitionMethods,
}

impl Resource {
    pub const fn segment(self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Categories => "categories",
            Resource::ProductTypes => "product-types",
            Resource::Brands => "brands",
            Resource::Supermarkets => "supermarkets",
            Resource::Products => "products",
            Resource::Prices => "prices",
            Resource::Tags => "tags",
            Resource::Units => "units",
            Resource::Genders => "genders",
            Resource::ListModes => "list-modes",
            Resource::AcquisitionMethods => "acquisition-methods",
        }
    }

    pub const fn update_verb(self) -> UpdateVerb {
        match self {
            Resource::Brands | Resource::Supermarkets | Resource::Products => UpdateVerb::Put,
            _ => UpdateVerb::Patch,
        }
    }

    /// Singular name used in query keys such as `excludeBrandId`.
    pub const fn singular(self) -> &'static str {
        match self {
            Resource::Users => "User",
            Resource::Categories => "Category",
            Resource::ProductTypes => "ProductType",
            Resource::Brands => "Brand",
            Resource::Supermarkets => "Supermarket",
            Resource::Products => "Product",
            Resource::Prices => "Price",
            Resource::Tags => "Tag",
            Resource::Units => "Unit",
            Resource::Genders => "Gender",
            Resource::ListModes => "ListMode",
            Resource::AcquisitionMethods => "AcquisitionMethod",
        }
    }

    /// UI name of one record.
    pub const fn element_name(self) -> &'static str {
        match self {
            Resource::Users => "Usuario",
            Resource::Categories => "Categoría",
            Resource::ProductTypes => "Tipo de producto",
            Resource::Brands => "Marca",
            Resource::Supermarkets => "Supermercado",
            Resource::Products => "Producto",
            Resource::Prices => "Precio",
            Resource::Tags => "Etiqueta",
            Resource::Units => "Unidad",
            Resource::Genders => "Género",
            Resource::ListModes => "Modo de lista",
            Resource::AcquisitionMethods => "Método de adquisición",
        }
    }

    /// UI name of the collection.
    pub const fn list_name(self) -> &'static str {
        match self {
            Resource::Users => "Usuarios",
            Resource::Categories => "Categorías",
            Resource::ProductTypes => "Tipos de producto",
            Resource::Brands => "Marcas",
            Resource::Supermarkets => "Supermercados",
            Resource::Products => "Productos",
            Resource::Prices => "Precios",
            Resource::Tags => "Etiquetas",
            Resource::Units => "Unidades",
            Resource::Genders => "Géneros",
            Resource::ListModes => "Modos de lista",
            Resource::AcquisitionMethods => "Métodos de adquisición",
        }
    }

    pub fn collection(self) -> String {
        format!("{}/{}", API_PREFIX, self.segment())
    }

    pub fn item(self, id: i64) -> String {
        format!("{}/{}", self.collection(), id)
    }

    pub fn relation(self, id: i64, relation: Relation) -> String {
        format!("{}/{}", self.item(id), relation.segment())
    }

    pub fn relation_item(self, id: i64, relation: Relation, related_id: i64) -> String {
        format!("{}/{}", self.relation(id, relation), related_id)
    }
}

/// Satellite collections exposed under a record, e.g. `/brands/3/products`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Products,
    Supermarkets,
    Brands,
    Prices,
    Tags,
}

impl Relation {
    pub const fn segment(self) -> &'static str {
        self.target().segment()
    }

    /// Collection the related records live in.
    pub const fn target(self) -> Resource {
        match self {
            Relation::Products => Resource::Products,
            Relation::Supermarkets => Resource::Supermarkets,
            Relation::Brands => Resource::Brands,
            Relation::Prices => Resource::Prices,
            Relation::Tags => Resource::Tags,
        }
    }
}

/// Body of a bulk-associate request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationRequest {
    pub related_ids: Vec<i64>,
}

/// Query parameters of a list request. Blank values are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ListQuery(BTreeMap<String, String>);

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(self, search: &str) -> Self {
        self.with_param("search", search)
    }

    pub fn with_filter(self, key: &str, value: impl ToString) -> Self {
        self.with_param(key, &value.to_string())
    }

    /// Hide records already associated with `owner`, e.g. `excludeBrandId=3`.
    pub fn excluding(self, owner: Resource, owner_id: i64) -> Self {
        let key = format!("exclude{}Id", owner.singular());
        self.with_param(&key, &owner_id.to_string())
    }

    fn with_param(mut self, key: &str, value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            self.0.remove(key);
        } else {
            self.0.insert(key.to_string(), value.to_string());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_and_item_paths() {
        assert_eq!(Resource::Categories.collection(), "/api/admin/categories");
        assert_eq!(Resource::ProductTypes.item(12), "/api/admin/product-types/12");
        assert_eq!(
            Resource::AcquisitionMethods.collection(),
            "/api/admin/acquisition-methods"
        );
    }

    #[test]
    fn relation_paths() {
        assert_eq!(
            Resource::Brands.relation(3, Relation::Products),
            "/api/admin/brands/3/products"
        );
        assert_eq!(
            Resource::Products.relation_item(5, Relation::Tags, 9),
            "/api/admin/products/5/tags/9"
        );
        assert_eq!(Relation::Supermarkets.target(), Resource::Supermarkets);
    }

    #[test]
    fn update_verbs_are_mixed() {
        assert_eq!(Resource::Brands.update_verb(), UpdateVerb::Put);
        assert_eq!(Resource::Products.update_verb(), UpdateVerb::Put);
        assert_eq!(Resource::Categories.update_verb(), UpdateVerb::Patch);
        assert_eq!(Resource::Tags.update_verb(), UpdateVerb::Patch);
    }

    #[test]
    fn query_skips_blank_values() {
        let query = ListQuery::new().with_search("   ").with_filter("brandId", 3);
        assert_eq!(query.get("search"), None);
        assert_eq!(query.get("brandId"), Some("3"));

        let cleared = query.with_filter("brandId", "");
        assert!(cleared.is_empty());
    }

    #[test]
    fn exclusion_key_uses_owner_name() {
        let query = ListQuery::new()
            .with_search("cola")
            .excluding(Resource::Brands, 3);
        let params: Vec<_> = query.params().collect();
        assert_eq!(params, vec![("excludeBrandId", "3"), ("search", "cola")]);
    }

    #[test]
    fn relation_request_is_camel_case() {
        let body = serde_json::to_string(&RelationRequest {
            related_ids: vec![1, 2],
        })
        .unwrap();
        assert_eq!(body, r#"{"relatedIds":[1,2]}"#);
    }
}
