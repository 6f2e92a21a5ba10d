use serde::{Deserialize, Serialize};

use crate::domain::common::serde_helpers::{blank_as_null, text_or_empty, trimmed};
use crate::domain::common::{AdminRecord, EditForm, NamedRef};
use crate::shared::api_path::Resource;
use crate::shared::search::Searchable;
use crate::shared::usage::{HasUsage, UsageCounts};
use crate::shared::validation::{
    require_selected, Validate, ValidationError, NAME_RULE, OPTIONAL_DESCRIPTION_RULE,
};

/// Product type ("Tipo de producto"), always under exactly one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub category_id: i64,
    #[serde(default)]
    pub category: Option<NamedRef>,
    #[serde(rename = "_count", default)]
    pub counts: UsageCounts,
}

fn default_active() -> bool {
    true
}

impl ProductType {
    pub fn products_count(&self) -> i64 {
        self.counts.get("products")
    }
}

impl HasUsage for ProductType {
    fn usage(&self) -> &UsageCounts {
        &self.counts
    }
}

impl Searchable for ProductType {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(d) = &self.description {
            fields.push(d);
        }
        if let Some(c) = &self.category {
            fields.push(&c.name);
        }
        fields
    }
}

impl AdminRecord for ProductType {
    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn resource() -> Option<Resource> {
        Some(Resource::ProductTypes)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeDto {
    #[serde(skip)]
    pub id: Option<i64>,
    #[serde(serialize_with = "trimmed")]
    pub name: String,
    #[serde(serialize_with = "blank_as_null")]
    pub description: String,
    #[serde(serialize_with = "blank_as_null")]
    pub image_url: String,
    pub category_id: Option<i64>,
    pub active: bool,
}

impl Default for ProductTypeDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            image_url: String::new(),
            category_id: None,
            active: true,
        }
    }
}

impl From<&ProductType> for ProductTypeDto {
    fn from(p: &ProductType) -> Self {
        Self {
            id: Some(p.id),
            name: p.name.clone(),
            description: text_or_empty(&p.description),
            image_url: text_or_empty(&p.image_url),
            category_id: Some(p.category_id),
            active: p.active,
        }
    }
}

impl Validate for ProductTypeDto {
    fn validate(&self) -> Result<(), ValidationError> {
        NAME_RULE.check(&self.name)?;
        OPTIONAL_DESCRIPTION_RULE.check(&self.description)?;
        require_selected(self.category_id, "categoryId", "Categoría")
    }
}

impl EditForm for ProductTypeDto {
    fn record_id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_category() {
        let mut dto = ProductTypeDto {
            name: "Gaseosas".to_string(),
            ..ProductTypeDto::default()
        };
        assert_eq!(dto.validate().unwrap_err().field, "categoryId");
        dto.category_id = Some(2);
        assert!(dto.is_valid());
    }

    #[test]
    fn search_includes_category_name() {
        let p: ProductType = serde_json::from_str(
            r#"{"id":5,"name":"Gaseosas","categoryId":2,"category":{"id":2,"name":"Refrescos"},"_count":{"products":3}}"#,
        )
        .unwrap();
        assert!(p.matches("refres"));
        assert_eq!(p.products_count(), 3);
        assert!(!p.can_delete());
    }
}
