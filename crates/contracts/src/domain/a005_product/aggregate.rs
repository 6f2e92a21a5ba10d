use serde::{Deserialize, Serialize};

use crate::domain::common::serde_helpers::{blank_as_null, text_or_empty, trimmed};
use crate::domain::common::{AdminRecord, EditForm, NamedRef, ValueRef};
use crate::shared::api_path::Resource;
use crate::shared::search::Searchable;
use crate::shared::usage::{HasUsage, UsageCounts};
use crate::shared::validation::{
    require_positive, require_selected, Validate, ValidationError, NAME_RULE,
    OPTIONAL_DESCRIPTION_RULE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub brand_id: i64,
    pub product_type_id: i64,
    pub quantity: f64,
    pub unit_id: i64,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub discontinued: bool,
    #[serde(default)]
    pub brand: Option<NamedRef>,
    #[serde(default)]
    pub product_type: Option<NamedRef>,
    #[serde(default)]
    pub unit: Option<ValueRef>,
    #[serde(default)]
    pub tags: Vec<ValueRef>,
    /// `prices` and `tags`
    #[serde(rename = "_count", default)]
    pub counts: UsageCounts,
}

impl Product {
    /// Net content as shown in tables, e.g. "1.5 l" or "500 g".
    pub fn content_label(&self) -> String {
        let unit = self.unit.as_ref().map(|u| u.value.as_str()).unwrap_or("");
        format!("{} {}", format_quantity(self.quantity), unit)
            .trim_end()
            .to_string()
    }

    pub fn prices_count(&self) -> i64 {
        self.counts.get("prices")
    }

    pub fn has_tag(&self, tag_id: i64) -> bool {
        self.tags.iter().any(|t| t.id == tag_id)
    }
}

fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        let text = format!("{:.3}", quantity);
        text.trim_end_matches('0').to_string()
    }
}

impl HasUsage for Product {
    fn usage(&self) -> &UsageCounts {
        &self.counts
    }

    /// Tags are detached together with the product.
    fn guarding_counters() -> &'static [&'static str] {
        &["prices"]
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(d) = &self.description {
            fields.push(d);
        }
        if let Some(b) = &self.brand {
            fields.push(&b.name);
        }
        if let Some(t) = &self.product_type {
            fields.push(&t.name);
        }
        fields
    }
}

impl AdminRecord for Product {
    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn resource() -> Option<Resource> {
        Some(Resource::Products)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(skip)]
    pub id: Option<i64>,
    #[serde(serialize_with = "trimmed")]
    pub name: String,
    #[serde(serialize_with = "blank_as_null")]
    pub description: String,
    pub brand_id: Option<i64>,
    pub product_type_id: Option<i64>,
    pub quantity: f64,
    pub unit_id: Option<i64>,
    #[serde(serialize_with = "blank_as_null")]
    pub photo_url: String,
    pub discontinued: bool,
}

impl Default for ProductDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            brand_id: None,
            product_type_id: None,
            quantity: 1.0,
            unit_id: None,
            photo_url: String::new(),
            discontinued: false,
        }
    }
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            id: Some(p.id),
            name: p.name.clone(),
            description: text_or_empty(&p.description),
            brand_id: Some(p.brand_id),
            product_type_id: Some(p.product_type_id),
            quantity: p.quantity,
            unit_id: Some(p.unit_id),
            photo_url: text_or_empty(&p.photo_url),
            discontinued: p.discontinued,
        }
    }
}

impl Validate for ProductDto {
    fn validate(&self) -> Result<(), ValidationError> {
        NAME_RULE.check(&self.name)?;
        OPTIONAL_DESCRIPTION_RULE.check(&self.description)?;
        require_selected(self.brand_id, "brandId", "Marca")?;
        require_selected(self.product_type_id, "productTypeId", "Tipo de producto")?;
        require_positive(self.quantity, "quantity", "Cantidad")?;
        require_selected(self.unit_id, "unitId", "Unidad")
    }
}

impl EditForm for ProductDto {
    fn record_id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "id": 7, "name": "Agua mineral", "brandId": 1, "productTypeId": 2,
        "quantity": 1.5, "unitId": 3,
        "brand": {"id": 1, "name": "Font Vella"},
        "unit": {"id": 3, "value": "l"},
        "tags": [{"id": 4, "value": "sin gas"}],
        "_count": {"prices": 0, "tags": 1}
    }"#;

    #[test]
    fn tags_do_not_block_deletion() {
        let p: Product = serde_json::from_str(JSON).unwrap();
        assert!(p.can_delete());
        assert!(p.has_tag(4));
        assert!(!p.discontinued);
    }

    #[test]
    fn content_label_trims_decimals() {
        let mut p: Product = serde_json::from_str(JSON).unwrap();
        assert_eq!(p.content_label(), "1.5 l");
        p.quantity = 500.0;
        p.unit = None;
        assert_eq!(p.content_label(), "500");
    }

    #[test]
    fn search_covers_brand() {
        let p: Product = serde_json::from_str(JSON).unwrap();
        assert!(p.matches("vella"));
        assert!(!p.matches("cola"));
    }

    #[test]
    fn every_selection_is_required() {
        let mut dto = ProductDto {
            name: "Agua".to_string(),
            ..ProductDto::default()
        };
        assert_eq!(dto.validate().unwrap_err().field, "brandId");
        dto.brand_id = Some(1);
        dto.product_type_id = Some(2);
        dto.quantity = 0.0;
        assert_eq!(dto.validate().unwrap_err().field, "quantity");
        dto.quantity = 1.0;
        assert_eq!(dto.validate().unwrap_err().field, "unitId");
        dto.unit_id = Some(3);
        assert!(dto.is_valid());
    }
}
