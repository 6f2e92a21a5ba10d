use serde::{Deserialize, Serialize};

use crate::domain::common::serde_helpers::{blank_as_null, text_or_empty, trimmed};
use crate::domain::common::{AdminRecord, EditForm};
use crate::shared::api_path::Resource;
use crate::shared::search::Searchable;
use crate::shared::usage::{HasUsage, UsageCounts};
use crate::shared::validation::{Validate, ValidationError, NAME_RULE, OPTIONAL_DESCRIPTION_RULE};

/// Brand ("Marca"). Linked to its products and to the supermarkets carrying it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    /// `products` and `supermarkets`
    #[serde(rename = "_count", default)]
    pub counts: UsageCounts,
}

fn default_active() -> bool {
    true
}

impl HasUsage for Brand {
    fn usage(&self) -> &UsageCounts {
        &self.counts
    }
}

impl Searchable for Brand {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(d) = &self.description {
            fields.push(d);
        }
        fields
    }
}

impl AdminRecord for Brand {
    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn resource() -> Option<Resource> {
        Some(Resource::Brands)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDto {
    #[serde(skip)]
    pub id: Option<i64>,
    #[serde(serialize_with = "trimmed")]
    pub name: String,
    #[serde(serialize_with = "blank_as_null")]
    pub description: String,
    #[serde(serialize_with = "blank_as_null")]
    pub logo_url: String,
    #[serde(serialize_with = "blank_as_null")]
    pub website: String,
    pub active: bool,
}

impl Default for BrandDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            logo_url: String::new(),
            website: String::new(),
            active: true,
        }
    }
}

impl From<&Brand> for BrandDto {
    fn from(b: &Brand) -> Self {
        Self {
            id: Some(b.id),
            name: b.name.clone(),
            description: text_or_empty(&b.description),
            logo_url: text_or_empty(&b.logo_url),
            website: text_or_empty(&b.website),
            active: b.active,
        }
    }
}

impl Validate for BrandDto {
    fn validate(&self) -> Result<(), ValidationError> {
        NAME_RULE.check(&self.name)?;
        OPTIONAL_DESCRIPTION_RULE.check(&self.description)?;
        let website = self.website.trim();
        if !website.is_empty() && !website.starts_with("http://") && !website.starts_with("https://")
        {
            return Err(ValidationError::new(
                "website",
                "Sitio web",
                "debe comenzar con http:// o https://",
            ));
        }
        Ok(())
    }
}

impl EditForm for BrandDto {
    fn record_id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_in_use_cannot_be_deleted() {
        let b: Brand = serde_json::from_str(
            r#"{"id":1,"name":"Coca-Cola","_count":{"products":0,"supermarkets":2}}"#,
        )
        .unwrap();
        assert_eq!(b.usage_total(), 2);
        assert!(!b.can_delete());
    }

    #[test]
    fn website_must_be_http() {
        let mut dto = BrandDto {
            name: "Pepsi".to_string(),
            website: "pepsi.com".to_string(),
            ..BrandDto::default()
        };
        assert_eq!(dto.validate().unwrap_err().field, "website");
        dto.website = "https://pepsi.com".to_string();
        assert!(dto.is_valid());
    }
}
