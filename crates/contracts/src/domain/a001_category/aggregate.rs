use serde::{Deserialize, Serialize};

use crate::domain::common::serde_helpers::{blank_as_null, text_or_empty, trimmed};
use crate::domain::common::{AdminRecord, EditForm};
use crate::shared::api_path::Resource;
use crate::shared::search::Searchable;
use crate::shared::usage::{HasUsage, UsageCounts};
use crate::shared::validation::{Validate, ValidationError, NAME_RULE, OPTIONAL_DESCRIPTION_RULE};

/// Product category. Categories nest under each other through `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    /// `children` and `productTypes`
    #[serde(rename = "_count", default)]
    pub counts: UsageCounts,
}

fn default_active() -> bool {
    true
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn children_count(&self) -> i64 {
        self.counts.get("children")
    }

    pub fn product_types_count(&self) -> i64 {
        self.counts.get("productTypes")
    }
}

impl HasUsage for Category {
    fn usage(&self) -> &UsageCounts {
        &self.counts
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(d) = &self.description {
            fields.push(d);
        }
        fields
    }
}

impl AdminRecord for Category {
    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn resource() -> Option<Resource> {
        Some(Resource::Categories)
    }
}

/// Create / edit form of a category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(skip)]
    pub id: Option<i64>,
    #[serde(serialize_with = "trimmed")]
    pub name: String,
    #[serde(serialize_with = "blank_as_null")]
    pub description: String,
    pub parent_id: Option<i64>,
    #[serde(serialize_with = "blank_as_null")]
    pub image_url: String,
    pub active: bool,
}

impl Default for CategoryDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            parent_id: None,
            image_url: String::new(),
            active: true,
        }
    }
}

impl From<&Category> for CategoryDto {
    fn from(c: &Category) -> Self {
        Self {
            id: Some(c.id),
            name: c.name.clone(),
            description: text_or_empty(&c.description),
            parent_id: c.parent_id,
            image_url: text_or_empty(&c.image_url),
            active: c.active,
        }
    }
}

impl CategoryDto {
    /// New subcategory form preselecting the parent.
    pub fn child_of(parent_id: i64) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::default()
        }
    }
}

impl Validate for CategoryDto {
    fn validate(&self) -> Result<(), ValidationError> {
        NAME_RULE.check(&self.name)?;
        OPTIONAL_DESCRIPTION_RULE.check(&self.description)?;
        if self.id.is_some() && self.id == self.parent_id {
            return Err(ValidationError::new(
                "parentId",
                "Categoría padre",
                "una categoría no puede ser su propio padre",
            ));
        }
        Ok(())
    }
}

impl EditForm for CategoryDto {
    fn record_id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_record() {
        let json = r#"{
            "id": 2,
            "name": "Refrescos",
            "description": null,
            "parentId": 1,
            "imageUrl": "https://cdn.example/refrescos.png",
            "active": true,
            "_count": {"children": 0, "productTypes": 4}
        }"#;
        let c: Category = serde_json::from_str(json).unwrap();
        assert_eq!(c.parent_id, Some(1));
        assert_eq!(c.product_types_count(), 4);
        assert!(!c.can_delete());
    }

    #[test]
    fn missing_optionals_default() {
        let c: Category = serde_json::from_str(r#"{"id":1,"name":"Bebidas"}"#).unwrap();
        assert!(c.is_root());
        assert!(c.active);
        assert!(c.can_delete());
    }

    #[test]
    fn form_validation_thresholds() {
        let mut dto = CategoryDto {
            name: "B".to_string(),
            ..CategoryDto::default()
        };
        assert!(!dto.is_valid());
        dto.name = "Be".to_string();
        assert!(dto.is_valid());
        dto.description = "ab".to_string();
        assert!(!dto.is_valid());
        dto.description = "abc".to_string();
        assert!(dto.is_valid());
    }

    #[test]
    fn self_parent_is_rejected() {
        let dto = CategoryDto {
            id: Some(3),
            name: "Aguas".to_string(),
            parent_id: Some(3),
            ..CategoryDto::default()
        };
        assert_eq!(dto.validate().unwrap_err().field, "parentId");
    }

    #[test]
    fn serializes_blank_optionals_as_null() {
        let dto = CategoryDto {
            name: " Aguas ".to_string(),
            ..CategoryDto::child_of(1)
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["name"], "Aguas");
        assert_eq!(json["parentId"], 1);
        assert!(json["description"].is_null());
        assert!(json["imageUrl"].is_null());
        assert!(json.get("id").is_none());
    }
}
