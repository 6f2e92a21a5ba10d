use serde::{Deserialize, Serialize};

use crate::domain::common::serde_helpers::{text_or_empty, trimmed};
use crate::domain::common::{AdminRecord, EditForm};
use crate::shared::search::Searchable;
use crate::shared::usage::{HasUsage, UsageCounts};
use crate::shared::validation::{Validate, ValidationError, DESCRIPTION_RULE, VALUE_RULE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupValue {
    pub id: i64,
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "_count", default)]
    pub counts: UsageCounts,
}

impl HasUsage for LookupValue {
    fn usage(&self) -> &UsageCounts {
        &self.counts
    }
}

impl Searchable for LookupValue {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.value.as_str()];
        if let Some(d) = &self.description {
            fields.push(d);
        }
        fields
    }
}

impl AdminRecord for LookupValue {
    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.value.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LookupDto {
    #[serde(skip)]
    pub id: Option<i64>,
    #[serde(serialize_with = "trimmed")]
    pub value: String,
    #[serde(serialize_with = "trimmed")]
    pub description: String,
}

impl From<&LookupValue> for LookupDto {
    fn from(v: &LookupValue) -> Self {
        Self {
            id: Some(v.id),
            value: v.value.clone(),
            description: text_or_empty(&v.description),
        }
    }
}

impl Validate for LookupDto {
    fn validate(&self) -> Result<(), ValidationError> {
        VALUE_RULE.check(&self.value)?;
        DESCRIPTION_RULE.check(&self.description)
    }
}

impl EditForm for LookupDto {
    fn record_id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_and_description_thresholds() {
        let mut dto = LookupDto {
            id: None,
            value: "k".to_string(),
            description: "Kilogramo".to_string(),
        };
        assert_eq!(dto.validate().unwrap_err().field, "value");
        dto.value = "kg".to_string();
        assert!(dto.is_valid());
        dto.description = "Kg".to_string();
        assert_eq!(dto.validate().unwrap_err().field, "description");
        dto.description = "   ".to_string();
        assert!(!dto.is_valid());
    }

    #[test]
    fn used_value_is_guarded() {
        let v: LookupValue =
            serde_json::from_str(r#"{"id":1,"value":"sin gluten","_count":{"products":4}}"#)
                .unwrap();
        assert_eq!(v.usage_total(), 4);
        assert!(!v.can_delete());
        assert_eq!(v.display_name(), "sin gluten");
    }

    #[test]
    fn body_is_trimmed() {
        let body = serde_json::to_string(&LookupDto {
            id: Some(3),
            value: " ml ".to_string(),
            description: "Mililitro".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"value":"ml","description":"Mililitro"}"#);
    }
}
