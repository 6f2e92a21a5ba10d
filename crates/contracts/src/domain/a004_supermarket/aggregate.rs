use serde::{Deserialize, Serialize};

use crate::domain::common::serde_helpers::{blank_as_null, text_or_empty, trimmed};
use crate::domain::common::{AdminRecord, EditForm, ValueRef};
use crate::shared::api_path::Resource;
use crate::shared::search::Searchable;
use crate::shared::usage::{HasUsage, UsageCounts};
use crate::shared::validation::{Validate, ValidationError, NAME_RULE, OPTIONAL_DESCRIPTION_RULE};

/// Store ("Supermercado") whose prices are collected by an acquisition method
/// at a given frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supermarket {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub acquisition_method_id: Option<i64>,
    #[serde(default)]
    pub acquisition_method: Option<ValueRef>,
    #[serde(default)]
    pub update_frequency_hours: Option<u32>,
    #[serde(default = "default_active")]
    pub active: bool,
    /// `prices` and `brands`
    #[serde(rename = "_count", default)]
    pub counts: UsageCounts,
}

fn default_active() -> bool {
    true
}

impl Supermarket {
    /// Human readable update frequency, e.g. "Cada 24 h".
    pub fn frequency_label(&self) -> String {
        match self.update_frequency_hours {
            Some(h) if h % 24 == 0 && h >= 48 => format!("Cada {} días", h / 24),
            Some(h) => format!("Cada {} h", h),
            None => "-".to_string(),
        }
    }
}

impl HasUsage for Supermarket {
    fn usage(&self) -> &UsageCounts {
        &self.counts
    }
}

impl Searchable for Supermarket {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(d) = &self.description {
            fields.push(d);
        }
        if let Some(m) = &self.acquisition_method {
            fields.push(&m.value);
        }
        fields
    }
}

impl AdminRecord for Supermarket {
    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn resource() -> Option<Resource> {
        Some(Resource::Supermarkets)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupermarketDto {
    #[serde(skip)]
    pub id: Option<i64>,
    #[serde(serialize_with = "trimmed")]
    pub name: String,
    #[serde(serialize_with = "blank_as_null")]
    pub description: String,
    #[serde(serialize_with = "blank_as_null")]
    pub website: String,
    #[serde(serialize_with = "blank_as_null")]
    pub logo_url: String,
    pub acquisition_method_id: Option<i64>,
    pub update_frequency_hours: Option<u32>,
    pub active: bool,
}

impl Default for SupermarketDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            website: String::new(),
            logo_url: String::new(),
            acquisition_method_id: None,
            update_frequency_hours: None,
            active: true,
        }
    }
}

impl From<&Supermarket> for SupermarketDto {
    fn from(s: &Supermarket) -> Self {
        Self {
            id: Some(s.id),
            name: s.name.clone(),
            description: text_or_empty(&s.description),
            website: text_or_empty(&s.website),
            logo_url: text_or_empty(&s.logo_url),
            acquisition_method_id: s.acquisition_method_id,
            update_frequency_hours: s.update_frequency_hours,
            active: s.active,
        }
    }
}

impl Validate for SupermarketDto {
    fn validate(&self) -> Result<(), ValidationError> {
        NAME_RULE.check(&self.name)?;
        OPTIONAL_DESCRIPTION_RULE.check(&self.description)?;
        if self.update_frequency_hours == Some(0) {
            return Err(ValidationError::new(
                "updateFrequencyHours",
                "Frecuencia de actualización",
                "debe ser mayor que cero",
            ));
        }
        Ok(())
    }
}

impl EditForm for SupermarketDto {
    fn record_id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(hours: Option<u32>) -> Supermarket {
        Supermarket {
            id: 1,
            name: "Mercadona".to_string(),
            description: None,
            website: None,
            logo_url: None,
            acquisition_method_id: None,
            acquisition_method: None,
            update_frequency_hours: hours,
            active: true,
            counts: UsageCounts::default(),
        }
    }

    #[test]
    fn frequency_labels() {
        assert_eq!(market(None).frequency_label(), "-");
        assert_eq!(market(Some(12)).frequency_label(), "Cada 12 h");
        assert_eq!(market(Some(24)).frequency_label(), "Cada 24 h");
        assert_eq!(market(Some(72)).frequency_label(), "Cada 3 días");
    }

    #[test]
    fn zero_frequency_is_invalid() {
        let mut dto = SupermarketDto::from(&market(Some(0)));
        assert_eq!(dto.validate().unwrap_err().field, "updateFrequencyHours");
        dto.update_frequency_hours = None;
        assert!(dto.is_valid());
    }
}
