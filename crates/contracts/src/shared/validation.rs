//! Client-side form validation.
//!
//! Only the minimal checks the forms enforce before submit: string lengths,
//! required selections and positive numbers. Referential checks stay on the
//! server.

use thiserror::Error;

/// Minimum length of a name / value field.
pub const NAME_MIN: usize = 2;
/// Minimum length of a description field.
pub const DESCRIPTION_MIN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub label: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, label: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            label,
            reason: reason.into(),
        }
    }

    pub fn too_short(field: &'static str, label: &'static str, min_len: usize) -> Self {
        Self::new(field, label, format!("debe tener al menos {} caracteres", min_len))
    }
}

/// Length of a form value as the user perceives it: trimmed, in characters.
pub fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// Minimum-length rule for one text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub label: &'static str,
    pub min_len: usize,
    /// Optional fields may be left blank; when filled they must meet `min_len`.
    pub required: bool,
}

impl FieldRule {
    pub const fn required(field: &'static str, label: &'static str, min_len: usize) -> Self {
        Self {
            field,
            label,
            min_len,
            required: true,
        }
    }

    pub const fn optional(field: &'static str, label: &'static str, min_len: usize) -> Self {
        Self {
            field,
            label,
            min_len,
            required: false,
        }
    }

    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        let len = char_len(value);
        if len == 0 && !self.required {
            return Ok(());
        }
        if len < self.min_len {
            return Err(ValidationError::too_short(self.field, self.label, self.min_len));
        }
        Ok(())
    }
}

pub const NAME_RULE: FieldRule = FieldRule::required("name", "Nombre", NAME_MIN);
pub const VALUE_RULE: FieldRule = FieldRule::required("value", "Valor", NAME_MIN);
pub const DESCRIPTION_RULE: FieldRule =
    FieldRule::required("description", "Descripción", DESCRIPTION_MIN);
pub const OPTIONAL_DESCRIPTION_RULE: FieldRule =
    FieldRule::optional("description", "Descripción", DESCRIPTION_MIN);

pub fn require_selected(
    id: Option<i64>,
    field: &'static str,
    label: &'static str,
) -> Result<(), ValidationError> {
    match id {
        Some(_) => Ok(()),
        None => Err(ValidationError::new(field, label, "debe seleccionarse")),
    }
}

pub fn require_positive(
    value: f64,
    field: &'static str,
    label: &'static str,
) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new(field, label, "debe ser mayor que cero"))
    }
}

/// Implemented by every create/edit DTO. The first failing field wins.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;

    /// Drives the enabled state of the submit button.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rule_flips_at_threshold() {
        assert!(NAME_RULE.check("").is_err());
        assert!(NAME_RULE.check("A").is_err());
        assert!(NAME_RULE.check("Ab").is_ok());
        assert!(DESCRIPTION_RULE.check("ab").is_err());
        assert!(DESCRIPTION_RULE.check("abc").is_ok());
    }

    #[test]
    fn whitespace_does_not_count() {
        assert!(NAME_RULE.check("  a  ").is_err());
        assert!(NAME_RULE.check(" ab ").is_ok());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(char_len("ñá"), 2);
        assert!(NAME_RULE.check("ñ").is_err());
        assert!(NAME_RULE.check("ñá").is_ok());
    }

    #[test]
    fn optional_rule_accepts_blank() {
        assert!(OPTIONAL_DESCRIPTION_RULE.check("").is_ok());
        assert!(OPTIONAL_DESCRIPTION_RULE.check("   ").is_ok());
        assert!(OPTIONAL_DESCRIPTION_RULE.check("ab").is_err());
        assert!(OPTIONAL_DESCRIPTION_RULE.check("abc").is_ok());
    }

    #[test]
    fn error_names_the_field() {
        let err = NAME_RULE.check("x").unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.to_string(), "Nombre: debe tener al menos 2 caracteres");
    }

    #[test]
    fn selections_and_numbers() {
        assert!(require_selected(None, "brandId", "Marca").is_err());
        assert!(require_selected(Some(4), "brandId", "Marca").is_ok());
        assert!(require_positive(0.0, "price", "Precio").is_err());
        assert!(require_positive(-1.5, "price", "Precio").is_err());
        assert!(require_positive(f64::NAN, "price", "Precio").is_err());
        assert!(require_positive(0.01, "price", "Precio").is_ok());
    }
}
