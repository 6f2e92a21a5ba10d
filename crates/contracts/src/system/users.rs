use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::serde_helpers::trimmed;
use crate::domain::common::{AdminRecord, EditForm, ValueRef};
use crate::shared::api_path::Resource;
use crate::shared::search::Searchable;
use crate::shared::usage::{HasUsage, UsageCounts};
use crate::shared::validation::{char_len, Validate, ValidationError, NAME_RULE};

pub const EMAIL_MIN: usize = 5;
pub const PASSWORD_MIN: usize = 6;

/// Shopper account as seen by administrators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub gender_id: Option<i64>,
    #[serde(default)]
    pub gender: Option<ValueRef>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
    /// `lists`
    #[serde(rename = "_count", default)]
    pub counts: UsageCounts,
}

fn default_active() -> bool {
    true
}

impl HasUsage for AdminUser {
    fn usage(&self) -> &UsageCounts {
        &self.counts
    }
}

impl Searchable for AdminUser {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

impl AdminRecord for AdminUser {
    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    fn resource() -> Option<Resource> {
        Some(Resource::Users)
    }
}

/// Create / edit form of a user. The password is only sent when typed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserDto {
    #[serde(skip)]
    pub id: Option<i64>,
    #[serde(serialize_with = "trimmed")]
    pub name: String,
    #[serde(serialize_with = "trimmed")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    pub gender_id: Option<i64>,
    pub active: bool,
}

impl Default for AdminUserDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            gender_id: None,
            active: true,
        }
    }
}

impl From<&AdminUser> for AdminUserDto {
    fn from(u: &AdminUser) -> Self {
        Self {
            id: Some(u.id),
            name: u.name.clone(),
            email: u.email.clone(),
            password: String::new(),
            gender_id: u.gender_id,
            active: u.active,
        }
    }
}

impl Validate for AdminUserDto {
    fn validate(&self) -> Result<(), ValidationError> {
        NAME_RULE.check(&self.name)?;
        let email = self.email.trim();
        if char_len(email) < EMAIL_MIN || !email.contains('@') {
            return Err(ValidationError::new(
                "email",
                "Correo electrónico",
                "no es una dirección válida",
            ));
        }
        let password_len = self.password.chars().count();
        let editing = self.id.is_some();
        if (editing && password_len == 0) || password_len >= PASSWORD_MIN {
            Ok(())
        } else {
            Err(ValidationError::too_short("password", "Contraseña", PASSWORD_MIN))
        }
    }
}

impl EditForm for AdminUserDto {
    fn record_id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> AdminUserDto {
        AdminUserDto {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secreto".to_string(),
            ..AdminUserDto::default()
        }
    }

    #[test]
    fn email_needs_at_sign_and_length() {
        let mut u = dto();
        u.email = "a@b".to_string();
        assert_eq!(u.validate().unwrap_err().field, "email");
        u.email = "ana.example.com".to_string();
        assert_eq!(u.validate().unwrap_err().field, "email");
        u.email = "a@b.c".to_string();
        assert!(u.is_valid());
    }

    #[test]
    fn password_required_only_on_create() {
        let mut u = dto();
        u.password = String::new();
        assert_eq!(u.validate().unwrap_err().field, "password");
        u.id = Some(4);
        assert!(u.is_valid());
        u.password = "12345".to_string();
        assert!(!u.is_valid());
        u.password = "123456".to_string();
        assert!(u.is_valid());
    }

    #[test]
    fn blank_password_is_not_sent() {
        let mut u = dto();
        u.id = Some(4);
        u.password = String::new();
        let body = serde_json::to_value(&u).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["email"], "ana@example.com");
    }

    #[test]
    fn parses_user_record() {
        let u: AdminUser = serde_json::from_str(
            r#"{"id":4,"name":"Ana","email":"ana@example.com","genderId":null,
                "createdAt":"2024-02-01T10:00:00Z","_count":{"lists":2}}"#,
        )
        .unwrap();
        assert!(u.active);
        assert!(!u.can_delete());
        assert!(u.matches("EXAMPLE"));
    }
}
