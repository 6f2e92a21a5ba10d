use thiserror::Error;

use super::validation::ValidationError;

/// Message shown when the server refuses an operation without saying why.
pub const GENERIC_FAILURE: &str = "No se pudo completar la operación";

/// Every way a request against the admin API can fail.
///
/// Transport failures and `success: false` envelopes are reported the same
/// way by the UI; the variants only exist so callers can special-case
/// `NotFound` and so the log line says what happened.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Error de red: {0}")]
    Network(String),

    #[error("El servidor respondió con HTTP {status}")]
    Http { status: u16 },

    #[error("{message}")]
    Rejected { message: String },

    #[error("Registro no encontrado")]
    NotFound,

    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// Application-level failure; falls back to the generic message when the
    /// server did not send one.
    pub fn rejected(message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        ApiError::Rejected { message }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_uses_server_message() {
        let err = ApiError::rejected(Some("La marca ya existe".to_string()));
        assert_eq!(err.to_string(), "La marca ya existe");
    }

    #[test]
    fn rejected_falls_back_on_blank_message() {
        assert_eq!(ApiError::rejected(None).to_string(), GENERIC_FAILURE);
        assert_eq!(
            ApiError::rejected(Some("   ".to_string())).to_string(),
            GENERIC_FAILURE
        );
    }

    #[test]
    fn validation_error_converts() {
        let err: ApiError = ValidationError::too_short("name", "Nombre", 2).into();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(!err.is_not_found());
    }
}
