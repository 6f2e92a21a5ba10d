//! Response envelope normalisation.
//!
//! Most admin endpoints answer `{success, data, message}`, a few answer the
//! bare array or object. Both shapes are folded into one `Result` here so the
//! pages never branch on the wire format.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default = "none")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> ApiEnvelope<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::rejected(self.message));
        }
        self.data
            .ok_or_else(|| ApiError::Decode("la respuesta no contiene datos".to_string()))
    }
}

/// Either wire shape of a read endpoint.
///
/// `Envelope` is tried first; a bare record never carries `success`, so it
/// falls through to `Bare`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiPayload<T> {
    Envelope(ApiEnvelope<T>),
    Bare(T),
}

impl<T> ApiPayload<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiPayload::Envelope(envelope) => envelope.into_result(),
            ApiPayload::Bare(value) => Ok(value),
        }
    }
}

/// Parse the body of a successful (2xx) read response.
pub fn parse_payload<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<ApiPayload<T>>(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .into_result()
}

/// Outcome of a mutation that the server accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ack {
    pub message: Option<String>,
    pub data: Option<serde_json::Value>,
}

/// Parse the body of a successful (2xx) mutation response.
///
/// An empty body and a body that is not an envelope both count as success.
pub fn parse_ack(body: &str) -> Result<Ack, ApiError> {
    if body.trim().is_empty() {
        return Ok(Ack::default());
    }
    match serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body) {
        Ok(envelope) if !envelope.success => Err(ApiError::rejected(envelope.message)),
        Ok(envelope) => Ok(Ack {
            message: envelope.message,
            data: envelope.data,
        }),
        Err(_) => Ok(Ack {
            message: None,
            data: serde_json::from_str(body).ok(),
        }),
    }
}

/// Map a non-2xx response to an error, keeping the server message when the
/// body is an envelope that carries one.
pub fn error_from_status(status: u16, body: &str) -> ApiError {
    if status == 404 {
        return ApiError::NotFound;
    }
    match serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body) {
        Ok(ApiEnvelope {
            message: Some(message),
            ..
        }) if !message.trim().is_empty() => ApiError::Rejected { message },
        _ => ApiError::Http { status },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::GENERIC_FAILURE;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Item {
        id: i64,
        name: String,
    }

    #[test]
    fn envelope_list_is_unwrapped() {
        let body = r#"{"success":true,"data":[{"id":1,"name":"Bebidas"}]}"#;
        let items: Vec<Item> = parse_payload(body).unwrap();
        assert_eq!(
            items,
            vec![Item {
                id: 1,
                name: "Bebidas".to_string()
            }]
        );
    }

    #[test]
    fn bare_array_is_accepted() {
        let body = r#"[{"id":1,"name":"Bebidas"},{"id":2,"name":"Aguas"}]"#;
        let items: Vec<Item> = parse_payload(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Aguas");
    }

    #[test]
    fn bare_object_is_accepted() {
        let body = r#"{"id":7,"name":"Lácteos"}"#;
        let item: Item = parse_payload(body).unwrap();
        assert_eq!(item.id, 7);
    }

    #[test]
    fn failed_envelope_carries_message() {
        let body = r#"{"success":false,"message":"Sin permisos"}"#;
        let err = parse_payload::<Vec<Item>>(body).unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                message: "Sin permisos".to_string()
            }
        );
    }

    #[test]
    fn failed_envelope_without_message_uses_fallback() {
        let err = parse_payload::<Vec<Item>>(r#"{"success":false}"#).unwrap_err();
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn successful_envelope_without_data_is_a_decode_error() {
        let err = parse_payload::<Vec<Item>>(r#"{"success":true}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = parse_payload::<Vec<Item>>("<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn ack_accepts_empty_and_bare_bodies() {
        assert_eq!(parse_ack("").unwrap(), Ack::default());
        let ack = parse_ack(r#"{"id":3,"name":"x"}"#).unwrap();
        assert!(ack.message.is_none());
        assert!(ack.data.is_some());
    }

    #[test]
    fn ack_reports_rejection() {
        let err = parse_ack(r#"{"success":false,"message":"Nombre duplicado"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Nombre duplicado");
    }

    #[test]
    fn ack_keeps_success_message() {
        let ack = parse_ack(r#"{"success":true,"message":"Creado"}"#).unwrap();
        assert_eq!(ack.message.as_deref(), Some("Creado"));
    }

    #[test]
    fn status_errors() {
        assert_eq!(error_from_status(404, ""), ApiError::NotFound);
        assert_eq!(
            error_from_status(500, "Internal Server Error"),
            ApiError::Http { status: 500 }
        );
        assert_eq!(
            error_from_status(409, r#"{"success":false,"message":"En uso"}"#),
            ApiError::Rejected {
                message: "En uso".to_string()
            }
        );
    }
}
