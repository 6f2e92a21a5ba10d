//! Serialisation helpers shared by the form DTOs.

use serde::Serializer;

/// Forms keep optional text as plain `String`; the API wants `null` for blank.
pub fn blank_as_null<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        serializer.serialize_none()
    } else {
        serializer.serialize_str(trimmed)
    }
}

/// Required text goes out trimmed.
pub fn trimmed<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.trim())
}

/// Convert an optional record field into form text.
pub fn text_or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Form {
        #[serde(serialize_with = "super::trimmed")]
        name: String,
        #[serde(serialize_with = "super::blank_as_null")]
        description: String,
    }

    #[test]
    fn blank_text_becomes_null() {
        let json = serde_json::to_string(&Form {
            name: "  Aguas ".to_string(),
            description: "   ".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"name":"Aguas","description":null}"#);
    }

    #[test]
    fn filled_text_is_trimmed() {
        let json = serde_json::to_string(&Form {
            name: "Aguas".to_string(),
            description: " Sin gas ".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"name":"Aguas","description":"Sin gas"}"#);
    }
}
