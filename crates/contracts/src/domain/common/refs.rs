use serde::{Deserialize, Serialize};

/// Embedded reference to a record identified by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}

/// Embedded reference to a lookup value identified by `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRef {
    pub id: i64,
    pub value: String,
}

/// Name of an optional embedded reference, `-` when absent.
pub fn ref_name(r: &Option<NamedRef>) -> String {
    r.as_ref().map(|r| r.name.clone()).unwrap_or_else(|| "-".to_string())
}

pub fn ref_value(r: &Option<ValueRef>) -> String {
    r.as_ref().map(|r| r.value.clone()).unwrap_or_else(|| "-".to_string())
}
