pub mod api_path;
pub mod envelope;
pub mod error;
pub mod search;
pub mod usage;
pub mod validation;

pub use api_path::{ListQuery, Relation, RelationRequest, Resource, UpdateVerb};
pub use envelope::{error_from_status, parse_ack, parse_payload, Ack, ApiEnvelope, ApiPayload};
pub use error::ApiError;
pub use search::{filter_items, fold_case, matches_query, Searchable};
pub use usage::{HasUsage, UsageCounts};
pub use validation::{FieldRule, Validate, ValidationError};
