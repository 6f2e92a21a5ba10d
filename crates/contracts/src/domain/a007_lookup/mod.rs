pub mod aggregate;
pub mod kind;

pub use aggregate::{LookupDto, LookupValue};
pub use kind::LookupKind;
