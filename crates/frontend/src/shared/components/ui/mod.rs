pub mod badge;
pub mod checkbox;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::{ActiveBadge, CountBadge};
pub use checkbox::CheckField;
pub use input::{parse_number, NumberField, TextField};
pub use select::{parse_option_id, FilterSelect, IdSelect, SelectOption};
pub use textarea::TextAreaField;
