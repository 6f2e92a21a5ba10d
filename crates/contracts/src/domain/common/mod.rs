//! Common types and traits for all admin records

pub mod admin_record;
pub mod refs;
pub mod serde_helpers;

pub use admin_record::{AdminRecord, EditForm};
pub use refs::{ref_name, ref_value, NamedRef, ValueRef};

#[cfg(test)]
mod tests {
    use crate::domain::common::{ref_name, ref_value, NamedRef, ValueRef};

    #[test]
    fn reference_labels() {
        let brand = Some(NamedRef {
            id: 3,
            name: "Hacendado".to_string(),
        });
        let unit = Some(ValueRef {
            id: 1,
            value: "kg".to_string(),
        });
        assert_eq!(ref_name(&brand), "Hacendado");
        assert_eq!(ref_value(&unit), "kg");
        assert_eq!(ref_name(&None), "-");
        assert_eq!(ref_value(&None), "-");
    }
}
