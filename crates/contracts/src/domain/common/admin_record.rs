use serde::Serialize;

use crate::shared::api_path::Resource;
use crate::shared::search::Searchable;
use crate::shared::usage::HasUsage;
use crate::shared::validation::Validate;

/// A record listed and edited by one of the admin pages.
///
/// Ties together what every list page needs: a stable key for table rows,
/// a label for confirmations and toasts, search and the deletion guard.
pub trait AdminRecord: HasUsage + Searchable + Clone {
    fn id(&self) -> i64;

    /// Label used in confirmations and notifications.
    fn display_name(&self) -> String;

    /// Resource the record belongs to, when it is fixed by the type.
    ///
    /// Lookup values share one type across several resources and return `None`.
    fn resource() -> Option<Resource> {
        None
    }

    fn delete_confirmation(&self) -> String {
        format!("¿Eliminar \"{}\"? Esta acción no se puede deshacer.", self.display_name())
    }
}

/// Create / edit payload of an admin form.
pub trait EditForm: Validate + Serialize + Clone {
    /// Id of the record being edited, `None` when creating.
    fn record_id(&self) -> Option<i64>;

    fn is_edit(&self) -> bool {
        self.record_id().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::AdminRecord;
    use crate::domain::a001_category::Category;
    use crate::domain::a002_product_type::ProductType;
    use crate::domain::a003_brand::Brand;
    use crate::domain::a004_supermarket::Supermarket;
    use crate::domain::a005_product::Product;
    use crate::domain::a006_price::Price;
    use crate::domain::a007_lookup::LookupValue;
    use crate::shared::api_path::Resource;
    use crate::system::AdminUser;

    #[test]
    fn records_know_their_resource() {
        assert_eq!(Category::resource(), Some(Resource::Categories));
        assert_eq!(ProductType::resource(), Some(Resource::ProductTypes));
        assert_eq!(Brand::resource(), Some(Resource::Brands));
        assert_eq!(Supermarket::resource(), Some(Resource::Supermarkets));
        assert_eq!(Product::resource(), Some(Resource::Products));
        assert_eq!(Price::resource(), Some(Resource::Prices));
        assert_eq!(AdminUser::resource(), Some(Resource::Users));
    }

    #[test]
    fn lookup_values_need_an_explicit_resource() {
        assert_eq!(LookupValue::resource(), None);
    }
}
