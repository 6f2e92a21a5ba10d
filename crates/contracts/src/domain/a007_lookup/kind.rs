use crate::shared::api_path::Resource;

/// Small value lists sharing the `{id, value, description}` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Tag,
    Unit,
    Gender,
    ListMode,
    AcquisitionMethod,
}

impl LookupKind {
    pub const ALL: [LookupKind; 5] = [
        LookupKind::Tag,
        LookupKind::Unit,
        LookupKind::Gender,
        LookupKind::ListMode,
        LookupKind::AcquisitionMethod,
    ];

    pub const fn resource(self) -> Resource {
        match self {
            LookupKind::Tag => Resource::Tags,
            LookupKind::Unit => Resource::Units,
            LookupKind::Gender => Resource::Genders,
            LookupKind::ListMode => Resource::ListModes,
            LookupKind::AcquisitionMethod => Resource::AcquisitionMethods,
        }
    }

    /// Navigation key of the lookup page.
    pub const fn page_key(self) -> &'static str {
        match self {
            LookupKind::Tag => "a007_lookup_tags",
            LookupKind::Unit => "a007_lookup_units",
            LookupKind::Gender => "a007_lookup_genders",
            LookupKind::ListMode => "a007_lookup_list_modes",
            LookupKind::AcquisitionMethod => "a007_lookup_acquisition_methods",
        }
    }

    pub fn from_page_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.page_key() == key)
    }

    pub const fn element_name(self) -> &'static str {
        self.resource().element_name()
    }

    pub const fn list_name(self) -> &'static str {
        self.resource().list_name()
    }

    /// Counter in `_count` shown in the usage column, with its header.
    pub const fn usage_counter(self) -> (&'static str, &'static str) {
        match self {
            LookupKind::Tag | LookupKind::Unit => ("products", "Productos"),
            LookupKind::Gender => ("users", "Usuarios"),
            LookupKind::ListMode => ("lists", "Listas"),
            LookupKind::AcquisitionMethod => ("supermarkets", "Supermercados"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_keys_round_trip() {
        for kind in LookupKind::ALL {
            assert_eq!(LookupKind::from_page_key(kind.page_key()), Some(kind));
        }
        assert_eq!(LookupKind::from_page_key("a003_brand"), None);
    }

    #[test]
    fn endpoints() {
        assert_eq!(
            LookupKind::ListMode.resource().collection(),
            "/api/admin/list-modes"
        );
        assert_eq!(LookupKind::Unit.list_name(), "Unidades");
    }

    #[test]
    fn kinds_are_distinct_keys() {
        let keys: std::collections::HashSet<LookupKind> = LookupKind::ALL.into_iter().collect();
        assert_eq!(keys.len(), LookupKind::ALL.len());
        assert_eq!(LookupKind::Gender.usage_counter(), ("users", "Usuarios"));
        assert_eq!(
            LookupKind::AcquisitionMethod.usage_counter(),
            ("supermarkets", "Supermercados")
        );
    }
}
