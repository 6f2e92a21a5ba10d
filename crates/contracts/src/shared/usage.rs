//! Usage counters and the deletion guard.
//!
//! The backend attaches a `_count` object to every record
//! (`{"products": 3, "supermarkets": 0}`). A record can be deleted from the
//! UI only while its guarded counters add up to zero; referential integrity
//! itself is enforced server-side.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsageCounts(BTreeMap<String, i64>);

impl UsageCounts {
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn get(&self, counter: &str) -> i64 {
        self.0.get(counter).copied().unwrap_or(0)
    }

    pub fn total(&self) -> i64 {
        self.0.values().sum()
    }

    pub fn sum_of(&self, counters: &[&str]) -> i64 {
        counters.iter().map(|c| self.get(c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub trait HasUsage {
    fn usage(&self) -> &UsageCounts;

    /// Counters that block deletion. Empty means all of them.
    fn guarding_counters() -> &'static [&'static str] {
        &[]
    }

    fn usage_total(&self) -> i64 {
        let guarded = Self::guarding_counters();
        if guarded.is_empty() {
            self.usage().total()
        } else {
            self.usage().sum_of(guarded)
        }
    }

    fn can_delete(&self) -> bool {
        self.usage_total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AllCounters(UsageCounts);

    impl HasUsage for AllCounters {
        fn usage(&self) -> &UsageCounts {
            &self.0
        }
    }

    struct PricesOnly(UsageCounts);

    impl HasUsage for PricesOnly {
        fn usage(&self) -> &UsageCounts {
            &self.0
        }

        fn guarding_counters() -> &'static [&'static str] {
            &["prices"]
        }
    }

    #[test]
    fn parses_count_object() {
        let counts: UsageCounts =
            serde_json::from_str(r#"{"products": 3, "supermarkets": 1}"#).unwrap();
        assert_eq!(counts.get("products"), 3);
        assert_eq!(counts.get("missing"), 0);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn delete_enabled_only_at_zero() {
        let unused = AllCounters(UsageCounts::from_pairs([("products", 0), ("supermarkets", 0)]));
        assert!(unused.can_delete());

        let used = AllCounters(UsageCounts::from_pairs([("products", 0), ("supermarkets", 1)]));
        assert_eq!(used.usage_total(), 1);
        assert!(!used.can_delete());

        assert!(AllCounters(UsageCounts::default()).can_delete());
    }

    #[test]
    fn guarding_subset_ignores_other_counters() {
        let product = PricesOnly(UsageCounts::from_pairs([("prices", 0), ("tags", 5)]));
        assert_eq!(product.usage_total(), 0);
        assert!(product.can_delete());

        let priced = PricesOnly(UsageCounts::from_pairs([("prices", 2), ("tags", 0)]));
        assert!(!priced.can_delete());
    }
}
