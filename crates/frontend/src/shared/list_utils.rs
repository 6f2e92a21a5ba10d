//! Sorting helpers shared by the list pages.

use std::cmp::Ordering;

/// Row types that can be sorted by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive text comparison used by most columns.
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Current sort column and direction of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

impl SortState {
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
            ascending: true,
        }
    }

    /// Clicking the active column flips direction, another column starts ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field.to_string();
            self.ascending = true;
        }
    }

    pub fn apply<T: Sortable>(&self, items: &mut [T]) {
        sort_list(items, &self.field, self.ascending);
    }
}

/// Stable sort by the given column.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        price: f64,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => cmp_text(self.name, other.name),
                "price" => cmp_f64(self.price, other.price),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "leche", price: 1.1 },
            Row { name: "Agua", price: 0.5 },
            Row { name: "pan", price: 0.9 },
        ]
    }

    #[test]
    fn sorts_text_ignoring_case() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Agua", "leche", "pan"]);
    }

    #[test]
    fn descending_numbers() {
        let mut items = rows();
        sort_list(&mut items, "price", false);
        let prices: Vec<_> = items.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![1.1, 0.9, 0.5]);
    }

    #[test]
    fn unknown_field_keeps_order() {
        let mut items = rows();
        sort_list(&mut items, "nope", true);
        assert_eq!(items, rows());
    }

    #[test]
    fn toggle_flips_then_resets() {
        let mut state = SortState::new("name");
        state.toggle("name");
        assert!(!state.ascending);
        state.toggle("price");
        assert_eq!(state, SortState::new("price"));
    }

    #[test]
    fn indicators() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "price", true), " ⇅");
    }
}
