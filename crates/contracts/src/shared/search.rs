//! Client-side search over already fetched records.

/// Lowercase `text` one char at a time. Highlighting maps each folded char
/// back to its source char, so search and highlight both fold with this.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Case-insensitive substring match against any of the given fields.
/// A blank query matches everything.
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    let query = fold_case(query.trim());
    if query.is_empty() {
        return true;
    }
    fields.iter().any(|f| fold_case(f).contains(&query))
}

pub trait Searchable {
    /// Text fields the list search looks at.
    fn search_fields(&self) -> Vec<&str>;

    fn matches(&self, query: &str) -> bool {
        matches_query(&self.search_fields(), query)
    }
}

pub fn filter_items<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    items.iter().filter(|i| i.matches(query)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        description: Option<String>,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.name.as_str()];
            if let Some(d) = &self.description {
                fields.push(d);
            }
            fields
        }
    }

    fn row(name: &str, description: Option<&str>) -> Row {
        Row {
            name: name.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(matches_query(&["Agua Mineral"], "agua"));
        assert!(matches_query(&["agua mineral"], "MINERAL"));
        assert!(matches_query(&["Ñandú"], "ñan"));
        assert!(!matches_query(&["Refrescos"], "agua"));
    }

    #[test]
    fn multi_char_lowercase_matches() {
        assert_eq!(fold_case("İzmir"), "i\u{307}zmir");
        assert!(matches_query(&["İZMİR"], "İz"));
        assert!(!matches_query(&["İzmir"], "izm"));
    }

    #[test]
    fn blank_query_keeps_everything() {
        let rows = vec![row("Leche", None), row("Pan", Some("Panadería"))];
        assert_eq!(filter_items(&rows, "  ").len(), 2);
    }

    #[test]
    fn filter_checks_every_field() {
        let rows = vec![
            row("Leche", Some("Lácteos frescos")),
            row("Pan", Some("Panadería")),
            row("Queso", None),
        ];
        let found = filter_items(&rows, "lácteos");
        assert_eq!(found, vec![row("Leche", Some("Lácteos frescos"))]);
    }
}
