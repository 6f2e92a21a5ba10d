//! Category hierarchy: building the forest from the flat list, searching it,
//! and flattening it for the parent selector.

use std::collections::{HashMap, HashSet};

use super::aggregate::Category;
use crate::shared::search::Searchable;

/// Indentation added per depth level in selector labels.
pub const INDENT: &str = "— ";

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryNode {
    pub category: Category,
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    pub fn id(&self) -> i64 {
        self.category.id
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes in this subtree, the node included.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(CategoryNode::size).sum::<usize>()
    }
}

/// Build the forest from a flat list.
///
/// Roots are the records without `parent_id`, in input order; children keep
/// input order too. A record whose parent is not in the list is dropped from
/// the forest altogether (see [`orphans`]).
pub fn build_tree(categories: &[Category]) -> Vec<CategoryNode> {
    let mut children_of: HashMap<i64, Vec<usize>> = HashMap::new();
    for (idx, c) in categories.iter().enumerate() {
        if let Some(parent_id) = c.parent_id {
            children_of.entry(parent_id).or_default().push(idx);
        }
    }

    let mut on_path = HashSet::new();
    categories
        .iter()
        .enumerate()
        .filter(|(_, c)| c.parent_id.is_none())
        .map(|(idx, _)| assemble(idx, categories, &children_of, &mut on_path))
        .collect()
}

// `on_path` only matters for malformed input with duplicated ids, where a
// record could otherwise become its own descendant.
fn assemble(
    idx: usize,
    categories: &[Category],
    children_of: &HashMap<i64, Vec<usize>>,
    on_path: &mut HashSet<usize>,
) -> CategoryNode {
    on_path.insert(idx);
    let category = categories[idx].clone();
    let children = children_of
        .get(&category.id)
        .map(|kids| {
            kids.iter()
                .copied()
                .filter(|kid| !on_path.contains(kid))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default()
        .into_iter()
        .map(|kid| assemble(kid, categories, children_of, on_path))
        .collect();
    on_path.remove(&idx);

    CategoryNode { category, children }
}

/// Records whose `parent_id` points at a category that is not in the list.
pub fn orphans(categories: &[Category]) -> Vec<&Category> {
    let known: HashSet<i64> = categories.iter().map(|c| c.id).collect();
    categories
        .iter()
        .filter(|c| matches!(c.parent_id, Some(p) if !known.contains(&p)))
        .collect()
}

/// True when the node or any descendant matches the query.
pub fn subtree_matches(node: &CategoryNode, query: &str) -> bool {
    node.category.matches(query) || node.children.iter().any(|c| subtree_matches(c, query))
}

/// Root-level nodes that match, directly or through a descendant.
///
/// Nodes come back untouched, children included. A blank query returns
/// every root.
pub fn search_tree<'a>(forest: &'a [CategoryNode], query: &str) -> Vec<&'a CategoryNode> {
    forest
        .iter()
        .filter(|node| subtree_matches(node, query))
        .collect()
}

/// Ids of the nodes that must be expanded so every match is visible.
pub fn expanded_ids(forest: &[CategoryNode], query: &str) -> HashSet<i64> {
    let mut expanded = HashSet::new();
    if query.trim().is_empty() {
        return expanded;
    }
    for node in forest {
        mark_expanded(node, query, &mut expanded);
    }
    expanded
}

fn mark_expanded(node: &CategoryNode, query: &str, expanded: &mut HashSet<i64>) -> bool {
    let mut descendant_hit = false;
    for child in &node.children {
        if mark_expanded(child, query, expanded) {
            descendant_hit = true;
        }
    }
    if descendant_hit {
        expanded.insert(node.id());
    }
    descendant_hit || node.category.matches(query)
}

pub fn find_node(forest: &[CategoryNode], id: i64) -> Option<&CategoryNode> {
    for node in forest {
        if node.id() == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Whether `candidate` may not become the parent of `editing`.
///
/// Only the node itself, its children and its grandchildren are checked;
/// deeper descendants are not.
pub fn is_blocked_parent(candidate: i64, editing: &CategoryNode) -> bool {
    candidate == editing.id()
        || editing.children.iter().any(|child| {
            child.id() == candidate || child.children.iter().any(|g| g.id() == candidate)
        })
}

/// One entry of the parent selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentOption {
    pub id: i64,
    pub label: String,
    pub depth: usize,
    pub disabled: bool,
}

/// Depth-first list of every node, indented by depth, with the options that
/// would create a cycle for `editing_id` disabled.
pub fn flatten_for_select(forest: &[CategoryNode], editing_id: Option<i64>) -> Vec<ParentOption> {
    let editing = editing_id.and_then(|id| find_node(forest, id));
    let mut options = Vec::new();
    for node in forest {
        push_options(node, 0, editing_id, editing, &mut options);
    }
    options
}

fn push_options(
    node: &CategoryNode,
    depth: usize,
    editing_id: Option<i64>,
    editing: Option<&CategoryNode>,
    out: &mut Vec<ParentOption>,
) {
    let disabled = match editing {
        Some(editing) => is_blocked_parent(node.id(), editing),
        None => editing_id == Some(node.id()),
    };
    out.push(ParentOption {
        id: node.id(),
        label: format!("{}{}", INDENT.repeat(depth), node.category.name),
        depth,
        disabled,
    });
    for child in &node.children {
        push_options(child, depth + 1, editing_id, editing, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usage::UsageCounts;

    fn cat(id: i64, parent_id: Option<i64>, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: None,
            parent_id,
            image_url: None,
            active: true,
            counts: UsageCounts::default(),
        }
    }

    fn ids(nodes: &[CategoryNode]) -> Vec<i64> {
        nodes.iter().map(CategoryNode::id).collect()
    }

    fn all_ids(nodes: &[CategoryNode]) -> Vec<i64> {
        let mut out = Vec::new();
        for n in nodes {
            out.push(n.id());
            out.extend(all_ids(&n.children));
        }
        out
    }

    fn sample() -> Vec<Category> {
        vec![
            cat(1, None, "Bebidas"),
            cat(2, Some(1), "Refrescos"),
            cat(3, Some(1), "Aguas"),
            cat(4, Some(99), "Orphan"),
        ]
    }

    #[test]
    fn builds_scenario_forest() {
        let forest = build_tree(&sample());
        assert_eq!(ids(&forest), vec![1]);
        assert_eq!(ids(&forest[0].children), vec![2, 3]);
        assert!(!all_ids(&forest).contains(&4));
    }

    #[test]
    fn every_node_appears_once_with_its_own_children() {
        let input = vec![
            cat(10, None, "Despensa"),
            cat(11, Some(10), "Arroz"),
            cat(20, None, "Limpieza"),
            cat(12, Some(10), "Pasta"),
            cat(13, Some(11), "Arroz integral"),
            cat(21, Some(20), "Detergentes"),
        ];
        let forest = build_tree(&input);

        assert_eq!(ids(&forest), vec![10, 20]);
        let mut seen = all_ids(&forest);
        seen.sort();
        assert_eq!(seen, vec![10, 11, 12, 13, 20, 21]);

        let despensa = &forest[0];
        assert_eq!(ids(&despensa.children), vec![11, 12]);
        assert_eq!(ids(&despensa.children[0].children), vec![13]);
        assert_eq!(ids(&forest[1].children), vec![21]);
        assert_eq!(despensa.size(), 4);
    }

    #[test]
    fn child_listed_before_parent_is_still_attached() {
        let forest = build_tree(&[cat(2, Some(1), "Refrescos"), cat(1, None, "Bebidas")]);
        assert_eq!(ids(&forest), vec![1]);
        assert_eq!(ids(&forest[0].children), vec![2]);
    }

    #[test]
    fn empty_input_builds_empty_forest() {
        assert!(build_tree(&[]).is_empty());
    }

    #[test]
    fn orphans_are_reported_but_not_built() {
        let input = sample();
        let orphaned: Vec<i64> = orphans(&input).iter().map(|c| c.id).collect();
        assert_eq!(orphaned, vec![4]);

        // the orphan's own subtree disappears with it
        let mut with_grandchild = input.clone();
        with_grandchild.push(cat(5, Some(4), "Under orphan"));
        let forest = build_tree(&with_grandchild);
        assert!(!all_ids(&forest).contains(&5));
    }

    #[test]
    fn duplicated_ids_do_not_recurse_forever() {
        let input = vec![cat(1, None, "A"), cat(2, Some(1), "B"), cat(1, Some(2), "A again")];
        let forest = build_tree(&input);
        assert_eq!(ids(&forest), vec![1]);
        assert_eq!(ids(&forest[0].children), vec![2]);
    }

    #[test]
    fn search_keeps_root_when_descendant_matches() {
        let forest = build_tree(&sample());
        let found = search_tree(&forest, "agua");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), 1);
        // returned untouched, non-matching children included
        assert_eq!(ids(&found[0].children), vec![2, 3]);
    }

    #[test]
    fn search_is_case_insensitive_on_name_and_description() {
        let mut lacteos = cat(30, None, "Lácteos");
        lacteos.description = Some("Leche y quesos".to_string());
        let mut input = sample();
        input.push(lacteos);
        let forest = build_tree(&input);

        assert_eq!(ids_of(search_tree(&forest, "QUESOS")), vec![30]);
        assert_eq!(ids_of(search_tree(&forest, "bebidas")), vec![1]);
        assert!(search_tree(&forest, "congelados").is_empty());
    }

    fn ids_of(nodes: Vec<&CategoryNode>) -> Vec<i64> {
        nodes.into_iter().map(CategoryNode::id).collect()
    }

    #[test]
    fn search_reaches_any_depth() {
        let input = vec![
            cat(1, None, "Despensa"),
            cat(2, Some(1), "Conservas"),
            cat(3, Some(2), "Pescado"),
            cat(4, Some(3), "Atún"),
            cat(5, None, "Limpieza"),
        ];
        let forest = build_tree(&input);
        assert_eq!(ids_of(search_tree(&forest, "atún")), vec![1]);
    }

    #[test]
    fn blank_search_returns_all_roots() {
        let forest = build_tree(&[cat(1, None, "A1"), cat(2, None, "B2")]);
        assert_eq!(search_tree(&forest, "").len(), 2);
        assert_eq!(search_tree(&forest, "   ").len(), 2);
    }

    #[test]
    fn expansion_opens_ancestors_of_matches_only() {
        let input = vec![
            cat(1, None, "Despensa"),
            cat(2, Some(1), "Conservas"),
            cat(3, Some(2), "Atún"),
            cat(4, Some(1), "Arroz"),
        ];
        let forest = build_tree(&input);
        let open = expanded_ids(&forest, "atún");
        assert!(open.contains(&1));
        assert!(open.contains(&2));
        assert!(!open.contains(&3));
        assert!(!open.contains(&4));
        assert!(expanded_ids(&forest, "").is_empty());
    }

    #[test]
    fn selector_is_depth_first_and_indented() {
        let forest = build_tree(&sample());
        let options = flatten_for_select(&forest, None);
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Bebidas", "— Refrescos", "— Aguas"]);
        assert!(options.iter().all(|o| !o.disabled));
    }

    #[test]
    fn selector_blocks_self_children_and_grandchildren_only() {
        let input = vec![
            cat(1, None, "Nivel 0"),
            cat(2, Some(1), "Nivel 1"),
            cat(3, Some(2), "Nivel 2"),
            cat(4, Some(3), "Nivel 3"),
            cat(5, None, "Otra raíz"),
        ];
        let forest = build_tree(&input);
        let options = flatten_for_select(&forest, Some(1));
        let disabled: Vec<i64> = options.iter().filter(|o| o.disabled).map(|o| o.id).collect();
        assert_eq!(disabled, vec![1, 2, 3]);
        let deep = options.iter().find(|o| o.id == 4).unwrap();
        assert_eq!(deep.depth, 3);
        assert!(!deep.disabled);
    }

    #[test]
    fn blocked_parent_check() {
        let forest = build_tree(&sample());
        let bebidas = find_node(&forest, 1).unwrap();
        assert!(is_blocked_parent(1, bebidas));
        assert!(is_blocked_parent(3, bebidas));
        assert!(!is_blocked_parent(42, bebidas));
        assert!(find_node(&forest, 4).is_none());
    }
}
