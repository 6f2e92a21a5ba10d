pub mod aggregate;
pub mod tree;

pub use aggregate::{Category, CategoryDto};
pub use tree::{
    build_tree, expanded_ids, flatten_for_select, is_blocked_parent, orphans, search_tree,
    subtree_matches, CategoryNode, ParentOption,
};
