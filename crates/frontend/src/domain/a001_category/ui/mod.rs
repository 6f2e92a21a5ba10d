pub mod form;
pub mod tree;
