pub mod sortable_header_cell;
pub mod state_row;

pub use sortable_header_cell::SortableHeaderCell;
pub use state_row::StateRow;
