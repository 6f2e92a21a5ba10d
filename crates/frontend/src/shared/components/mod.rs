pub mod delete_button;
pub mod detail_header;
pub mod form_dialog;
pub mod list_toolbar;
pub mod relation_panel;
pub mod table;
pub mod ui;

pub use delete_button::DeleteButton;
pub use detail_header::{DetailField, DetailHeader};
pub use form_dialog::FormDialog;
pub use list_toolbar::ListToolbar;
pub use relation_panel::RelationPanel;
