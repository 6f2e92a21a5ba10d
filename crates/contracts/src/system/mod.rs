pub mod users;

pub use users::{AdminUser, AdminUserDto};
