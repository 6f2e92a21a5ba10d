pub mod aggregate;

pub use aggregate::{Supermarket, SupermarketDto};
