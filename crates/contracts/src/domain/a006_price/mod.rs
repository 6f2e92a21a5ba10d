pub mod aggregate;

pub use aggregate::{Price, PriceDto};
