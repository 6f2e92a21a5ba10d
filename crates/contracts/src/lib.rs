//! Shared records, DTOs and pure logic for the grocery catalog admin.
//!
//! Everything in this crate is target independent: the frontend compiles it to
//! WASM, the tests run natively.

pub mod domain;
pub mod shared;
pub mod system;
