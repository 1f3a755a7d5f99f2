// ## 📂 File: `src/record/mod.rs`

//! record/mod.rs
//! The key-value record a sender hands to the encoder.
//!
//! Design notes:
//! - Keys are unique and keep insertion order; that order is the canonical order.
//! - Values are scalars only. Nested values are rejected at every entry point.
//! - `literal` is the restricted mapping parser used both for user input and
//!   for the first classifier probe. It never evaluates anything.

pub mod types;
pub mod literal;

pub use types::*;
pub use literal::*;
