// ## 📂 File: `src/codec/mod.rs`

//! codec/mod.rs
//! Record encoders and their inverse decoders.
//!
//! Design notes:
//! - No type header travels on the wire. Each format is recognised by its shape alone,
//!   so every encoder here must produce text its own decoder accepts.
//! - Decoders return `Option`: they are probes, and a miss is not an error.
//! - Encoders fail closed. Nothing partial is ever returned.

pub mod types;
pub mod binary;
pub mod json;
pub mod xml;
pub mod encode;

pub use types::*;
pub use encode::*;
