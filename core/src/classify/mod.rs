// ## 📂 File: `src/classify/mod.rs`

//! classify/mod.rs
//! Receiver-side content sniffing.
//!
//! Design notes:
//! - Received text carries no type header. The classifier tries an ordered list of
//!   pure probes and keeps the first one that accepts the text.
//! - Several probes may accept the same bytes (`{}` is both a literal mapping and JSON).
//!   The order, not the "right" answer, decides what the receiver sees.
//! - The markup probe is the most permissive structured probe and stays last among them.
//! - When every probe misses, the text is handed to the decryptor; without a marker it
//!   comes back unchanged.

pub mod types;
pub mod probe;
pub mod classifier;

pub use types::*;
pub use probe::*;
pub use classifier::*;
