//! relay-core
//!
//! Payload codecs, encryption envelope and content classifier for one-shot
//! point-to-point delivery. No sockets, no async runtime.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Data model
pub mod record;

// Sender path
pub mod codec;
pub mod crypto;
pub mod input;

// Receiver path
pub mod classify;
pub mod persist;

pub mod exchange;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::classify::{classify, Classified, Classifier, PayloadKind};
    pub use crate::codec::{encode, encode_as, Format};
    pub use crate::crypto::envelope::{decrypt, decrypt_or_passthrough, encrypt};
    pub use crate::exchange::{compose, recover};
    pub use crate::input::SendInput;
    pub use crate::persist::{persist, OutputFormat};
    pub use crate::record::{Record, RecoveredValue, Scalar};
    pub use crate::types::{RelayError, Result};
}
