pub mod types;
pub mod aead;
pub mod nonce;
pub mod envelope;

pub use types::*;
pub use aead::*;
pub use nonce::*;
pub use envelope::*;
