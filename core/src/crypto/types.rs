// ## 📂 File: `src/crypto/types.rs`

use std::fmt;

/// Stable key and nonce sizes.
pub const KEY_LEN_32: usize = 32;

/// Standard 12-byte nonce length for AES-GCM.
pub const NONCE_LEN_12: usize = 12;

/// Fixed AEAD tag length (bytes).
pub const TAG_LEN: usize = 16;

/// Sealed token layout: version(1) || nonce(12) || ciphertext || tag(16).
pub const TOKEN_MIN_LEN: usize = 1 + NONCE_LEN_12 + TAG_LEN;

#[derive(Debug)]
pub enum CryptoError {
    /// OS randomness unavailable while generating a key or nonce.
    Rng(String),

    /// Invalid key length provided to cipher.
    InvalidKeyLen { expected: usize, actual: usize },

    /// Nonce length mismatch (must be 12 bytes).
    InvalidNonceLen { expected: usize, actual: usize },

    /// Key or token text is not valid URL-safe base64.
    Encoding { what: &'static str, msg: String },

    /// Token shorter than version + nonce + tag.
    TokenTooShort { len: usize },

    /// Token version byte is not the one we emit.
    UnsupportedVersion { have: u8 },

    /// AEAD tag mismatch (wrong key or tampered ciphertext).
    TagMismatch,

    /// Decrypted bytes are not UTF-8 text.
    NotUtf8,

    /// General runtime error with context.
    Failure(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        match self {
            Rng(msg) =>
                write!(f, "random generator failure: {}", msg),
            InvalidKeyLen { expected, actual } =>
                write!(f, "invalid key length: expected={}, actual={}", expected, actual),
            InvalidNonceLen { expected, actual } =>
                write!(f, "invalid nonce length: expected={}, actual={}", expected, actual),
            Encoding { what, msg } =>
                write!(f, "invalid {} encoding: {}", what, msg),
            TokenTooShort { len } =>
                write!(f, "token too short: {} bytes, need at least {}", len, TOKEN_MIN_LEN),
            UnsupportedVersion { have } =>
                write!(f, "unsupported token version: 0x{:02x}", have),
            TagMismatch =>
                write!(f, "AEAD tag mismatch"),
            NotUtf8 =>
                write!(f, "decrypted payload is not valid UTF-8"),
            Failure(msg) =>
                write!(f, "crypto failure: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}
