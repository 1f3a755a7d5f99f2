// ## 📂 File: `src/crypto/nonce.rs`

//! crypto/nonce.rs
//! Fresh key and nonce material from the OS RNG.
//!
//! Security notes:
//! - Every envelope gets a new key, so a random 96-bit nonce never repeats under one key.
//! - RNG failure is surfaced, never papered over with a fallback source.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::crypto::types::{CryptoError, KEY_LEN_32, NONCE_LEN_12};

#[inline]
pub fn generate_key_32() -> Result<[u8; KEY_LEN_32], CryptoError> {
    random_bytes::<KEY_LEN_32>()
}

#[inline]
pub fn generate_nonce_12() -> Result<[u8; NONCE_LEN_12], CryptoError> {
    random_bytes::<NONCE_LEN_12>()
}

fn random_bytes<const N: usize>() -> Result<[u8; N], CryptoError> {
    let mut out = [0u8; N];
    OsRng
        .try_fill_bytes(&mut out)
        .map_err(|e| CryptoError::Rng(e.to_string()))?;
    Ok(out)
}
