// ## 📂 File: `src/crypto/aead.rs`

//! crypto/aead.rs
//! AES-256-GCM seal/open used by the envelope.
//!
//! Design notes:
//! - 32-byte keys, 12-byte nonces, no AAD (the envelope carries nothing to bind).
//! - Tag verification must fail closed: no partial plaintext on error.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::crypto::types::{CryptoError, KEY_LEN_32, NONCE_LEN_12, TAG_LEN};

#[derive(Clone)]
pub struct AeadCipher {
    inner: Aes256Gcm,
}

impl AeadCipher {
    /// Build the cipher from raw key bytes.
    pub fn from_key(key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() != KEY_LEN_32 {
            return Err(CryptoError::InvalidKeyLen {
                expected: KEY_LEN_32,
                actual: key.len(),
            });
        }
        let inner = Aes256Gcm::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLen {
            expected: KEY_LEN_32,
            actual: key.len(),
        })?;
        Ok(Self { inner })
    }

    /// AEAD seal (encrypt). Output is ciphertext || tag.
    pub fn seal(&self, nonce_12: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        check_nonce(nonce_12)?;
        self.inner
            .encrypt(Nonce::from_slice(nonce_12), plaintext)
            .map_err(|_| CryptoError::Failure("AES-GCM seal failed".into()))
    }

    /// AEAD open (decrypt) ciphertext || tag.
    pub fn open(&self, nonce_12: &[u8], ciphertext_and_tag: &[u8]) -> Result<Vec<u8>, CryptoError> {
        check_nonce(nonce_12)?;
        if ciphertext_and_tag.len() < TAG_LEN {
            return Err(CryptoError::Failure("ciphertext too short".into()));
        }
        self.inner
            .decrypt(Nonce::from_slice(nonce_12), ciphertext_and_tag)
            .map_err(|_| CryptoError::TagMismatch)
    }
}

fn check_nonce(nonce_12: &[u8]) -> Result<(), CryptoError> {
    if nonce_12.len() != NONCE_LEN_12 {
        return Err(CryptoError::InvalidNonceLen {
            expected: NONCE_LEN_12,
            actual: nonce_12.len(),
        });
    }
    Ok(())
}
