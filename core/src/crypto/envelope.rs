// ## 📂 File: `src/crypto/envelope.rs`

//! crypto/envelope.rs
//! Encryption envelope: `<key-text><ISENCRYPTED><ciphertext-text>`.
//!
//! Wire shape:
//! - key-text:        URL-safe base64 of a fresh 32-byte key (44 chars).
//! - ciphertext-text: URL-safe base64 of version(0x80) || nonce(12) || ciphertext || tag(16).
//!
//! Security notes:
//! - The key travels in the same message as the ciphertext. Anyone who sees the
//!   wire sees both; secrecy only holds against parties who never observe the exchange.
//! - A new key is generated on every call and never reused.
//! - The receiver splits on the FIRST marker only. Base64 text never contains `<`,
//!   but a hand-made envelope may, and later occurrences belong to the ciphertext.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use tracing::{debug, info};

use crate::constants::{ENCRYPTION_MARKER, TOKEN_VERSION};
use crate::crypto::aead::AeadCipher;
use crate::crypto::nonce::{generate_key_32, generate_nonce_12};
use crate::crypto::types::{CryptoError, NONCE_LEN_12, TOKEN_MIN_LEN};
use crate::types::{RelayError, Result};

/// The two halves of an encrypted message, borrowed from the received text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    pub key: &'a str,
    pub ciphertext: &'a str,
}

impl<'a> Envelope<'a> {
    /// Split at the first marker occurrence. `None` when there is no marker.
    pub fn split(text: &'a str) -> Option<Self> {
        text.split_once(ENCRYPTION_MARKER)
            .map(|(key, ciphertext)| Envelope { key, ciphertext })
    }

    /// Compose `key + marker + ciphertext`.
    pub fn compose(&self) -> String {
        let mut out = String::with_capacity(self.key.len() + ENCRYPTION_MARKER.len() + self.ciphertext.len());
        out.push_str(self.key);
        out.push_str(ENCRYPTION_MARKER);
        out.push_str(self.ciphertext);
        out
    }

    /// Open the envelope and return the payload text.
    pub fn open(&self) -> std::result::Result<String, CryptoError> {
        let key = URL_SAFE
            .decode(self.key.trim())
            .map_err(|e| CryptoError::Encoding { what: "key", msg: e.to_string() })?;
        let token = URL_SAFE
            .decode(self.ciphertext.trim())
            .map_err(|e| CryptoError::Encoding { what: "ciphertext", msg: e.to_string() })?;

        if token.len() < TOKEN_MIN_LEN {
            return Err(CryptoError::TokenTooShort { len: token.len() });
        }
        if token[0] != TOKEN_VERSION {
            return Err(CryptoError::UnsupportedVersion { have: token[0] });
        }

        let (nonce, sealed) = token[1..].split_at(NONCE_LEN_12);
        let cipher = AeadCipher::from_key(&key)?;
        let plaintext = cipher.open(nonce, sealed)?;
        String::from_utf8(plaintext).map_err(|_| CryptoError::NotUtf8)
    }
}

/// Seal `payload` under a freshly generated key.
pub fn seal(payload: &str) -> std::result::Result<String, CryptoError> {
    let key = generate_key_32()?;
    let nonce = generate_nonce_12()?;

    let cipher = AeadCipher::from_key(&key)?;
    let sealed = cipher.seal(&nonce, payload.as_bytes())?;

    let mut token = Vec::with_capacity(1 + NONCE_LEN_12 + sealed.len());
    token.push(TOKEN_VERSION);
    token.extend_from_slice(&nonce);
    token.extend_from_slice(&sealed);

    let key_text = URL_SAFE.encode(key);
    let ct_text = URL_SAFE.encode(&token);
    Ok(Envelope { key: &key_text, ciphertext: &ct_text }.compose())
}

/// Sender side: wrap `payload` when `enabled`, otherwise pass it through.
pub fn encrypt(payload: &str, enabled: bool) -> Result<String> {
    if !enabled {
        debug!("no encryption required");
        return Ok(payload.to_string());
    }
    let out = seal(payload).map_err(RelayError::EncryptionFailed)?;
    info!(plaintext_len = payload.len(), envelope_len = out.len(), "payload encrypted");
    Ok(out)
}

/// Receiver side: `Some(plaintext)` for an envelope, `None` when no marker is present.
pub fn decrypt(text: &str) -> Result<Option<String>> {
    let Some(envelope) = Envelope::split(text) else {
        return Ok(None);
    };
    let plaintext = envelope.open().map_err(RelayError::DecryptionFailed)?;
    info!(plaintext_len = plaintext.len(), "envelope decrypted");
    Ok(Some(plaintext))
}

/// Like [`decrypt`], returning the input unchanged when it carries no marker.
pub fn decrypt_or_passthrough(text: &str) -> Result<String> {
    Ok(decrypt(text)?.unwrap_or_else(|| text.to_string()))
}
