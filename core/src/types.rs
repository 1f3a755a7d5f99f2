// ## 📂 File: `src/types.rs`

use std::io;
use std::path::PathBuf;

use crate::crypto::CryptoError;
use crate::record::LiteralError;

/// Unified relay error covering every way one exchange can abort.
/// - Each variant maps to one stage of encode → encrypt → send → classify → persist.
/// - Messages aim to be stable and contextual for logs.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Config file missing, empty, or lacking a required section/key.
    #[error("configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("failed to create socket: {0}")]
    SocketCreateFailed(#[source] io::Error),

    #[error("failed to connect to {addr}: {source}")]
    ConnectFailed { addr: String, #[source] source: io::Error },

    #[error("failed to accept connection: {0}")]
    AcceptFailed(#[source] io::Error),

    #[error("failed to send message: {0}")]
    SendFailed(#[source] io::Error),

    #[error("failed to receive message: {0}")]
    ReceiveFailed(#[source] io::Error),

    /// Peer closed the connection without sending anything.
    #[error("received no data; the input was probably empty")]
    EmptyMessage,

    #[error("message of {len} bytes exceeds buffer of {limit} bytes")]
    MessageTooLarge { len: usize, limit: usize },

    /// Encoding a record failed, or the format identifier is unknown.
    #[error("serialization failed ({format}): {reason}")]
    SerializationFailed { format: String, reason: String },

    #[error("encryption failed: {0}")]
    EncryptionFailed(CryptoError),

    #[error("decryption failed: {0}")]
    DecryptionFailed(CryptoError),

    #[error("unsupported output format '{0}': expected one of txt, pickle, json, xml")]
    UnsupportedOutputFormat(String),

    #[error("input file {}: {reason}", .path.display())]
    EmptyOrMissingInputFile { path: PathBuf, reason: String },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl RelayError {
    pub(crate) fn serialization(format: &str, reason: impl ToString) -> Self {
        RelayError::SerializationFailed {
            format: format.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<LiteralError> for RelayError {
    fn from(e: LiteralError) -> Self {
        RelayError::MalformedInput(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
