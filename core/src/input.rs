// ## 📂 File: `src/input.rs`

//! Sender input resolution: a `.txt` path or a literal mapping.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::constants::MAX_TEXT_FILE_BYTES;
use crate::persist::is_text_file_input;
use crate::record::{parse_literal_mapping, Record};
use crate::types::{RelayError, Result};

/// What the sender was asked to deliver.
#[derive(Debug, Clone, PartialEq)]
pub enum SendInput {
    /// Contents of a text file, lines joined without separators.
    Text(String),
    Record(Record),
}

impl SendInput {
    /// Resolve the configured user input.
    ///
    /// - ends in `.txt`: load the file (see [`read_text_file`]).
    /// - otherwise: must parse as a literal mapping.
    pub fn resolve(user_input: &str, buffer_size: usize) -> Result<Self> {
        if is_text_file_input(user_input) {
            return read_text_file(user_input.trim(), buffer_size).map(SendInput::Text);
        }
        let record = parse_literal_mapping(user_input).map_err(|e| {
            RelayError::MalformedInput(format!("input must be a .txt file or a mapping: {}", e))
        })?;
        info!(entries = record.len(), "input is a mapping");
        Ok(SendInput::Record(record))
    }
}

/// Read a small, non-empty text file and join its lines.
///
/// The size must be below both `buffer_size` and 8192 bytes.
pub fn read_text_file(path: impl AsRef<Path>, buffer_size: usize) -> Result<String> {
    let path = path.as_ref();
    let missing = |reason: String| RelayError::EmptyOrMissingInputFile {
        path: PathBuf::from(path),
        reason,
    };

    let size = fs::metadata(path)
        .map_err(|e| missing(format!("cannot be found: {}", e)))?
        .len();
    let limit = MAX_TEXT_FILE_BYTES.min(buffer_size as u64);
    if size >= limit {
        return Err(missing(format!("size {} must be below {} bytes", size, limit)));
    }
    if size == 0 {
        return Err(missing("the file must contain data".into()));
    }

    let content = fs::read_to_string(path).map_err(|e| missing(format!("unreadable: {}", e)))?;
    let joined: String = content.lines().collect();
    info!(path = %path.display(), bytes = joined.len(), "text file loaded");
    Ok(joined)
}
