// ## 📂 File: `src/persist.rs`

//! Persist a recovered value to disk, format chosen by file extension.
//!
//! - `.txt`    display text (literal mapping text for mappings)
//! - `.pickle` raw opaque-binary bytes (`RLY1` + bincode of the value)
//! - `.json`   JSON object for mappings, JSON string for text
//! - `.xml`    `<root>` tree for mappings, `<root>text</root>` for text
//!
//! The whole file body is rendered before the file is opened. A failure while
//! writing can still leave a partial file behind; callers treat the file as
//! untrusted until `persist` returns `Ok`.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::codec::{binary, json, xml, Format};
use crate::constants::{output_exts, OUTPUT_STEM};
use crate::record::RecoveredValue;
use crate::types::{RelayError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Txt,
    Pickle,
    Json,
    Xml,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            output_exts::TXT => Ok(OutputFormat::Txt),
            output_exts::PICKLE => Ok(OutputFormat::Pickle),
            output_exts::JSON => Ok(OutputFormat::Json),
            output_exts::XML => Ok(OutputFormat::Xml),
            _ => Err(RelayError::UnsupportedOutputFormat(path.display().to_string())),
        }
    }

    pub fn ext(self) -> &'static str {
        match self {
            OutputFormat::Txt => output_exts::TXT,
            OutputFormat::Pickle => output_exts::PICKLE,
            OutputFormat::Json => output_exts::JSON,
            OutputFormat::Xml => output_exts::XML,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ext())
    }
}

/// File body for `value` in `format`.
pub fn render(value: &RecoveredValue, format: OutputFormat) -> Result<Vec<u8>> {
    let bytes = match (format, value) {
        (OutputFormat::Txt, v) => v.to_string().into_bytes(),
        (OutputFormat::Pickle, v) => binary::to_blob(v)?,
        (OutputFormat::Json, RecoveredValue::Mapping(r)) => json::encode_record(r)?.into_bytes(),
        (OutputFormat::Json, RecoveredValue::Text(t)) => json::to_spaced_string(t)?.into_bytes(),
        (OutputFormat::Xml, RecoveredValue::Mapping(r)) => xml::encode_record(r)?.into_bytes(),
        (OutputFormat::Xml, RecoveredValue::Text(t)) => xml::render_text(t).into_bytes(),
    };
    Ok(bytes)
}

/// Write `value` to `path`. The extension must be one of txt, pickle, json, xml.
pub fn persist(value: &RecoveredValue, path: impl AsRef<Path>) -> Result<OutputFormat> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path)?;
    let body = render(value, format)?;
    fs::write(path, &body)?;
    info!(path = %path.display(), format = %format, bytes = body.len(), "received data saved");
    Ok(format)
}

/// Default output file for what the sender is configured to send:
/// `received.txt` for a text file, otherwise `received.<ext>` by format.
pub fn default_output_name(user_input: &str, format: Option<Format>) -> String {
    let ext = if is_text_file_input(user_input) {
        output_exts::TXT
    } else {
        format.map(Format::output_ext).unwrap_or(output_exts::TXT)
    };
    format!("{}.{}", OUTPUT_STEM, ext)
}

pub(crate) fn is_text_file_input(user_input: &str) -> bool {
    user_input.trim().to_ascii_lowercase().ends_with(".txt")
}
