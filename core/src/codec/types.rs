// ## 📂 File: `src/codec/types.rs`

use std::fmt;
use std::str::FromStr;

use crate::constants::{format_ids, output_exts};
use crate::types::RelayError;

/// Encoding applied to a record before it goes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Opaque serialization rendered as a `b'...'` byte literal.
    Binary,
    Json,
    /// `<root>`-wrapped element tree.
    Xml,
    /// The record's own literal mapping text, unserialized.
    Literal,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Binary, Format::Json, Format::Xml, Format::Literal];

    pub fn id(self) -> &'static str {
        match self {
            Format::Binary => format_ids::BINARY,
            Format::Json => format_ids::JSON,
            Format::Xml => format_ids::XML,
            Format::Literal => format_ids::LITERAL,
        }
    }

    /// Extension the receiver uses by default for this format's output file.
    pub fn output_ext(self) -> &'static str {
        match self {
            Format::Binary => output_exts::PICKLE,
            Format::Json => output_exts::JSON,
            Format::Xml => output_exts::XML,
            Format::Literal => output_exts::TXT,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Format {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        Format::ALL
            .into_iter()
            .find(|f| f.id() == id)
            .ok_or_else(|| RelayError::serialization(s, "unsupported format; expected binary, json, xml or literal"))
    }
}
