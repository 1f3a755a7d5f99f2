// ## 📂 File: `src/classify/types.rs`

use std::fmt;

use crate::record::RecoveredValue;

/// Which branch of the classifier produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    LiteralMapping,
    OpaqueBinary,
    Json,
    Markup,
    /// Fallback branch found a marker and opened the envelope.
    Decrypted,
    /// Fallback branch found no marker.
    PlainText,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PayloadKind::LiteralMapping => "literal mapping",
            PayloadKind::OpaqueBinary => "opaque binary",
            PayloadKind::Json => "JSON",
            PayloadKind::Markup => "XML",
            PayloadKind::Decrypted => "decrypted text",
            PayloadKind::PlainText => "plain text",
        };
        f.write_str(name)
    }
}

/// One recovered message.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified {
    pub kind: PayloadKind,
    pub value: RecoveredValue,
}

impl Classified {
    pub fn new(kind: PayloadKind, value: RecoveredValue) -> Self {
        Self { kind, value }
    }
}
