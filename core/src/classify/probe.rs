// ## 📂 File: `src/classify/probe.rs`

//! classify/probe.rs
//! The four structured probes. Each is a pure `&str -> Option<RecoveredValue>`.

use crate::classify::types::PayloadKind;
use crate::codec::{binary, json, xml};
use crate::record::{parse_literal_mapping, RecoveredValue};

pub type ProbeFn = fn(&str) -> Option<RecoveredValue>;

/// One format-recognition attempt.
#[derive(Clone, Copy)]
pub struct Probe {
    pub kind: PayloadKind,
    pub run: ProbeFn,
}

impl Probe {
    pub const LITERAL: Probe = Probe { kind: PayloadKind::LiteralMapping, run: probe_literal };
    pub const BINARY: Probe = Probe { kind: PayloadKind::OpaqueBinary, run: probe_binary };
    pub const JSON: Probe = Probe { kind: PayloadKind::Json, run: probe_json };
    pub const MARKUP: Probe = Probe { kind: PayloadKind::Markup, run: probe_markup };

    /// Fixed receiver priority.
    pub const DEFAULT_ORDER: [Probe; 4] = [Probe::LITERAL, Probe::BINARY, Probe::JSON, Probe::MARKUP];

    #[inline]
    pub fn attempt(&self, text: &str) -> Option<RecoveredValue> {
        (self.run)(text)
    }
}

impl std::fmt::Debug for Probe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Probe").field("kind", &self.kind).finish()
    }
}

pub fn probe_literal(text: &str) -> Option<RecoveredValue> {
    parse_literal_mapping(text).ok().map(RecoveredValue::Mapping)
}

pub fn probe_binary(text: &str) -> Option<RecoveredValue> {
    binary::decode_record(text).map(RecoveredValue::Mapping)
}

pub fn probe_json(text: &str) -> Option<RecoveredValue> {
    json::decode_value(text)
}

pub fn probe_markup(text: &str) -> Option<RecoveredValue> {
    xml::decode_value(text)
}
