// ## 📂 File: `src/record/types.rs`

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::literal::{render_mapping, render_scalar};

/// One record value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    None,
}

impl Scalar {
    /// Canonical text of the value, shared by every format.
    ///
    /// - `Float` keeps a trailing `.0` when integral (`2.0`, not `2`).
    /// - `Bool` / `None` use the literal keywords `True`, `False`, `None`.
    /// - `Str` is returned verbatim, unquoted.
    pub fn canonical_text(&self) -> String {
        match self {
            Scalar::Int(v) => v.to_string(),
            Scalar::Float(v) => format_float(*v),
            Scalar::Bool(true) => "True".to_string(),
            Scalar::Bool(false) => "False".to_string(),
            Scalar::Str(s) => s.clone(),
            Scalar::None => "None".to_string(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_scalar(self))
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self { Scalar::Int(v) }
}
impl From<f64> for Scalar {
    fn from(v: f64) -> Self { Scalar::Float(v) }
}
impl From<bool> for Scalar {
    fn from(v: bool) -> Self { Scalar::Bool(v) }
}
impl From<&str> for Scalar {
    fn from(v: &str) -> Self { Scalar::Str(v.to_string()) }
}
impl From<String> for Scalar {
    fn from(v: String) -> Self { Scalar::Str(v) }
}

pub(crate) fn format_float(v: f64) -> String {
    // Debug gives the shortest round-trip form and keeps ".0" on integral values.
    format!("{:?}", v)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey(pub String);

impl fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate key '{}'", self.0)
    }
}

impl std::error::Error for DuplicateKey {}

/// Ordered mapping of unique string keys to scalar values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    entries: Vec<(String, Scalar)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from pairs, rejecting the first repeated key.
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self, DuplicateKey>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Scalar>,
    {
        let mut record = Record::new();
        for (k, v) in pairs {
            record.insert(k, v)?;
        }
        Ok(record)
    }

    /// Append a new entry. Keys are unique; an existing key is an error, never an overwrite.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Result<(), DuplicateKey> {
        let key = key.into();
        if self.contains_key(&key) {
            return Err(DuplicateKey(key));
        }
        self.entries.push((key, value.into()));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Re-check key uniqueness on a record that came from a decoder.
    pub fn validate(&self) -> Result<(), DuplicateKey> {
        for (i, (key, _)) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|(k, _)| k == key) {
                return Err(DuplicateKey(key.clone()));
            }
        }
        Ok(())
    }

    /// Canonical form: ordered `(key, value-text)` pairs.
    ///
    /// Two records recovered through different formats compare equal here even
    /// when their scalar types differ (markup carries every value as text).
    pub fn canonical(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.canonical_text()))
            .collect()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_mapping(self))
    }
}

/// What the receiver recovers from one message.
///
/// Mappings keep the recovered record; everything else is carried as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecoveredValue {
    Mapping(Record),
    Text(String),
}

impl RecoveredValue {
    pub fn as_mapping(&self) -> Option<&Record> {
        match self {
            RecoveredValue::Mapping(r) => Some(r),
            RecoveredValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RecoveredValue::Text(t) => Some(t),
            RecoveredValue::Mapping(_) => None,
        }
    }
}

impl fmt::Display for RecoveredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveredValue::Mapping(r) => write!(f, "{}", r),
            RecoveredValue::Text(t) => f.write_str(t),
        }
    }
}
