// ## 📂 File: `src/codec/json.rs`

//! codec/json.rs
//! JSON payloads with `", "` / `": "` separators, e.g. `{"Test": 1, "Data": 2}`.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map, Number, Value};

use crate::constants::format_ids;
use crate::record::{Record, RecoveredValue, Scalar};
use crate::types::{RelayError, Result};

/// Compact JSON with a space after every separator.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

pub fn encode_record(record: &Record) -> Result<String> {
    let value = record_to_value(record)?;
    to_spaced_string(&value)
}

pub fn to_spaced_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value
        .serialize(&mut ser)
        .map_err(|e| RelayError::serialization(format_ids::JSON, e))?;
    String::from_utf8(buf).map_err(|e| RelayError::serialization(format_ids::JSON, e))
}

/// Record → JSON object, keys in record order.
pub fn record_to_value(record: &Record) -> Result<Value> {
    let mut map = Map::with_capacity(record.len());
    for (key, scalar) in record.iter() {
        let value = match scalar {
            Scalar::Int(v) => Value::from(*v),
            Scalar::Float(v) => Number::from_f64(*v).map(Value::Number).ok_or_else(|| {
                RelayError::serialization(format_ids::JSON, format!("non-finite float for key '{}'", key))
            })?,
            Scalar::Bool(v) => Value::Bool(*v),
            Scalar::Str(s) => Value::String(s.clone()),
            Scalar::None => Value::Null,
        };
        map.insert(key.to_string(), value);
    }
    Ok(Value::Object(map))
}

/// JSON probe. `null` counts as a miss.
pub fn decode_value(text: &str) -> Option<RecoveredValue> {
    let value: Value = serde_json::from_str(text).ok()?;
    match value {
        Value::Null => None,
        Value::Object(map) => Some(match object_to_record(&map) {
            Some(record) => RecoveredValue::Mapping(record),
            None => RecoveredValue::Text(Value::Object(map).to_string()),
        }),
        Value::String(s) => Some(RecoveredValue::Text(s)),
        other => Some(RecoveredValue::Text(other.to_string())),
    }
}

fn object_to_record(map: &Map<String, Value>) -> Option<Record> {
    let mut record = Record::new();
    for (key, value) in map {
        let scalar = match value {
            Value::Null => Scalar::None,
            Value::Bool(b) => Scalar::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Scalar::Int(i),
                None => Scalar::Float(n.as_f64()?),
            },
            Value::String(s) => Scalar::Str(s.clone()),
            Value::Array(_) | Value::Object(_) => return None,
        };
        record.insert(key.clone(), scalar).ok()?;
    }
    Some(record)
}
