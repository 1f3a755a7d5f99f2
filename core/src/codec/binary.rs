// ## 📂 File: `src/codec/binary.rs`

//! codec/binary.rs
//! Opaque-binary payload: `RLY1` magic + bincode body, rendered as a byte literal.
//!
//! Wire shape:
//!   b'RLY1\x03\x04Test\x00\x02...'
//!
//! Design notes:
//! - The rendering uses `std::ascii::escape_default`, so the text is printable ASCII
//!   and survives any UTF-8 transport.
//! - The decoder accepts only that exact rendering; a stray unescaped quote or a
//!   non-ASCII character is a miss.
//! - Magic + full consumption of the body keep spurious matches out of the probe chain.

use bincode::config::standard;
use serde::{de::DeserializeOwned, Serialize};

use crate::constants::{format_ids, MAGIC_RLY1};
use crate::record::Record;
use crate::types::{RelayError, Result};

const PREFIX: &str = "b'";
const SUFFIX: char = '\'';

/// Encode a record into its byte-literal text.
pub fn encode_record(record: &Record) -> Result<String> {
    let blob = to_blob(record)?;
    Ok(render_bytes_literal(&blob))
}

/// Inverse of [`encode_record`]. `None` on any mismatch.
pub fn decode_record(text: &str) -> Option<Record> {
    let blob = parse_bytes_literal(text.trim())?;
    let record: Record = from_blob(&blob)?;
    record.validate().ok()?;
    Some(record)
}

/// Magic-prefixed bincode bytes of any serde value.
pub fn to_blob<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let body = bincode::serde::encode_to_vec(value, standard())
        .map_err(|e| RelayError::serialization(format_ids::BINARY, e))?;

    let mut out = Vec::with_capacity(MAGIC_RLY1.len() + body.len());
    out.extend_from_slice(&MAGIC_RLY1);
    out.extend_from_slice(&body);
    Ok(out)
}

/// Decode magic-prefixed bincode bytes. Trailing bytes are a miss.
pub fn from_blob<T: DeserializeOwned>(blob: &[u8]) -> Option<T> {
    let body = blob.strip_prefix(&MAGIC_RLY1[..])?;
    let (value, read) = bincode::serde::decode_from_slice::<T, _>(body, standard()).ok()?;
    (read == body.len()).then_some(value)
}

pub fn render_bytes_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2 + 3);
    out.push_str(PREFIX);
    out.extend(
        bytes
            .iter()
            .flat_map(|&b| std::ascii::escape_default(b))
            .map(char::from),
    );
    out.push(SUFFIX);
    out
}

pub fn parse_bytes_literal(text: &str) -> Option<Vec<u8>> {
    let body = text.strip_prefix(PREFIX)?.strip_suffix(SUFFIX)?;
    let raw = body.as_bytes();

    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        let b = raw[i];
        match b {
            b'\\' => {
                let esc = *raw.get(i + 1)?;
                match esc {
                    b'\\' | b'\'' | b'"' => out.push(esc),
                    b'n' => out.push(b'\n'),
                    b'r' => out.push(b'\r'),
                    b't' => out.push(b'\t'),
                    b'x' => {
                        let hex = std::str::from_utf8(raw.get(i + 2..i + 4)?).ok()?;
                        out.push(u8::from_str_radix(hex, 16).ok()?);
                        i += 2;
                    }
                    _ => return None,
                }
                i += 2;
            }
            b'\'' => return None,
            0x20..=0x7e => {
                out.push(b);
                i += 1;
            }
            _ => return None,
        }
    }
    Some(out)
}
