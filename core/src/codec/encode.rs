// ## 📂 File: `src/codec/encode.rs`

//! codec/encode.rs
//! Format dispatch for the sender.

use tracing::info;

use crate::codec::types::Format;
use crate::codec::{binary, json, xml};
use crate::constants::format_ids;
use crate::record::{Record, Scalar};
use crate::types::{RelayError, Result};

/// Encode `record` in `format`. Any failure aborts the send; no partial text is returned.
pub fn encode(record: &Record, format: Format) -> Result<String> {
    let payload = match format {
        Format::Binary => binary::encode_record(record)?,
        Format::Json => json::encode_record(record)?,
        Format::Xml => xml::encode_record(record)?,
        Format::Literal => encode_literal(record)?,
    };
    info!(format = %format, entries = record.len(), bytes = payload.len(), "record serialized");
    Ok(payload)
}

/// Same as [`encode`], with the format given by its identifier (`"json"`, ...).
pub fn encode_as(record: &Record, format_id: &str) -> Result<String> {
    let format: Format = format_id.parse()?;
    encode(record, format)
}

fn encode_literal(record: &Record) -> Result<String> {
    // Non-finite floats render as `NaN`/`inf`, which the literal parser cannot read back.
    if let Some((key, _)) = record
        .iter()
        .find(|(_, v)| matches!(v, Scalar::Float(f) if !f.is_finite()))
    {
        return Err(RelayError::serialization(
            format_ids::LITERAL,
            format!("non-finite float for key '{}'", key),
        ));
    }
    Ok(record.to_string())
}
