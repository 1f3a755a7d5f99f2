// ## 📂 File: `src/exchange.rs`

//! One exchange, minus the socket: compose on the sender, recover on the receiver.

use tracing::info;

use crate::classify::{classify, Classified};
use crate::codec::{encode, Format};
use crate::crypto::envelope::encrypt;
use crate::input::SendInput;
use crate::types::{RelayError, Result};

/// Sender: encode (records only) then optionally encrypt.
pub fn compose(input: &SendInput, format: Format, encryption: bool) -> Result<String> {
    let payload = match input {
        SendInput::Record(record) => encode(record, format)?,
        SendInput::Text(text) => text.clone(),
    };
    encrypt(&payload, encryption)
}

/// Receiver: decode the raw buffer as UTF-8 and classify it.
pub fn recover(received: &[u8]) -> Result<Classified> {
    if received.is_empty() {
        return Err(RelayError::EmptyMessage);
    }
    let text = std::str::from_utf8(received)
        .map_err(|e| RelayError::MalformedInput(format!("received data is not UTF-8: {}", e)))?;
    info!(bytes = received.len(), "data received");
    classify(text)
}
