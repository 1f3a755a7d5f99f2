// ## 📂 File: `cli/src/sender.rs`

use relay_core::codec::Format;
use relay_core::exchange::compose;
use relay_core::input::SendInput;
use relay_core::types::Result;
use tracing::info;

use crate::config::RelayConfig;
use crate::transport;

/// Build the outgoing message from config without touching the network.
pub fn prepare(config: &RelayConfig) -> Result<String> {
    let client = config.client()?;
    let input = SendInput::resolve(&client.input, config.setting.buffer)?;
    let format = match &input {
        SendInput::Record(_) => client.format.parse::<Format>()?,
        // text payloads are never serialized; the format is unused
        SendInput::Text(_) => Format::Literal,
    };
    compose(&input, format, client.encryption)
}

/// Encode → encrypt → connect → send → close. Any failure aborts before sending.
pub async fn run(config: &RelayConfig) -> Result<()> {
    let message = prepare(config)?;
    let mut stream = transport::connect(&config.setting.host, config.setting.port).await?;
    transport::send(&message, &mut stream, config.setting.buffer).await?;
    info!("task completed, connection closed");
    Ok(())
}
