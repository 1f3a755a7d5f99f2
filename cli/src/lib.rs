//! relay-cli
//!
//! Config, TCP transport and entry points over relay-core.
//! Tokio lives only here.

pub mod config;
pub mod logging;
pub mod transport;
pub mod sender;
pub mod receiver;

pub use config::RelayConfig;
