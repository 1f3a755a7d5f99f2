// ## 📂 File: `cli/src/config.rs`

//! TOML configuration, read once at start-up and passed by value to
//! `sender::run` / `receiver::run`. Nothing here is global.
//!
//! ```toml
//! [setting]
//! host = "127.0.0.1"
//! port = 9090
//! buffer = 4096
//!
//! [client]
//! input = "{'Test': 1, 'Data': 2, 'Sample': 3}"
//! encryption = false
//! format = "json"
//!
//! [server]
//! print = true
//! save = true
//! file = "received.json"
//! ```

use std::fs;
use std::path::Path;

use relay_core::codec::Format;
use relay_core::constants::{format_ids, DEFAULT_BUFFER_SIZE, DEFAULT_HOST, DEFAULT_PORT};
use relay_core::persist::default_output_name;
use relay_core::types::{RelayError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    pub setting: Setting,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

/// Shared by both peers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_buffer")]
    pub buffer: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// A `.txt` path or a literal mapping such as `{'Test': 1}`.
    pub input: String,
    #[serde(default)]
    pub encryption: bool,
    #[serde(default = "default_format")]
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_true")]
    pub print: bool,
    #[serde(default)]
    pub save: bool,
    #[serde(default = "default_file")]
    pub file: String,
}

fn default_buffer() -> usize { DEFAULT_BUFFER_SIZE }
fn default_format() -> String { format_ids::JSON.to_string() }
fn default_true() -> bool { true }
fn default_file() -> String { default_output_name("", Some(Format::Json)) }

impl Default for Setting {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            buffer: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl RelayConfig {
    /// Read and parse `path`. A missing/empty file or a parse error is `ConfigurationMissing`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| RelayError::ConfigurationMissing(format!("{}: {}", path.display(), e)))?;
        if text.trim().is_empty() {
            return Err(RelayError::ConfigurationMissing(format!("{} is empty", path.display())));
        }
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: RelayConfig =
            toml::from_str(text).map_err(|e| RelayError::ConfigurationMissing(e.to_string()))?;
        if config.setting.buffer == 0 {
            return Err(RelayError::ConfigurationMissing("[setting] buffer must be > 0".into()));
        }
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| RelayError::ConfigurationMissing(e.to_string()))
    }

    /// A complete config for the given sender input. The receiver's output file
    /// is derived from the input, `received.txt` for text files.
    pub fn for_input(input: &str, format: &str, encryption: bool) -> Self {
        let parsed = format.parse::<Format>().ok();
        Self {
            setting: Setting::default(),
            client: Some(ClientConfig {
                input: input.to_string(),
                encryption,
                format: format.to_string(),
            }),
            server: Some(ServerConfig {
                print: true,
                save: true,
                file: default_output_name(input, parsed),
            }),
        }
    }

    pub fn client(&self) -> Result<&ClientConfig> {
        self.client
            .as_ref()
            .ok_or_else(|| RelayError::ConfigurationMissing("[client] section".into()))
    }

    /// Receiver options; defaults (print only) when the section is absent.
    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or(ServerConfig {
            print: true,
            save: false,
            file: default_file(),
        })
    }
}
