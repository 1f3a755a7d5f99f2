// ## 📂 File: `src/constants.rs`

/// Separator between key text and ciphertext text in an encrypted envelope.
pub const ENCRYPTION_MARKER: &str = "<ISENCRYPTED>";

/// Magic prefix of the opaque-binary payload.
/// "RLY1" = Relay binary record v1
pub const MAGIC_RLY1: [u8; 4] = *b"RLY1";

/// Version byte leading every sealed token.
pub const TOKEN_VERSION: u8 = 0x80;

/// Defaults when the config omits them.
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9090;
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Hard ceiling for a text-file payload, regardless of buffer size.
pub const MAX_TEXT_FILE_BYTES: u64 = 8192;

/// Wrapper element used for markup payloads and markup output files.
pub const XML_ROOT: &str = "root";

/// Stem used for default output file names (`received.json`, ...).
pub const OUTPUT_STEM: &str = "received";

/// Format identifiers accepted by the encoder.
pub mod format_ids {
    pub const BINARY: &str  = "binary";
    pub const JSON: &str    = "json";
    pub const XML: &str     = "xml";
    pub const LITERAL: &str = "literal";
}

/// Output file extensions accepted by the persister.
pub mod output_exts {
    pub const TXT: &str    = "txt";
    pub const PICKLE: &str = "pickle";
    pub const JSON: &str   = "json";
    pub const XML: &str    = "xml";
}
