//! Configuration for the pronostico client
//!
//! Immutable session configuration with sensible defaults, constructed
//! once at startup and passed explicitly to the codec and dispatcher.

use std::str::FromStr;

use crate::error::PronosticoError;

/// Which decoder applies to server responses
///
/// Selected once at client start, immutable for the session, never
/// negotiated with the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerKind {
    /// Echo-style server; responses are opaque raw bytes
    Primary,

    /// Weather server; responses decode as fixed 16-byte weather records
    Weather,

    /// Horoscope server; responses decode as variable-length astro records
    Horoscope,
}

impl FromStr for ServerKind {
    type Err = PronosticoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "primary" => Ok(ServerKind::Primary),
            "weather" => Ok(ServerKind::Weather),
            "horoscope" => Ok(ServerKind::Horoscope),
            other => Err(PronosticoError::Config(format!(
                "Unrecognized server kind: {other:?} (expected primary, weather or horoscope)"
            ))),
        }
    }
}

/// Outbound encoding strategy for structured date queries
///
/// The fixed-width binary triple is the canonical format; the JSON object
/// form is the legacy flavor spoken by the oldest horoscope server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireFormat {
    /// 4-byte binary triple: u16 LE year, u8 month, u8 day
    #[default]
    Binary,

    /// Legacy JSON object: {"date": "YYYY-M-D", "sign": ...}
    Json,
}

impl FromStr for WireFormat {
    type Err = PronosticoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" => Ok(WireFormat::Binary),
            "json" => Ok(WireFormat::Json),
            other => Err(PronosticoError::Config(format!(
                "Unrecognized wire format: {other:?} (expected binary or json)"
            ))),
        }
    }
}

/// Main configuration for a client session
#[derive(Debug, Clone)]
pub struct ClientConfig {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Server host name or address
    pub host: String,

    /// Server TCP port
    pub port: u16,

    // -------------------------------------------------------------------------
    // Protocol Configuration
    // -------------------------------------------------------------------------
    /// Which decoder applies to responses
    pub kind: ServerKind,

    /// Outbound encoding for structured queries
    pub format: WireFormat,

    /// Maximum bytes captured from a response in the single read
    pub recv_max: usize,

    /// Read timeout (milliseconds); expiry reports NoResponse
    pub read_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 24000,
            kind: ServerKind::Primary,
            format: WireFormat::Binary,
            recv_max: 1024,
            read_timeout_ms: 5000,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for ClientConfig
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the server host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the server kind
    pub fn kind(mut self, kind: ServerKind) -> Self {
        self.config.kind = kind;
        self
    }

    /// Set the outbound wire format
    pub fn format(mut self, format: WireFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Set the response read cap (in bytes)
    pub fn recv_max(mut self, bytes: usize) -> Self {
        self.config.recv_max = bytes;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
