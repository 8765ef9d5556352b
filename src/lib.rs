//! # pronostico
//!
//! Interactive TCP client for a family of small weather/horoscope
//! servers speaking a fixed-layout binary protocol:
//! - Query parsing (`YYYY-M-D` dates with optional sign modifier,
//!   raw-text fallback)
//! - Payload encoding (canonical 4-byte binary date, legacy JSON flavor)
//! - Response decoding (fixed 16-byte weather record, 10-byte astro
//!   header with a length-prefixed mood tail, clamped to the buffer)
//! - Per-kind response dispatch (Primary / Weather / Horoscope)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐   ┌─────────────────┐   ┌──────────────────┐
//! │  user input  │──▶│   QueryParser   │──▶│  Codec (encode)  │
//! └──────────────┘   └─────────────────┘   └────────┬─────────┘
//!                                                   │
//!                                          ┌────────▼─────────┐
//!                                          │ one-shot client  │
//!                                          │ (send/recv/close)│
//!                                          └────────┬─────────┘
//!                                                   │
//!                    ┌─────────────────┐   ┌────────▼─────────┐
//!                    │  presentation   │◀──│    Dispatcher    │
//!                    │  (src/format)   │   │ (Codec decode)   │
//!                    └─────────────────┘   └──────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod client;
pub mod format;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{PronosticoError, Result};
pub use config::{ClientConfig, ServerKind, WireFormat};
pub use client::Client;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of pronostico
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
