//! Response dispatch
//!
//! Routes a raw response buffer to the decoder matching the configured
//! server kind. Stateless: the kind is fixed for the session and every
//! response takes exactly one branch.

use crate::config::{ServerKind, WireFormat};
use crate::error::Result;
use super::codec::{decode_astro, decode_astro_json, decode_weather};
use super::record::Decoded;

/// Decode one response buffer per the configured server kind
///
/// Primary performs no decode: the buffer is handed back opaque for the
/// presentation layer to dump. The wire format only matters for the
/// horoscope kind, whose legacy servers answer in JSON.
pub fn decode_response(kind: ServerKind, format: WireFormat, buf: &[u8]) -> Result<Decoded> {
    match kind {
        ServerKind::Primary => Ok(Decoded::Raw(buf.to_vec())),
        ServerKind::Weather => Ok(Decoded::Weather(decode_weather(buf)?)),
        ServerKind::Horoscope => {
            let record = match format {
                WireFormat::Binary => decode_astro(buf)?,
                WireFormat::Json => decode_astro_json(buf)?,
            };
            Ok(Decoded::Astro(record))
        }
    }
}
