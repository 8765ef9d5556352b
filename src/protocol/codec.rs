//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol. There is no
//! framing on either side: one request payload and one response buffer
//! per connection, message boundaries given by connect/close.
//!
//! ## Wire Format
//!
//! ### Request (canonical binary)
//! ```text
//! ┌───────────────┬───────────┬───────────┐
//! │ Year (2, LE)  │ Month (1) │  Day (1)  │
//! └───────────────┴───────────┴───────────┘
//! ```
//! Raw-text queries are sent as their UTF-8 bytes verbatim. The legacy
//! JSON flavor instead sends `{"date": "YYYY-MM-DD", "sign": ...}`.
//!
//! ### Weather Response (fixed 16 bytes)
//! ```text
//! ┌────────────────┬─────────┬──────────┬───────────────┐
//! │ Date (10)      │ Gap (1) │ Cond (1) │ Temp (4, f32) │
//! └────────────────┴─────────┴──────────┴───────────────┘
//! ```
//!
//! ### Astro Response (10-byte header + trailing text)
//! ```text
//! ┌──────────┬────────────┬───────────────┬──────────────────┬──────────┐
//! │ Sign (1) │ Compat (1) │ DateRange (4) │ MoodLen (4, LE)  │  Mood    │
//! └──────────┴────────────┴───────────────┴──────────────────┴──────────┘
//! ```
//! The mood slice is clamped to the bytes actually received; a declared
//! length larger than the buffer must never cause an out-of-bounds read.

use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};

use crate::config::WireFormat;
use crate::error::{PronosticoError, Result};
use super::{AstroRecord, Date, DateRange, Query, WeatherRecord};

/// Encoded size of a binary date query
pub const DATE_WIRE_SIZE: usize = 4;

/// Fixed size of a weather response
pub const WEATHER_SIZE: usize = 16;

/// Fixed header size of an astro response, before the mood text
pub const ASTRO_HEADER_SIZE: usize = 10;

// =============================================================================
// Query Encoding
// =============================================================================

/// Legacy JSON request body
#[derive(Debug, Serialize)]
struct LegacyQuery<'a> {
    date: String,
    sign: Option<&'a str>,
}

/// Encode a query for transmission
///
/// Binary dates become exactly 4 bytes (u16 LE year, u8 month, u8 day);
/// raw text is emitted verbatim under either wire format.
pub fn encode_query(query: &Query, format: WireFormat) -> Result<Vec<u8>> {
    match query {
        Query::Raw(text) => Ok(text.as_bytes().to_vec()),
        Query::Date { date, sign } => match format {
            WireFormat::Binary => Ok(encode_date(date)),
            WireFormat::Json => {
                let body = LegacyQuery {
                    date: format!("{:04}-{:02}-{:02}", date.year, date.month, date.day),
                    sign: sign.as_deref(),
                };
                Ok(serde_json::to_vec(&body)?)
            }
        },
    }
}

/// Encode a date as the fixed 4-byte binary triple
pub fn encode_date(date: &Date) -> Vec<u8> {
    let mut out = Vec::with_capacity(DATE_WIRE_SIZE);
    out.put_u16_le(date.year);
    out.put_u8(date.month);
    out.put_u8(date.day);
    out
}

// =============================================================================
// Weather Decoding
// =============================================================================

/// Decode a weather response from a captured buffer
///
/// A buffer shorter than 16 bytes is insufficient; a structurally
/// complete record whose date field is empty after stripping padding is
/// invalid.
pub fn decode_weather(buf: &[u8]) -> Result<WeatherRecord> {
    if buf.len() < WEATHER_SIZE {
        return Err(PronosticoError::InsufficientData {
            needed: WEATHER_SIZE,
            got: buf.len(),
        });
    }

    // Date: 10 bytes of left-justified ASCII, NUL/space padded
    let date_field = &buf[0..10];
    let end = date_field.iter().position(|&b| b == 0).unwrap_or(10);
    let date = String::from_utf8_lossy(&date_field[..end]).trim().to_string();

    if date.is_empty() {
        return Err(PronosticoError::InvalidData(
            "weather record has an empty date field".to_string(),
        ));
    }

    // Offset 10 is a reserved gap byte
    let condition = buf[11] as i8;
    let temperature = (&buf[12..16]).get_f32_le();

    Ok(WeatherRecord {
        date,
        condition,
        temperature,
    })
}

// =============================================================================
// Astro Decoding
// =============================================================================

/// Decode an astro response from a captured buffer
///
/// Requires the fixed 10-byte header. The declared mood length is clamped
/// to the bytes actually present after the header.
pub fn decode_astro(buf: &[u8]) -> Result<AstroRecord> {
    if buf.len() < ASTRO_HEADER_SIZE {
        return Err(PronosticoError::InsufficientData {
            needed: ASTRO_HEADER_SIZE,
            got: buf.len(),
        });
    }

    let sign = buf[0];
    let sign_compat = buf[1];
    let date_range = DateRange {
        from_day: buf[2],
        from_month: buf[3],
        to_day: buf[4],
        to_month: buf[5],
    };

    let mood_len = (&buf[6..10]).get_u32_le() as usize;
    let available = buf.len() - ASTRO_HEADER_SIZE;
    let take = mood_len.min(available);
    if take < mood_len {
        tracing::warn!(
            declared = mood_len,
            available,
            "mood length exceeds captured bytes, clamping"
        );
    }

    let mood = String::from_utf8_lossy(&buf[ASTRO_HEADER_SIZE..ASTRO_HEADER_SIZE + take])
        .trim_end_matches('\0')
        .to_string();

    Ok(AstroRecord {
        sign,
        sign_compat,
        date_range,
        mood,
    })
}

// =============================================================================
// Legacy JSON Astro Decoding
// =============================================================================

/// Legacy JSON astro body as the old horoscope server emits it
///
/// Label fields (`sign_s`, `sign_compat_s`) are redundant with the
/// indices and ignored here; rendering derives labels locally.
#[derive(Debug, Deserialize)]
struct LegacyAstro {
    sign: u8,
    sign_compat: u8,
    date_range: [String; 2],
    mood: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LegacyBody {
    Error { error: String },
    Astro(LegacyAstro),
}

/// Decode a legacy JSON astro response
///
/// Parse failures carry the underlying serde message and are non-fatal;
/// a server-side `{"error": ...}` body reports as invalid data.
pub fn decode_astro_json(buf: &[u8]) -> Result<AstroRecord> {
    // Capped reads may carry trailing NUL padding; the JSON parser won't
    let end = buf.iter().rposition(|&b| b != 0).map_or(0, |p| p + 1);

    match serde_json::from_slice::<LegacyBody>(&buf[..end])? {
        LegacyBody::Error { error } => Err(PronosticoError::InvalidData(error)),
        LegacyBody::Astro(body) => {
            let (from_month, from_day) = parse_range_part(&body.date_range[0])?;
            let (to_month, to_day) = parse_range_part(&body.date_range[1])?;

            Ok(AstroRecord {
                sign: body.sign,
                sign_compat: body.sign_compat,
                date_range: DateRange {
                    from_day,
                    from_month,
                    to_day,
                    to_month,
                },
                mood: body.mood,
            })
        }
    }
}

/// Parse one `"MM-DD"` legacy range entry into (month, day)
fn parse_range_part(s: &str) -> Result<(u8, u8)> {
    let (month, day) = s.split_once('-').ok_or_else(|| {
        PronosticoError::InvalidData(format!("malformed date range entry: {s:?}"))
    })?;

    let month = month.trim().parse().map_err(|_| {
        PronosticoError::InvalidData(format!("malformed date range month: {s:?}"))
    })?;
    let day = day.trim().parse().map_err(|_| {
        PronosticoError::InvalidData(format!("malformed date range day: {s:?}"))
    })?;

    Ok((month, day))
}
