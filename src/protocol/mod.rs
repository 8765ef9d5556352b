//! Protocol Module
//!
//! Wire protocol for the weather/horoscope servers: query parsing,
//! payload encoding, response decoding, and per-kind dispatch.
//!
//! ## Protocol Summary
//!
//! One request and one response per connection, no framing, no length
//! prefix on the request side.
//!
//! ### Outbound
//! - Structured date: 4 bytes (`u16` LE year, `u8` month, `u8` day),
//!   or a JSON object in the legacy flavor
//! - Anything else: raw UTF-8 text
//!
//! ### Inbound (by configured server kind)
//! - Primary:   opaque bytes, no decode
//! - Weather:   fixed 16-byte record
//! - Horoscope: 10-byte header + length-prefixed mood text (binary),
//!   or a JSON object (legacy)

mod codec;
mod dispatch;
mod query;
mod record;

pub use codec::{
    decode_astro, decode_astro_json, decode_weather, encode_date, encode_query,
    ASTRO_HEADER_SIZE, DATE_WIRE_SIZE, WEATHER_SIZE,
};
pub use dispatch::decode_response;
pub use query::{is_exit, Date, Query, EXIT_KEYWORD};
pub use record::{AstroRecord, DateRange, Decoded, WeatherRecord, N_CONDITIONS, N_SIGNS};
