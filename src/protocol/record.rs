//! Record definitions
//!
//! Typed views of decoded server responses. Records hold raw decoded
//! fields only; label lookup and rendering live in [`crate::format`].

/// Number of weather condition indices the servers emit (0-5)
pub const N_CONDITIONS: u8 = 6;

/// Number of zodiac sign indices the servers emit (0-11)
pub const N_SIGNS: u8 = 12;

/// A decoded weather response
///
/// Wire source is the fixed 16-byte layout: 10-byte padded ASCII date,
/// 1 reserved byte, signed condition index, little-endian f32 temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    /// Date text with NUL/space padding stripped
    pub date: String,

    /// Condition index; values outside 0-5 render as unknown
    pub condition: i8,

    /// Temperature in degrees Celsius
    pub temperature: f32,
}

/// Validity range for a zodiac sign's dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from_day: u8,
    pub from_month: u8,
    pub to_day: u8,
    pub to_month: u8,
}

/// A decoded horoscope response
///
/// Wire source is a fixed 10-byte header followed by a length-prefixed
/// mood text. The mood is clamped to the bytes actually received, so its
/// length can be shorter than the declared prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstroRecord {
    /// Sign index; values outside 0-11 render as unknown
    pub sign: u8,

    /// Most compatible sign index
    pub sign_compat: u8,

    /// Dates covered by the sign
    pub date_range: DateRange,

    /// Mood text (may be truncated relative to the declared length)
    pub mood: String,
}

/// A response routed through the dispatcher
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// Primary kind: opaque bytes, no structured decode
    Raw(Vec<u8>),

    /// Weather kind
    Weather(WeatherRecord),

    /// Horoscope kind
    Astro(AstroRecord),
}
