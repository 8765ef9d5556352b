//! Presentation helpers
//!
//! Stateless rendering of decoded records: enum-index label lookup,
//! date-range text, and the hex dump the interactive client prints for
//! sent/received bytes. Records stay pure data; everything
//! human-readable happens here.
//!
//! Labels are the fixed Spanish strings the servers define; index lookup
//! is total, mapping every out-of-range byte to the unknown label.

use crate::protocol::{AstroRecord, DateRange, WeatherRecord, N_CONDITIONS, N_SIGNS};

/// Weather condition labels, indexed 0-5
const CONDITIONS: [&str; N_CONDITIONS as usize] = [
    "Despejado",
    "Nublado",
    "Neblina",
    "Lluvia",
    "Chubascos",
    "Nieve",
];

/// Zodiac sign labels, indexed 0-11
const SIGNS: [&str; N_SIGNS as usize] = [
    "aries",
    "tauro",
    "geminis",
    "cancer",
    "leo",
    "virgo",
    "libra",
    "escorpio",
    "sagitario",
    "capricornio",
    "acuario",
    "piscis",
];

/// Label for a weather condition index; out of range is "Desconocida"
pub fn condition_name(condition: i8) -> &'static str {
    if condition >= 0 && (condition as u8) < N_CONDITIONS {
        CONDITIONS[condition as usize]
    } else {
        "Desconocida"
    }
}

/// Label for a zodiac sign index; out of range is "Desconocido"
pub fn sign_name(sign: u8) -> &'static str {
    if sign < N_SIGNS {
        SIGNS[sign as usize]
    } else {
        "Desconocido"
    }
}

/// Render a sign's date range as `D/M - D/M`
pub fn date_range_text(range: &DateRange) -> String {
    format!(
        "{}/{} - {}/{}",
        range.from_day, range.from_month, range.to_day, range.to_month
    )
}

/// One-line summary of a weather record
pub fn weather_text(record: &WeatherRecord) -> String {
    format!(
        "{} | {} | {:.1} C",
        record.date,
        condition_name(record.condition),
        record.temperature
    )
}

/// One-line summary of an astro record
pub fn astro_text(record: &AstroRecord) -> String {
    format!(
        "{} ({}) | compatible: {} | {}{}",
        sign_name(record.sign),
        date_range_text(&record.date_range),
        sign_name(record.sign_compat),
        record.mood,
        if record.mood.is_empty() { "(sin datos)" } else { "" }
    )
}

/// Hex dump of a byte buffer, space-separated pairs
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
