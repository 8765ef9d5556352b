//! Query parsing
//!
//! Turns one line of user input into a structured query. Lines whose
//! first token matches the `YYYY-M-D` date pattern become a structured
//! date query (with an optional sign modifier for the horoscope flavor);
//! everything else passes through as raw text, which the echo-style
//! primary server expects.

/// Keyword that ends the interactive session, matched case-insensitively
pub const EXIT_KEYWORD: &str = "salir";

/// Check whether a line is the session exit command
///
/// Must be intercepted before parsing: an exit line performs no network
/// I/O at all.
pub fn is_exit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(EXIT_KEYWORD)
}

/// A calendar date as carried on the wire
///
/// Range-checked only (month 1-12, day 1-31); no calendar validation
/// beyond that, matching the servers' behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    /// Parse a `YYYY-M-D` token: 4-digit year, 1-2 digit month and day
    pub fn parse(token: &str) -> Option<Self> {
        let mut parts = token.split('-');
        let year = parts.next()?;
        let month = parts.next()?;
        let day = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || !(1..=2).contains(&month.len()) || !(1..=2).contains(&day.len()) {
            return None;
        }
        if !all_digits(year) || !all_digits(month) || !all_digits(day) {
            return None;
        }

        let year: u16 = year.parse().ok()?;
        let month: u8 = month.parse().ok()?;
        let day: u8 = day.parse().ok()?;

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }

        Some(Date { year, month, day })
    }
}

/// One request payload, built from a single line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// A recognized date, optionally with a sign modifier
    Date { date: Date, sign: Option<String> },

    /// Unrecognized input, sent verbatim (zero-length is valid)
    Raw(String),
}

impl Query {
    /// Parse one line of user input
    ///
    /// The line is trimmed first. A matching first token produces a date
    /// query; the next whitespace-separated token, if any, becomes the
    /// sign modifier and anything after it is ignored. Non-matching input
    /// falls back to a raw payload by design.
    pub fn parse(line: &str) -> Query {
        let trimmed = line.trim();
        let mut tokens = trimmed.split_whitespace();

        if let Some(date) = tokens.next().and_then(Date::parse) {
            let sign = tokens.next().map(|s| s.to_string());
            return Query::Date { date, sign };
        }

        Query::Raw(trimmed.to_string())
    }
}
