//! Conversion between the canonical display representation of dates
//! (`MMM DD, YYYY`, e.g. `DEC 06, 2021`) and the editable ISO representation
//! (`YYYY-MM-DD`), plus day-granularity expiration comparison.
//!
//! Certificates are legal-style documents: a rendering must never fail
//! mid-print, so nothing in this module returns an error. Unparseable input
//! degrades to a safe default instead — the original string for display
//! conversion, "not expired" for the expiry check.

use time::{format_description::FormatItem, macros::format_description, Date, Month, OffsetDateTime};

#[cfg(test)]
mod test;

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const ISO_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Result of a display conversion, keeping the fallback path observable.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DisplayOutcome {
    /// ISO input converted to the display representation.
    Converted(String),
    /// Input already carried the display representation; returned unchanged.
    AlreadyDisplay(String),
    /// Input was unparseable; returned unchanged rather than raised.
    Fallback(String),
}

impl DisplayOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Converted(value) | Self::AlreadyDisplay(value) | Self::Fallback(value) => value,
        }
    }

    pub fn into_inner(self) -> String {
        match self {
            Self::Converted(value) | Self::AlreadyDisplay(value) | Self::Fallback(value) => value,
        }
    }
}

/// Converts an ISO `YYYY-MM-DD` string into the display representation with an
/// upper-cased month abbreviation. Idempotent on already-display input.
pub fn to_display(input: &str) -> DisplayOutcome {
    if matches_display_shape(input) {
        return DisplayOutcome::AlreadyDisplay(input.to_owned());
    }

    match Date::parse(input, ISO_FORMAT) {
        Ok(date) => DisplayOutcome::Converted(format_display(date)),
        Err(_) => {
            tracing::debug!(input, "unparseable date kept verbatim");
            DisplayOutcome::Fallback(input.to_owned())
        }
    }
}

/// Inverse of [`to_display`]: parses `MMM DD, YYYY` via the fixed month table.
/// Returns `None` when the three-token pattern or the month abbreviation does
/// not match.
pub fn to_editable(display: &str) -> Option<String> {
    let date = parse_display(display)?;
    Some(format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    ))
}

/// Whether a display-formatted expiration date lies strictly before today
/// (UTC). Equality is not expired; unparseable input is not expired.
pub fn is_expired(display: &str) -> bool {
    is_expired_on(display, OffsetDateTime::now_utc().date())
}

/// Day-granularity comparison against an explicit reference day.
pub fn is_expired_on(display: &str, today: Date) -> bool {
    match parse_display(display) {
        Some(date) => date < today,
        None => false,
    }
}

fn format_display(date: Date) -> String {
    format!(
        "{} {:02}, {}",
        MONTHS[u8::from(date.month()) as usize - 1],
        date.day(),
        date.year()
    )
}

fn parse_display(value: &str) -> Option<Date> {
    let cleaned = value.replace(',', " ");
    let mut tokens = cleaned.split_whitespace();
    let (month, day, year) = (tokens.next()?, tokens.next()?, tokens.next()?);
    if tokens.next().is_some() {
        return None;
    }

    let month_index = MONTHS.iter().position(|candidate| *candidate == month)?;
    let month = Month::try_from(month_index as u8 + 1).ok()?;
    let day: u8 = day.parse().ok()?;
    let year: i32 = year.parse().ok()?;

    Date::from_calendar_date(year, month, day).ok()
}

// The legacy seed data carries display-formatted dates, so the shape check has
// to run before any parsing attempt: `MMM DD, YYYY` anywhere in the input.
fn matches_display_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() < 12 {
        return false;
    }

    bytes.windows(12).any(|window| {
        window[..3].iter().all(u8::is_ascii_uppercase)
            && window[3] == b' '
            && window[4].is_ascii_digit()
            && window[5].is_ascii_digit()
            && window[6] == b','
            && window[7] == b' '
            && window[8..].iter().all(u8::is_ascii_digit)
    })
}
