//! Field transforms
//!
//! Formatting and parsing helpers shared by the reservation transcoders.
//! Parsers for identifiers and amounts recover with a default; date and
//! timestamp parsers fail on malformed text.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

/// Date layout exchanged with the partner
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const ALTERNATE_DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%Y.%m.%d"];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Render a calendar date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Render an amount fixed-point with exactly two fractional digits
///
/// Midpoints round away from zero. No grouping separators are emitted.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Render an instant in round-trippable ISO-8601 form
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse a calendar date
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY.MM.DD` and ISO-8601 date-times,
/// of which the date part is kept.
///
/// # Errors
///
/// Returns [`crate::Error::Parse`] when no accepted layout matches.
pub fn parse_date(field: &'static str, value: &str) -> crate::Result<NaiveDate> {
    let input = value.trim();

    let primary = match NaiveDate::parse_from_str(input, DATE_FORMAT) {
        Ok(date) => return Ok(date),
        Err(error) => error,
    };

    let alternate = ALTERNATE_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok());
    if let Some(date) = alternate {
        return Ok(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Ok(timestamp.date_naive());
    }

    parse_naive_datetime(input)
        .map(|timestamp| timestamp.date())
        .ok_or_else(|| crate::Error::parse(field, value, primary))
}

/// Parse an instant
///
/// Offsets are normalized to UTC. Date-times without an offset and bare
/// dates are taken as UTC, the latter at midnight.
///
/// # Errors
///
/// Returns [`crate::Error::Parse`] when no accepted layout matches.
pub fn parse_timestamp(field: &'static str, value: &str) -> crate::Result<DateTime<Utc>> {
    let input = value.trim();

    let primary = match DateTime::parse_from_rfc3339(input) {
        Ok(timestamp) => return Ok(timestamp.with_timezone(&Utc)),
        Err(error) => error,
    };

    if let Some(timestamp) = parse_naive_datetime(input) {
        return Ok(timestamp.and_utc());
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| crate::Error::parse(field, value, primary))
}

fn parse_naive_datetime(input: &str) -> Option<NaiveDateTime> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
}

/// Parse a decimal amount, substituting zero when absent or malformed
pub fn parse_amount(field: &'static str, value: Option<&str>) -> Decimal {
    let Some(text) = value else {
        return Decimal::ZERO;
    };
    let text = text.trim();
    // Digit separators and exponents are not amounts on the partner wire.
    let parsed = if text.contains(['_', 'e', 'E']) {
        None
    } else {
        Decimal::from_str(text).ok()
    };
    parsed.unwrap_or_else(|| {
        tracing::debug!(field, value = text, "Unparseable amount, substituting zero");
        Decimal::ZERO
    })
}

/// Parse an identifier, substituting a fresh one when absent or malformed
pub fn parse_id(value: Option<&str>) -> Uuid {
    value
        .and_then(|text| Uuid::parse_str(text.trim()).ok())
        .unwrap_or_else(|| {
            let generated = Uuid::new_v4();
            tracing::debug!(value = ?value, %generated, "Unparseable reservation id, generated a new one");
            generated
        })
}

/// Split a full name into first token and the remaining tokens
///
/// Tokens are whitespace delimited and rejoined with single spaces. The last
/// name is `None` unless there are at least two tokens.
pub fn split_name(full_name: Option<&str>) -> (Option<String>, Option<String>) {
    let mut tokens = full_name.unwrap_or_default().split_whitespace();
    let first = tokens.next().map(str::to_string);
    let rest = tokens.collect::<Vec<_>>();
    let last = if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    };
    (first, last)
}

/// Treat empty text the same as a missing value
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
