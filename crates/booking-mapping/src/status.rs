//! Reservation status translation tables
//!
//! The two directions are not inverses of each other: unknown internal codes
//! become `UNSPECIFIED` on the partner side, unknown partner codes become
//! `UNKNOWN` internally.

pub const CONFIRMED: &str = "CONFIRMED";
pub const PENDING: &str = "PENDING";

/// Internal spelling of a cancelled booking
pub const INTERNAL_CANCELED: &str = "CANCELED";
/// Internal fallback for unrecognized partner codes
pub const INTERNAL_UNKNOWN: &str = "UNKNOWN";

/// Partner spelling of a cancelled booking
pub const PARTNER_CANCELLED: &str = "CANCELLED";
/// Partner fallback for unrecognized or missing internal codes
pub const PARTNER_UNSPECIFIED: &str = "UNSPECIFIED";

/// Translate an internal status code to the partner vocabulary
pub fn to_partner(status: Option<&str>) -> &'static str {
    match status.map(str::to_uppercase).as_deref() {
        Some(CONFIRMED) => CONFIRMED,
        Some(INTERNAL_CANCELED) => PARTNER_CANCELLED,
        Some(PENDING) => PENDING,
        _ => PARTNER_UNSPECIFIED,
    }
}

/// Translate a non-empty partner status code to the internal vocabulary
pub fn to_internal(status: &str) -> &'static str {
    match status.to_uppercase().as_str() {
        CONFIRMED => CONFIRMED,
        PARTNER_CANCELLED => INTERNAL_CANCELED,
        PENDING => PENDING,
        _ => INTERNAL_UNKNOWN,
    }
}
