//! Internal booking model
//!
//! The reservation shape used by the booking engine itself. Dates are calendar
//! dates, money is an exact decimal and timestamps are UTC instants.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reservation in the internal booking model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Reservation identifier
    pub id: Uuid,

    /// Arrival date
    #[serde(default)]
    pub check_in_date: Option<NaiveDate>,

    /// Departure date
    #[serde(default)]
    pub check_out_date: Option<NaiveDate>,

    /// Lead guest
    #[serde(default)]
    pub guest: Option<Guest>,

    /// Booked room lines, in booking order
    #[serde(default)]
    pub rooms: Vec<RoomLine>,

    /// Total amount for the stay
    #[serde(default)]
    pub total_amount: Decimal,

    /// Status code (CONFIRMED, CANCELED, PENDING, ...)
    #[serde(default)]
    pub status: Option<String>,

    /// Channel the booking arrived through
    #[serde(default)]
    pub booking_channel: Option<String>,

    /// Creation instant
    pub created_at: DateTime<Utc>,

    /// Last modification instant
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
}

/// Lead guest of a reservation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Guest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// One booked room type with its occupancy and nightly rate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomLine {
    pub room_type_id: Option<String>,
    pub room_type_name: Option<String>,
    pub quantity: i32,
    pub adults: i32,
    pub children: i32,
    pub rate_per_night: Decimal,
}

impl Reservation {
    /// Create an empty reservation with the given identifier and creation time
    pub fn new(id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            check_in_date: None,
            check_out_date: None,
            guest: None,
            rooms: Vec::new(),
            total_amount: Decimal::ZERO,
            status: None,
            booking_channel: None,
            created_at,
            modified_at: None,
        }
    }
}

impl Guest {
    /// Full name as "first last", omitting missing parts
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }
}
