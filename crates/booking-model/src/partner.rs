//! Partner-facing reservation schema
//!
//! Everything the partner exchanges is text: dates are `YYYY-MM-DD`,
//! amounts are decimal strings and timestamps are ISO-8601.

use serde::{Deserialize, Serialize};

/// A reservation in the partner schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reservation {
    pub id: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub address: Option<GuestAddress>,
    pub rooms: Vec<RoomBooking>,
    pub total_price: Option<String>,
    pub reservation_status: Option<String>,
    pub source: Option<String>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

/// Postal address of the guest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestAddress {
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub country_code: Option<String>,
}

/// One booked room category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomBooking {
    pub room_type_id: Option<String>,
    pub room_category: Option<String>,
    pub quantity: i32,
    pub number_of_adults: i32,
    pub number_of_children: i32,
    pub nightly_rate: Option<String>,
}
