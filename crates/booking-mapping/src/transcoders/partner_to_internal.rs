use std::sync::Arc;

use booking_model::{internal, partner};

use crate::transforms::{non_empty, parse_amount, parse_date, parse_id, parse_timestamp, split_name};
use crate::{Clock, Error, Result, SchemaTag, SystemClock, TagPair, TypedTranscoder, status};

/// Booking channel recorded when the partner does not name a source
pub const DEFAULT_BOOKING_CHANNEL: &str = "Google";

/// Converts partner reservations into the internal model
///
/// Malformed identifiers and amounts are replaced with defaults; malformed
/// dates and timestamps fail the conversion.
#[derive(Debug, Clone)]
pub struct PartnerToInternalTranscoder {
    tags: TagPair,
    clock: Arc<dyn Clock>,
}

impl PartnerToInternalTranscoder {
    /// Create a transcoder bound to `Google.Reservation -> Model.Reservation`
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a transcoder that stamps missing creation times from `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            tags: TagPair::new(
                SchemaTag::PARTNER_RESERVATION,
                SchemaTag::INTERNAL_RESERVATION,
            ),
            clock,
        }
    }

    /// Convert a reservation
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when a non-empty date or timestamp is malformed.
    pub fn convert(&self, source: &partner::Reservation) -> Result<internal::Reservation> {
        let check_in_date = non_empty(source.check_in.as_deref())
            .map(|value| parse_date("check-in date", value))
            .transpose()?;
        let check_out_date = non_empty(source.check_out.as_deref())
            .map(|value| parse_date("check-out date", value))
            .transpose()?;

        let created_at = match non_empty(source.create_time.as_deref()) {
            Some(value) => parse_timestamp("create time", value)?,
            None => {
                let now = self.clock.now();
                tracing::debug!(%now, "No create time supplied, using processing time");
                now
            }
        };
        let modified_at = non_empty(source.update_time.as_deref())
            .map(|value| parse_timestamp("update time", value))
            .transpose()?;

        let (first_name, last_name) = split_name(non_empty(source.guest_name.as_deref()));
        let address = source.address.as_ref();
        let guest = internal::Guest {
            first_name,
            last_name,
            email: source.guest_email.clone(),
            phone: source.guest_phone.clone(),
            address: address.and_then(|a| a.street_address.clone()),
            city: address.and_then(|a| a.city.clone()),
            country: address.and_then(|a| a.country_code.clone()),
        };

        Ok(internal::Reservation {
            id: parse_id(source.id.as_deref()),
            check_in_date,
            check_out_date,
            guest: Some(guest),
            rooms: source.rooms.iter().map(convert_room).collect(),
            total_amount: parse_amount("total price", source.total_price.as_deref()),
            status: non_empty(source.reservation_status.as_deref())
                .map(|value| status::to_internal(value).to_string()),
            booking_channel: Some(
                source
                    .source
                    .clone()
                    .unwrap_or_else(|| DEFAULT_BOOKING_CHANNEL.to_string()),
            ),
            created_at,
            modified_at,
        })
    }
}

fn convert_room(room: &partner::RoomBooking) -> internal::RoomLine {
    internal::RoomLine {
        room_type_id: room.room_type_id.clone(),
        room_type_name: room.room_category.clone(),
        quantity: room.quantity,
        adults: room.number_of_adults,
        children: room.number_of_children,
        rate_per_night: parse_amount("nightly rate", room.nightly_rate.as_deref()),
    }
}

impl Default for PartnerToInternalTranscoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TypedTranscoder for PartnerToInternalTranscoder {
    type Source = partner::Reservation;
    type Target = internal::Reservation;

    fn tags(&self) -> &TagPair {
        &self.tags
    }

    fn typed_map(&self, source: Option<&Self::Source>) -> Result<Option<Self::Target>> {
        let source = source.ok_or_else(|| Error::null_input("partner reservation"))?;
        self.convert(source).map(Some)
    }
}
