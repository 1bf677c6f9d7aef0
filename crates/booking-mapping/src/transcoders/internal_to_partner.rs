use booking_model::{internal, partner};

use crate::transforms::{format_amount, format_date, format_timestamp};
use crate::{Error, Result, SchemaTag, TagPair, TypedTranscoder, status};

/// Converts internal reservations into the partner schema
///
/// Total for any present input: every optional field is carried as absent
/// rather than failing.
#[derive(Debug, Clone)]
pub struct InternalToPartnerTranscoder {
    tags: TagPair,
}

impl InternalToPartnerTranscoder {
    /// Create a transcoder bound to `Model.Reservation -> Google.Reservation`
    pub fn new() -> Self {
        Self {
            tags: TagPair::new(
                SchemaTag::INTERNAL_RESERVATION,
                SchemaTag::PARTNER_RESERVATION,
            ),
        }
    }

    /// Convert a reservation
    pub fn convert(source: &internal::Reservation) -> partner::Reservation {
        let guest = source.guest.as_ref();

        partner::Reservation {
            id: Some(source.id.to_string()),
            check_in: source.check_in_date.map(format_date),
            check_out: source.check_out_date.map(format_date),
            guest_name: Some(guest.map(internal::Guest::full_name).unwrap_or_default()),
            guest_email: guest.and_then(|g| g.email.clone()),
            guest_phone: guest.and_then(|g| g.phone.clone()),
            address: guest.map(|g| partner::GuestAddress {
                street_address: g.address.clone(),
                city: g.city.clone(),
                country_code: g.country.clone(),
            }),
            rooms: source.rooms.iter().map(convert_room).collect(),
            total_price: Some(format_amount(source.total_amount)),
            reservation_status: Some(status::to_partner(source.status.as_deref()).to_string()),
            source: source.booking_channel.clone(),
            create_time: Some(format_timestamp(&source.created_at)),
            update_time: source.modified_at.as_ref().map(format_timestamp),
        }
    }
}

fn convert_room(room: &internal::RoomLine) -> partner::RoomBooking {
    partner::RoomBooking {
        room_type_id: room.room_type_id.clone(),
        room_category: room.room_type_name.clone(),
        quantity: room.quantity,
        number_of_adults: room.adults,
        number_of_children: room.children,
        nightly_rate: Some(format_amount(room.rate_per_night)),
    }
}

impl Default for InternalToPartnerTranscoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TypedTranscoder for InternalToPartnerTranscoder {
    type Source = internal::Reservation;
    type Target = partner::Reservation;

    fn tags(&self) -> &TagPair {
        &self.tags
    }

    fn typed_map(&self, source: Option<&Self::Source>) -> Result<Option<Self::Target>> {
        let source = source.ok_or_else(|| Error::null_input("internal reservation"))?;
        Ok(Some(Self::convert(source)))
    }
}
