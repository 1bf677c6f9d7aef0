//! Reservation transcoders between the internal model and the partner schema

mod internal_to_partner;
mod partner_to_internal;

pub use internal_to_partner::InternalToPartnerTranscoder;
pub use partner_to_internal::{DEFAULT_BOOKING_CHANNEL, PartnerToInternalTranscoder};
