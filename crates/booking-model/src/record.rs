//! Erased record values passed through the dispatcher

use serde::Serialize;

use crate::{internal, partner};

/// A record of any supported schema
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    /// Internal booking model reservation
    Internal(internal::Reservation),

    /// Partner schema reservation
    Partner(partner::Reservation),
}

/// Discriminant naming the concrete type held by a [`Record`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Internal,
    Partner,
}

impl RecordKind {
    /// Human readable type name used in diagnostics
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Internal => "internal::Reservation",
            Self::Partner => "partner::Reservation",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A concrete record type that can be erased into and recovered from a [`Record`]
pub trait RecordType: Sized {
    /// Variant holding this type
    const KIND: RecordKind;

    /// Erase into a [`Record`]
    fn into_record(self) -> Record;

    /// Recover the concrete type, handing the record back on mismatch
    fn try_from_record(record: Record) -> std::result::Result<Self, Record>;

    /// Borrowing downcast
    fn from_record_ref(record: &Record) -> Option<&Self>;
}

impl RecordType for internal::Reservation {
    const KIND: RecordKind = RecordKind::Internal;

    fn into_record(self) -> Record {
        Record::Internal(self)
    }

    fn try_from_record(record: Record) -> std::result::Result<Self, Record> {
        match record {
            Record::Internal(reservation) => Ok(reservation),
            other => Err(other),
        }
    }

    fn from_record_ref(record: &Record) -> Option<&Self> {
        match record {
            Record::Internal(reservation) => Some(reservation),
            Record::Partner(_) => None,
        }
    }
}

impl RecordType for partner::Reservation {
    const KIND: RecordKind = RecordKind::Partner;

    fn into_record(self) -> Record {
        Record::Partner(self)
    }

    fn try_from_record(record: Record) -> std::result::Result<Self, Record> {
        match record {
            Record::Partner(reservation) => Ok(reservation),
            other => Err(other),
        }
    }

    fn from_record_ref(record: &Record) -> Option<&Self> {
        match record {
            Record::Partner(reservation) => Some(reservation),
            Record::Internal(_) => None,
        }
    }
}

impl Record {
    /// Kind of the record held
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Internal(_) => RecordKind::Internal,
            Self::Partner(_) => RecordKind::Partner,
        }
    }

    /// Borrow as a concrete type
    pub fn downcast_ref<T: RecordType>(&self) -> Option<&T> {
        T::from_record_ref(self)
    }

    /// Parse JSON text as the record type named by `kind`
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON for that record type.
    pub fn from_json(kind: RecordKind, json: &str) -> crate::Result<Self> {
        let record = match kind {
            RecordKind::Internal => serde_json::from_str(json).map(Record::Internal),
            RecordKind::Partner => serde_json::from_str(json).map(Record::Partner),
        };
        record.map_err(|source| crate::Error::json(kind, source))
    }
}

impl From<internal::Reservation> for Record {
    fn from(reservation: internal::Reservation) -> Self {
        Self::Internal(reservation)
    }
}

impl From<partner::Reservation> for Record {
    fn from(reservation: partner::Reservation) -> Self {
        Self::Partner(reservation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_kind_and_downcast() {
        let record = Record::from(partner::Reservation::default());
        assert_eq!(record.kind(), RecordKind::Partner);
        assert!(record.downcast_ref::<partner::Reservation>().is_some());
        assert!(record.downcast_ref::<internal::Reservation>().is_none());
    }

    #[test]
    fn test_try_from_record_returns_record_on_mismatch() {
        let record = internal::Reservation::new(Uuid::nil(), Utc::now()).into_record();
        let back = partner::Reservation::try_from_record(record.clone()).unwrap_err();
        assert_eq!(back, record);
        assert!(internal::Reservation::try_from_record(record).is_ok());
    }

    #[test]
    fn test_from_json_by_kind() {
        let record = Record::from_json(RecordKind::Partner, r#"{"id": "x"}"#).unwrap();
        assert_eq!(record.kind(), RecordKind::Partner);

        let error = Record::from_json(RecordKind::Internal, r#"{"id": "x"}"#).unwrap_err();
        assert!(error.to_string().contains("internal::Reservation"));
    }

    #[test]
    fn test_record_serializes_as_inner_value() {
        let record = Record::from(partner::Reservation {
            id: Some("abc".to_string()),
            ..partner::Reservation::default()
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "abc");
    }

    #[test]
    fn test_internal_json_round_trip() -> anyhow::Result<()> {
        let json = r#"{
            "id": "3f2504e0-4f89-11d3-9a0c-0305e82c3301",
            "checkInDate": "2023-06-15",
            "totalAmount": "500.50",
            "createdAt": "2023-05-10T14:30:00Z",
            "rooms": [{ "roomTypeId": "DBL", "quantity": 1, "ratePerNight": "100.10" }]
        }"#;
        let record = Record::from_json(RecordKind::Internal, json)?;
        let reservation = record
            .downcast_ref::<internal::Reservation>()
            .ok_or_else(|| anyhow::anyhow!("expected internal reservation"))?;
        assert_eq!(reservation.rooms.len(), 1);
        assert_eq!(reservation.total_amount.to_string(), "500.50");

        let again = Record::from_json(RecordKind::Internal, &serde_json::to_string(&record)?)?;
        assert_eq!(again, record);
        Ok(())
    }
}
