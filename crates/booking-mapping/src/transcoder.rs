//! Transcoder contract
//!
//! [`Transcoder`] is the object-safe interface the registry dispatches to.
//! Concrete transcoders implement [`TypedTranscoder`] instead and receive the
//! erased implementation for free.

use booking_model::{Record, RecordKind, RecordType};

use crate::{Error, Result, TagPair};

/// A unit that converts records of one schema into another
pub trait Transcoder: Send + Sync {
    /// The tag pair this transcoder is bound to
    fn tag_pair(&self) -> &TagPair;

    /// Record kind accepted as input
    fn source_kind(&self) -> RecordKind;

    /// Record kind produced as output
    fn target_kind(&self) -> RecordKind;

    /// True iff both tags case-insensitively equal this transcoder's tags
    fn can_map(&self, source_tag: &str, target_tag: &str) -> bool {
        self.tag_pair().matches(source_tag, target_tag)
    }

    /// Convert an erased record
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPair`] for tags this transcoder does not
    /// claim, [`Error::TypeMismatch`] for a record of the wrong kind,
    /// [`Error::NullResult`] when the conversion yields nothing, and any error
    /// raised by the conversion itself.
    fn map(&self, source: &Record, source_tag: &str, target_tag: &str) -> Result<Record>;
}

/// Strongly typed conversion between two concrete record types
pub trait TypedTranscoder: Send + Sync {
    /// Concrete input type
    type Source: RecordType;

    /// Concrete output type
    type Target: RecordType;

    /// The tag pair this transcoder is bound to
    fn tags(&self) -> &TagPair;

    /// Convert a typed record
    ///
    /// `Ok(None)` means the conversion produced nothing, which the erased
    /// [`Transcoder::map`] reports as [`Error::NullResult`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullInput`] when `source` is `None`.
    fn typed_map(&self, source: Option<&Self::Source>) -> Result<Option<Self::Target>>;
}

impl<T: TypedTranscoder> Transcoder for T {
    fn tag_pair(&self) -> &TagPair {
        self.tags()
    }

    fn source_kind(&self) -> RecordKind {
        T::Source::KIND
    }

    fn target_kind(&self) -> RecordKind {
        T::Target::KIND
    }

    fn map(&self, source: &Record, source_tag: &str, target_tag: &str) -> Result<Record> {
        if !self.can_map(source_tag, target_tag) {
            return Err(Error::unsupported_pair(
                source_tag,
                target_tag,
                self.tags().clone(),
            ));
        }

        let typed = T::Source::from_record_ref(source).ok_or_else(|| {
            Error::type_mismatch(T::Source::KIND, source.kind(), source_tag, target_tag)
        })?;

        self.typed_map(Some(typed))?
            .map(RecordType::into_record)
            .ok_or_else(|| {
                let tags = self.tags();
                Error::null_result(tags.source.as_str(), tags.target.as_str())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use booking_model::{internal, partner};

    /// Copies the identifier only; returns nothing for the nil id
    struct IdOnly {
        tags: TagPair,
    }

    impl IdOnly {
        fn new() -> Self {
            Self {
                tags: TagPair::new("Test.Internal", "Test.Partner"),
            }
        }
    }

    impl TypedTranscoder for IdOnly {
        type Source = internal::Reservation;
        type Target = partner::Reservation;

        fn tags(&self) -> &TagPair {
            &self.tags
        }

        fn typed_map(&self, source: Option<&Self::Source>) -> Result<Option<Self::Target>> {
            let source = source.ok_or_else(|| Error::null_input("internal reservation"))?;
            if source.id.is_nil() {
                return Ok(None);
            }
            Ok(Some(partner::Reservation {
                id: Some(source.id.to_string()),
                ..partner::Reservation::default()
            }))
        }
    }

    fn internal_record(id: uuid::Uuid) -> Record {
        internal::Reservation::new(id, chrono::Utc::now()).into_record()
    }

    #[test]
    fn test_kinds_come_from_associated_types() {
        let transcoder = IdOnly::new();
        assert_eq!(transcoder.source_kind(), RecordKind::Internal);
        assert_eq!(transcoder.target_kind(), RecordKind::Partner);
    }

    #[test]
    fn test_map_converts_matching_record() {
        let id = uuid::Uuid::new_v4();
        let result = IdOnly::new()
            .map(&internal_record(id), "test.internal", "TEST.PARTNER")
            .unwrap();
        let partner = result.downcast_ref::<partner::Reservation>().unwrap();
        assert_eq!(partner.id, Some(id.to_string()));
    }

    #[test]
    fn test_map_rejects_unsupported_pair() {
        let error = IdOnly::new()
            .map(
                &internal_record(uuid::Uuid::new_v4()),
                "Test.Partner",
                "Test.Internal",
            )
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnsupportedPair);
        assert!(error.to_string().contains("'Test.Internal' -> 'Test.Partner'"));
    }

    #[test]
    fn test_map_rejects_wrong_record_type() {
        let record = partner::Reservation::default().into_record();
        let error = IdOnly::new()
            .map(&record, "Test.Internal", "Test.Partner")
            .unwrap_err();
        match error {
            Error::TypeMismatch {
                expected, found, ..
            } => {
                assert_eq!(expected, RecordKind::Internal);
                assert_eq!(found, RecordKind::Partner);
            }
            other => panic!("expected type mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_map_reports_missing_result() {
        let error = IdOnly::new()
            .map(
                &internal_record(uuid::Uuid::nil()),
                "Test.Internal",
                "Test.Partner",
            )
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NullResult);
        assert_eq!(error.tags(), Some(("Test.Internal", "Test.Partner")));
    }

    #[test]
    fn test_typed_map_rejects_missing_input() {
        let error = IdOnly::new().typed_map(None).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NullInput);
    }
}
