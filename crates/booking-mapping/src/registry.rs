//! Transcoder registry and dispatcher
//!
//! The registry is assembled once and never mutated afterwards, so a shared
//! reference (or an `Arc`) can be used from many threads without locking.
//!
//! Resolution is first match wins in registration order. Registering two
//! transcoders for the same tag pair leaves the second one unreachable;
//! keeping pairs unique is the caller's responsibility.

use std::fmt;
use std::sync::Arc;

use booking_model::{Record, RecordType};
use tracing::{debug, error};

use crate::{
    Clock, Error, InternalToPartnerTranscoder, PartnerToInternalTranscoder, Result, Transcoder,
};

/// Ordered, frozen collection of transcoders
pub struct TranscoderRegistry {
    transcoders: Vec<Box<dyn Transcoder>>,
}

impl TranscoderRegistry {
    /// Create a registry from an externally assembled collection
    pub fn new(transcoders: Vec<Box<dyn Transcoder>>) -> Self {
        Self { transcoders }
    }

    /// Start assembling a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry holding the two reservation transcoders
    pub fn standard() -> Self {
        Self::builder()
            .register(InternalToPartnerTranscoder::new())
            .register(PartnerToInternalTranscoder::new())
            .build()
    }

    /// Registry holding the two reservation transcoders, with a custom clock
    pub fn standard_with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::builder()
            .register(InternalToPartnerTranscoder::new())
            .register(PartnerToInternalTranscoder::with_clock(clock))
            .build()
    }

    /// First registered transcoder claiming the tag pair
    pub fn resolve(&self, source_tag: &str, target_tag: &str) -> Option<&dyn Transcoder> {
        self.transcoders
            .iter()
            .find(|transcoder| transcoder.can_map(source_tag, target_tag))
            .map(|transcoder| &**transcoder)
    }

    /// Map a record between the schemas named by the tags
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for missing data or blank tags,
    /// [`Error::MappingNotFound`] when no transcoder claims the pair, any
    /// domain error raised by the transcoder unchanged, and
    /// [`Error::MappingFailed`] wrapping any other failure.
    pub fn map(&self, data: Option<&Record>, source_tag: &str, target_tag: &str) -> Result<Record> {
        let data = validate_inputs(data, source_tag, target_tag)?;

        debug!(source_tag, target_tag, "Mapping request");

        let Some(transcoder) = self.resolve(source_tag, target_tag) else {
            error!(source_tag, target_tag, "No transcoder found");
            return Err(Error::mapping_not_found(source_tag, target_tag));
        };

        match transcoder.map(data, source_tag, target_tag) {
            Ok(result) => {
                debug!(source_tag, target_tag, "Mapping succeeded");
                Ok(result)
            }
            Err(err) if err.is_domain() => Err(err),
            Err(err) => {
                error!(source_tag, target_tag, error = %err, "Transcoder failed");
                Err(Error::mapping_failed(source_tag, target_tag, err))
            }
        }
    }

    /// Map a record and take the result as a concrete type
    ///
    /// # Errors
    ///
    /// Everything [`TranscoderRegistry::map`] returns, plus
    /// [`Error::ResultTypeMismatch`] when the result is not a `T`.
    pub fn map_typed<T: RecordType>(
        &self,
        data: Option<&Record>,
        source_tag: &str,
        target_tag: &str,
    ) -> Result<T> {
        let result = self.map(data, source_tag, target_tag)?;
        T::try_from_record(result).map_err(|other| Error::result_type_mismatch(T::KIND, other.kind()))
    }

    /// Registered transcoders in resolution order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Transcoder> {
        self.transcoders.iter().map(|transcoder| &**transcoder)
    }

    /// Number of registered transcoders
    pub fn len(&self) -> usize {
        self.transcoders.len()
    }

    /// Whether no transcoder is registered
    pub fn is_empty(&self) -> bool {
        self.transcoders.is_empty()
    }
}

fn validate_inputs<'a>(
    data: Option<&'a Record>,
    source_tag: &str,
    target_tag: &str,
) -> Result<&'a Record> {
    let data = data.ok_or_else(|| Error::invalid_argument("data", "no record supplied"))?;

    if source_tag.trim().is_empty() {
        return Err(Error::invalid_argument(
            "source_tag",
            "source type cannot be empty",
        ));
    }

    if target_tag.trim().is_empty() {
        return Err(Error::invalid_argument(
            "target_tag",
            "target type cannot be empty",
        ));
    }

    Ok(data)
}

impl fmt::Debug for TranscoderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranscoderRegistry")
            .field(
                "transcoders",
                &self
                    .iter()
                    .map(|transcoder| transcoder.tag_pair().to_string())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Default for TranscoderRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Collects transcoders in registration order
#[derive(Default)]
pub struct RegistryBuilder {
    transcoders: Vec<Box<dyn Transcoder>>,
}

impl RegistryBuilder {
    /// Append a transcoder
    #[must_use]
    pub fn register(mut self, transcoder: impl Transcoder + 'static) -> Self {
        self.transcoders.push(Box::new(transcoder));
        self
    }

    /// Freeze the collection
    pub fn build(self) -> TranscoderRegistry {
        TranscoderRegistry::new(self.transcoders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, SchemaTag};
    use booking_model::{internal, partner};

    fn internal_record() -> Record {
        internal::Reservation::new(uuid::Uuid::new_v4(), chrono::Utc::now()).into_record()
    }

    #[test]
    fn test_standard_registry_order() {
        let registry = TranscoderRegistry::standard();
        assert_eq!(registry.len(), 2);
        let pairs: Vec<_> = registry.iter().map(|t| t.tag_pair().clone()).collect();
        assert_eq!(pairs[0].source, SchemaTag::INTERNAL_RESERVATION);
        assert_eq!(pairs[1].source, SchemaTag::PARTNER_RESERVATION);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let registry = TranscoderRegistry::standard();
        let transcoder = registry
            .resolve("GOOGLE.RESERVATION", "model.reservation")
            .expect("partner transcoder");
        assert_eq!(transcoder.source_kind(), booking_model::RecordKind::Partner);
        assert!(registry.resolve("Model.Reservation", "Model.Reservation").is_none());
    }

    #[test]
    fn test_missing_data_is_invalid() {
        let error = TranscoderRegistry::standard()
            .map(None, "Model.Reservation", "Google.Reservation")
            .unwrap_err();
        assert!(matches!(
            error,
            Error::InvalidArgument {
                argument: "data",
                ..
            }
        ));
    }

    #[test]
    fn test_blank_tags_are_invalid() {
        let registry = TranscoderRegistry::standard();
        let record = internal_record();

        let error = registry
            .map(Some(&record), "   ", "Google.Reservation")
            .unwrap_err();
        assert!(matches!(
            error,
            Error::InvalidArgument {
                argument: "source_tag",
                ..
            }
        ));

        let error = registry
            .map(Some(&record), "Model.Reservation", "")
            .unwrap_err();
        assert!(matches!(
            error,
            Error::InvalidArgument {
                argument: "target_tag",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_pair_is_not_found() {
        let record = internal_record();
        let error = TranscoderRegistry::standard()
            .map(Some(&record), "Model.Reservation", "Booking.Reservation")
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MappingNotFound);
        assert_eq!(
            error.tags(),
            Some(("Model.Reservation", "Booking.Reservation"))
        );
    }

    #[test]
    fn test_empty_registry_finds_nothing() {
        let registry = TranscoderRegistry::builder().build();
        assert!(registry.is_empty());
        let record = internal_record();
        let error = registry
            .map(Some(&record), "Model.Reservation", "Google.Reservation")
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MappingNotFound);
    }

    #[test]
    fn test_type_mismatch_propagates_unchanged() {
        let record = partner::Reservation::default().into_record();
        let error = TranscoderRegistry::standard()
            .map(Some(&record), "Model.Reservation", "Google.Reservation")
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_parse_failure_is_wrapped() {
        let record = partner::Reservation {
            check_in: Some("not a date".to_string()),
            ..partner::Reservation::default()
        }
        .into_record();

        let error = TranscoderRegistry::standard()
            .map(Some(&record), "Google.Reservation", "Model.Reservation")
            .unwrap_err();
        match error {
            Error::MappingFailed {
                source_tag,
                target_tag,
                cause,
            } => {
                assert_eq!(source_tag, "Google.Reservation");
                assert_eq!(target_tag, "Model.Reservation");
                assert_eq!(cause.kind(), ErrorKind::Parse);
            }
            other => panic!("expected wrapped failure, got {other:?}"),
        }
    }

    #[test]
    fn test_map_typed_checks_result_type() {
        let registry = TranscoderRegistry::standard();
        let record = internal_record();

        let partner: partner::Reservation = registry
            .map_typed(Some(&record), "Model.Reservation", "Google.Reservation")
            .unwrap();
        assert!(partner.id.is_some());

        let error = registry
            .map_typed::<internal::Reservation>(
                Some(&record),
                "Model.Reservation",
                "Google.Reservation",
            )
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ResultTypeMismatch);
    }

    #[test]
    fn test_debug_lists_pairs() {
        let debug = format!("{:?}", TranscoderRegistry::standard());
        assert!(debug.contains("'Model.Reservation' -> 'Google.Reservation'"));
        assert!(debug.contains("'Google.Reservation' -> 'Model.Reservation'"));
    }
}
