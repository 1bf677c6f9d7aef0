#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # booking-mapping
//!
//! Registry, transcoder contract and field transforms for converting
//! reservations between the internal booking model and the partner schema.
//!
//! A [`TranscoderRegistry`] routes a `(source tag, target tag)` pair to the
//! first registered [`Transcoder`] that claims it. Concrete transcoders are
//! written against [`TypedTranscoder`] and get tag checking, downcasting and
//! null handling from the blanket [`Transcoder`] implementation.

pub mod clock;
pub mod registry;
pub mod status;
pub mod tag;
pub mod transcoder;
pub mod transcoders;
pub mod transforms;

pub use clock::{Clock, FixedClock, SystemClock};
pub use registry::{RegistryBuilder, TranscoderRegistry};
pub use tag::{SchemaTag, TagPair};
pub use transcoder::{Transcoder, TypedTranscoder};
pub use transcoders::{InternalToPartnerTranscoder, PartnerToInternalTranscoder};

use booking_model::RecordKind;
use thiserror::Error;

/// Errors that can occur during mapping
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument {
        argument: &'static str,
        message: String,
    },

    #[error("No transcoder found for source type '{source_tag}' to target type '{target_tag}'")]
    MappingNotFound {
        source_tag: String,
        target_tag: String,
    },

    #[error(
        "This transcoder does not support mapping from '{source_tag}' to '{target_tag}'; it supports {supported}"
    )]
    UnsupportedPair {
        source_tag: String,
        target_tag: String,
        supported: TagPair,
    },

    #[error("Expected source of type '{expected}' but got '{found}' ({source_tag} -> {target_tag})")]
    TypeMismatch {
        expected: RecordKind,
        found: RecordKind,
        source_tag: String,
        target_tag: String,
    },

    #[error("No {expected} was supplied to the conversion")]
    NullInput { expected: &'static str },

    #[error("Mapping from '{source_tag}' to '{target_tag}' returned no value")]
    NullResult {
        source_tag: String,
        target_tag: String,
    },

    #[error("The transcoder returned '{found}' which cannot be taken as the requested '{expected}'")]
    ResultTypeMismatch {
        expected: RecordKind,
        found: RecordKind,
    },

    #[error("Error mapping from '{source_tag}' to '{target_tag}'")]
    MappingFailed {
        source_tag: String,
        target_tag: String,
        #[source]
        cause: Box<Error>,
    },

    #[error("Cannot parse {field} value '{value}': {cause}")]
    Parse {
        field: &'static str,
        value: String,
        #[source]
        cause: chrono::ParseError,
    },

    #[error("Transcoder failed")]
    Transcoder(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Discriminant of [`Error`], for callers that branch on the failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    MappingNotFound,
    UnsupportedPair,
    TypeMismatch,
    NullInput,
    NullResult,
    ResultTypeMismatch,
    MappingFailed,
    Parse,
    Transcoder,
}

impl Error {
    /// Create an invalid-argument error for a named dispatch argument.
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    /// Create a not-found error for a tag pair.
    pub fn mapping_not_found(source_tag: impl Into<String>, target_tag: impl Into<String>) -> Self {
        Self::MappingNotFound {
            source_tag: source_tag.into(),
            target_tag: target_tag.into(),
        }
    }

    /// Create an unsupported-pair error naming the pair the transcoder does support.
    pub fn unsupported_pair(
        source_tag: impl Into<String>,
        target_tag: impl Into<String>,
        supported: TagPair,
    ) -> Self {
        Self::UnsupportedPair {
            source_tag: source_tag.into(),
            target_tag: target_tag.into(),
            supported,
        }
    }

    /// Create a source type mismatch error.
    pub fn type_mismatch(
        expected: RecordKind,
        found: RecordKind,
        source_tag: impl Into<String>,
        target_tag: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            expected,
            found,
            source_tag: source_tag.into(),
            target_tag: target_tag.into(),
        }
    }

    /// Create a null-input error.
    pub fn null_input(expected: &'static str) -> Self {
        Self::NullInput { expected }
    }

    /// Create a null-result error.
    pub fn null_result(source_tag: impl Into<String>, target_tag: impl Into<String>) -> Self {
        Self::NullResult {
            source_tag: source_tag.into(),
            target_tag: target_tag.into(),
        }
    }

    /// Create a result type mismatch error.
    pub fn result_type_mismatch(expected: RecordKind, found: RecordKind) -> Self {
        Self::ResultTypeMismatch { expected, found }
    }

    /// Wrap an unexpected failure with the tags it happened under.
    pub fn mapping_failed(
        source_tag: impl Into<String>,
        target_tag: impl Into<String>,
        cause: Error,
    ) -> Self {
        Self::MappingFailed {
            source_tag: source_tag.into(),
            target_tag: target_tag.into(),
            cause: Box::new(cause),
        }
    }

    /// Create a parse error for a field value.
    pub fn parse(field: &'static str, value: impl Into<String>, cause: chrono::ParseError) -> Self {
        Self::Parse {
            field,
            value: value.into(),
            cause,
        }
    }

    /// Wrap a failure raised inside a transcoder implementation.
    pub fn transcoder(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transcoder(cause.into())
    }

    /// Failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::MappingNotFound { .. } => ErrorKind::MappingNotFound,
            Self::UnsupportedPair { .. } => ErrorKind::UnsupportedPair,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::NullInput { .. } => ErrorKind::NullInput,
            Self::NullResult { .. } => ErrorKind::NullResult,
            Self::ResultTypeMismatch { .. } => ErrorKind::ResultTypeMismatch,
            Self::MappingFailed { .. } => ErrorKind::MappingFailed,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Transcoder(_) => ErrorKind::Transcoder,
        }
    }

    /// Whether this is a mapping error raised by the dispatch machinery itself.
    ///
    /// Domain errors pass through the registry unchanged; anything else is
    /// wrapped in [`Error::MappingFailed`].
    pub fn is_domain(&self) -> bool {
        !matches!(self, Self::Parse { .. } | Self::Transcoder(_))
    }

    /// The source/target tags carried by this error, if any.
    pub fn tags(&self) -> Option<(&str, &str)> {
        match self {
            Self::MappingNotFound {
                source_tag,
                target_tag,
            }
            | Self::UnsupportedPair {
                source_tag,
                target_tag,
                ..
            }
            | Self::TypeMismatch {
                source_tag,
                target_tag,
                ..
            }
            | Self::NullResult {
                source_tag,
                target_tag,
            }
            | Self::MappingFailed {
                source_tag,
                target_tag,
                ..
            } => Some((source_tag, target_tag)),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
