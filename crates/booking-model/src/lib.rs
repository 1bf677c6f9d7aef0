#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # booking-model
//!
//! Reservation record types for the two schemas handled by the transcoding
//! engine: the internal booking model and the partner-facing schema.
//!
//! The two families are deliberately kept apart. [`Record`] is the erased
//! value that crosses the dispatch boundary.

/// Internal booking model.
pub mod internal;
/// Partner-facing schema.
pub mod partner;
/// Erased record values and the downcast trait.
pub mod record;

/// Erased record plus its kind and downcast trait.
pub use record::{Record, RecordKind, RecordType};

use thiserror::Error;

/// Errors that can occur when working with records
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid JSON for {kind}: {source}")]
    Json {
        kind: RecordKind,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Build a JSON decoding error for the given record kind.
    pub fn json(kind: RecordKind, source: serde_json::Error) -> Self {
        Self::Json { kind, source }
    }
}

/// Crate-local result type for record operations.
pub type Result<T> = std::result::Result<T, Error>;
