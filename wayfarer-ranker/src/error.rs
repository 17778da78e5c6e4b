//! Error types raised while loading records and ranking places.

use camino::Utf8PathBuf;
use thiserror::Error;
use wayfarer_core::{Dimension, InvalidInputError};

/// Errors raised while converting a loose JSON record into a typed vector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The record was not a JSON object.
    #[error("record must be a JSON object")]
    NotAnObject,
    /// A place record had no usable identifier.
    #[error("place record must carry a non-empty string `id`")]
    MissingId,
    /// A place record carried a `name` that is not a string.
    #[error("place record `name` must be a string")]
    InvalidName,
    /// A field mapping named an empty field.
    #[error("field name for dimension '{dimension}' must not be empty")]
    EmptyFieldName {
        /// Dimension whose mapping was empty.
        dimension: Dimension,
    },
    /// A dimension field held an unusable value.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

/// Errors raised while reading preference or place exports from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Opening the export failed.
    #[error("failed to open {path}")]
    Open {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The export was not valid JSON.
    #[error("failed to parse JSON in {path}")]
    Parse {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The document did not have the expected top-level shape.
    #[error("{path} must contain {expected}")]
    UnexpectedShape {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Description of the accepted shapes.
        expected: &'static str,
    },
    /// A single record could not be converted.
    #[error("record {index} in {path} is invalid")]
    Record {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Zero-based position of the record.
        index: usize,
        /// Conversion failure.
        #[source]
        source: RecordError,
    },
}

/// Errors raised while ranking a list of places.
#[derive(Debug, Error, PartialEq)]
pub enum RankError {
    /// Pages are numbered from one.
    #[error("page must be at least 1")]
    InvalidPage,
    /// The page size was zero or above the permitted maximum.
    #[error("per_page must be between 1 and {max}, got {per_page}")]
    InvalidPerPage {
        /// Requested page size.
        per_page: u32,
        /// Largest permitted page size.
        max: u32,
    },
    /// The minimum score filter was outside the score range.
    #[error("min_score must be a finite value between 0 and 100, got {min_score}")]
    InvalidMinScore {
        /// Requested threshold.
        min_score: f32,
    },
    /// The preference vector cannot be scored.
    #[error("preferences cannot be scored")]
    Preferences(#[source] InvalidInputError),
    /// A place cannot be scored and the policy requires failing.
    #[error("place {place_id} cannot be scored")]
    Place {
        /// Identifier of the offending place.
        place_id: String,
        /// Validation failure.
        #[source]
        source: InvalidInputError,
    },
}
