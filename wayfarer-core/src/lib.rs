//! Core domain types for the Wayfarer matching engine.
//!
//! A traveller describes what they want on six [`Dimension`]s; places are
//! measured on the same six axes. [`calculate_match`] compares the two
//! vectors and returns a [`MatchScore`] in `0.0..=100.0` together with a
//! per-dimension breakdown.
//!
//! Scoring never defaults a missing value: incomplete or non-numeric input
//! surfaces as an [`InvalidInputError`] so upstream data bugs stay visible.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod dimension;
pub mod error;
pub mod matcher;
pub mod place;
pub mod preferences;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
mod vector;

pub use dimension::Dimension;
pub use error::{InputSide, InvalidInputError};
pub use matcher::{LinearMatcher, MatchScore, MatchScorer, calculate_match, dimension_match};
pub use place::PlaceAttributes;
pub use preferences::UserPreferences;
pub use vector::{SCALE_MAX, SCALE_MIN, normalise};
