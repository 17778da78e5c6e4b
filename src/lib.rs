//! Facade crate for the Wayfarer preference matcher.
//!
//! This crate re-exports the core matching types and, behind the `ranker`
//! feature, the loaders and ranking pipeline built on top of them.

#![forbid(unsafe_code)]

pub use wayfarer_core::{
    Dimension, InputSide, InvalidInputError, LinearMatcher, MatchScore, MatchScorer,
    PlaceAttributes, SCALE_MAX, SCALE_MIN, UserPreferences, calculate_match, dimension_match,
    normalise,
};

#[cfg(feature = "ranker")]
pub use wayfarer_ranker::{
    DEFAULT_CACHE_CAPACITY, FieldMapping, InvalidPlacePolicy, LoadError, MemoizedMatcher,
    RankError, RankOptions, RankedPage, RankedPlace, RecordError, load_place, load_places,
    load_preferences, rank_places,
};
