//! Ranking utilities for Wayfarer places.
//!
//! The crate provides three complementary capabilities:
//! - **Record loading** reads preference and place exports produced by the
//!   hosted data store, either as bare JSON arrays or as paginated list
//!   responses, and converts each record through a [`FieldMapping`].
//! - **Memoised scoring** wraps any [`MatchScorer`](wayfarer_core::MatchScorer)
//!   in a bounded [`MemoizedMatcher`] so repeated rankings of the same
//!   preference snapshot do not recompute matches.
//! - **Ranking** scores, filters, sorts, and paginates a list of places into
//!   a [`RankedPage`].
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use wayfarer_core::LinearMatcher;
//! use wayfarer_ranker::{
//!     DEFAULT_CACHE_CAPACITY, FieldMapping, MemoizedMatcher, RankOptions, load_places,
//!     load_preferences, rank_places,
//! };
//!
//! let mapping = FieldMapping::default();
//! let preferences = load_preferences(Utf8Path::new("exports/preferences.json"), &mapping)
//!     .expect("load preferences");
//! let places = load_places(Utf8Path::new("exports/places.json"), &mapping).expect("load places");
//! let matcher = MemoizedMatcher::new(LinearMatcher, DEFAULT_CACHE_CAPACITY);
//! let page = rank_places(&matcher, &preferences, &places, RankOptions::default())
//!     .expect("rank places");
//! println!("{} places match", page.total_items);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cache;
mod error;
mod loader;
mod rank;
mod record;

pub use cache::{DEFAULT_CACHE_CAPACITY, MemoizedMatcher};
pub use error::{LoadError, RankError, RecordError};
pub use loader::{load_place, load_places, load_preferences};
pub use rank::{
    DEFAULT_PER_PAGE, InvalidPlacePolicy, MAX_PER_PAGE, RankOptions, RankedPage, RankedPlace,
    rank_places,
};
pub use record::{FieldMapping, place_from_record, preferences_from_record};
