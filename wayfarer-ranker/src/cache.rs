//! Memoised scoring keyed by preference snapshot and place contents.
//!
//! Ranking a list re-scores every place whenever the preferences change; the
//! cache avoids recomputing when the same snapshot is ranked again (for
//! example when a page is re-rendered). Results are identical with or
//! without the cache.

use log::trace;
use moka::sync::Cache;
use wayfarer_core::{
    Dimension, InvalidInputError, MatchScore, MatchScorer, PlaceAttributes, UserPreferences,
};

/// Number of results kept when no capacity is chosen.
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

/// Bit patterns of the six dimension values; `None` for unset dimensions.
type Fingerprint = [Option<u32>; 6];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    preferences: Fingerprint,
    place_id: String,
    place: Fingerprint,
}

impl CacheKey {
    fn new(preferences: &UserPreferences, place: &PlaceAttributes) -> Self {
        Self {
            preferences: Dimension::ALL
                .map(|dimension| preferences.value(dimension).map(f32::to_bits)),
            place_id: place.id().to_owned(),
            place: Dimension::ALL.map(|dimension| place.value(dimension).map(f32::to_bits)),
        }
    }
}

/// Scorer wrapper that memoises successful results in a bounded cache.
///
/// Entries are keyed by the preference values, the place id, and the place's
/// attribute values, so edited places and repeated ids never reuse a stale
/// score. Once `capacity` results are held, older or rarely used entries are
/// evicted.
///
/// # Examples
/// ```
/// use wayfarer_core::{LinearMatcher, MatchScorer, PlaceAttributes, UserPreferences};
/// use wayfarer_ranker::{DEFAULT_CACHE_CAPACITY, MemoizedMatcher};
///
/// let matcher = MemoizedMatcher::new(LinearMatcher, DEFAULT_CACHE_CAPACITY);
/// let preferences = UserPreferences::uniform(40.0);
/// let place = PlaceAttributes::uniform("ghent", 60.0);
///
/// let first = matcher.score(&preferences, &place);
/// let second = matcher.score(&preferences, &place);
/// assert_eq!(first, second);
/// assert_eq!(matcher.len(), 1);
/// ```
pub struct MemoizedMatcher<S> {
    inner: S,
    entries: Cache<CacheKey, MatchScore>,
}

impl<S> std::fmt::Debug for MemoizedMatcher<S>
where
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoizedMatcher")
            .field("inner", &self.inner)
            .field("capacity", &self.entries.policy().max_capacity())
            .finish_non_exhaustive()
    }
}

impl<S: MatchScorer> MemoizedMatcher<S> {
    /// Wrap `inner` with an empty cache holding at most `capacity` results.
    #[must_use]
    pub fn new(inner: S, capacity: u64) -> Self {
        Self {
            inner,
            entries: Cache::builder()
                .max_capacity(capacity)
                .support_invalidation_closures()
                .build(),
        }
    }

    /// Return the wrapped scorer.
    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Return the maximum number of cached results.
    #[must_use]
    pub fn capacity(&self) -> Option<u64> {
        self.entries.policy().max_capacity()
    }

    /// Return the number of cached results after applying pending evictions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.run_pending_tasks();
        usize::try_from(self.entries.entry_count()).unwrap_or(usize::MAX)
    }

    /// Report whether the cache holds no results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached result for `place_id`.
    pub fn invalidate_place(&self, place_id: &str) {
        let target = place_id.to_owned();
        if let Err(err) = self
            .entries
            .invalidate_entries_if(move |key, _| key.place_id == target)
        {
            trace!("falling back to a full cache clear: {err}");
            self.entries.invalidate_all();
        }
    }

    /// Drop every cached result.
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }
}

impl<S: MatchScorer> MatchScorer for MemoizedMatcher<S> {
    fn score(
        &self,
        preferences: &UserPreferences,
        place: &PlaceAttributes,
    ) -> Result<MatchScore, InvalidInputError> {
        let key = CacheKey::new(preferences, place);
        if let Some(hit) = self.entries.get(&key) {
            trace!("match cache hit for place {}", place.id());
            return Ok(hit);
        }
        let score = self.inner.score(preferences, place)?;
        self.entries.insert(key, score.clone());
        Ok(score)
    }
}
