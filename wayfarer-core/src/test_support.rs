//! Fixtures shared by unit, behaviour, and benchmark code.

use crate::{
    Dimension, InvalidInputError, MatchScore, MatchScorer, PlaceAttributes, UserPreferences,
};

/// Build a place from values listed in canonical dimension order.
#[must_use]
pub fn place_from_values(id: &str, values: [f32; 6]) -> PlaceAttributes {
    Dimension::ALL
        .into_iter()
        .zip(values)
        .fold(PlaceAttributes::new(id), |place, (dimension, value)| {
            place.with_value(dimension, value)
        })
}

/// Build preferences from values listed in canonical dimension order.
#[must_use]
pub fn preferences_from_values(values: [f32; 6]) -> UserPreferences {
    Dimension::ALL
        .into_iter()
        .zip(values)
        .fold(UserPreferences::new(), |preferences, (dimension, value)| {
            preferences.with_value(dimension, value)
        })
}

/// Scorer that counts how often it is invoked.
///
/// Delegates to [`crate::calculate_match`]; used to observe memoisation.
#[derive(Debug, Default)]
pub struct CountingMatcher {
    calls: std::sync::atomic::AtomicUsize,
}

impl CountingMatcher {
    /// Return the number of `score` invocations so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl MatchScorer for CountingMatcher {
    fn score(
        &self,
        preferences: &UserPreferences,
        place: &PlaceAttributes,
    ) -> Result<MatchScore, InvalidInputError> {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        crate::calculate_match(preferences, place)
    }
}
