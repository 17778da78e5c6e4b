//! Match user preferences against place attributes.
//!
//! Each dimension contributes `100 - |preference - attribute|`, so a ten point
//! gap always costs exactly ten match points. The aggregate is the unweighted
//! mean of the six dimension matches.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::vector::{SCALE_MAX, SCALE_MIN};
use crate::{Dimension, InvalidInputError, PlaceAttributes, UserPreferences};

const DIMENSION_COUNT: f32 = 6.0;

/// Compatibility between a preference vector and a place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MatchScore {
    /// Aggregate score in `0.0..=100.0`.
    pub match_score: f32,
    /// Per-dimension matches in `0.0..=100.0`, one entry per dimension.
    pub attribute_matches: BTreeMap<Dimension, f32>,
}

impl MatchScore {
    /// Return the match for a single dimension.
    #[must_use]
    pub fn attribute_match(&self, dimension: Dimension) -> Option<f32> {
        self.attribute_matches.get(&dimension).copied()
    }
}

/// Score a place for a traveller.
///
/// Both vectors are clamped into `0.0..=100.0` before comparison.
///
/// # Errors
/// Returns [`InvalidInputError::MissingDimension`] when either vector lacks a
/// dimension and [`InvalidInputError::NonNumeric`] when a value is NaN or
/// infinite. No partial score is produced.
///
/// # Examples
/// ```
/// use wayfarer_core::{PlaceAttributes, UserPreferences, calculate_match};
///
/// # fn main() -> Result<(), wayfarer_core::InvalidInputError> {
/// let preferences = UserPreferences::uniform(50.0);
/// let place = PlaceAttributes::uniform("reykjavik", 0.0);
/// let score = calculate_match(&preferences, &place)?;
/// assert_eq!(score.match_score, 50.0);
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the aggregate is the arithmetic mean of dimension matches"
)]
pub fn calculate_match(
    preferences: &UserPreferences,
    place: &PlaceAttributes,
) -> Result<MatchScore, InvalidInputError> {
    let mut attribute_matches = BTreeMap::new();
    let mut total = 0.0_f32;
    for dimension in Dimension::ALL {
        let preference = preferences.require(dimension)?;
        let attribute = place.require(dimension)?;
        let matched = dimension_match(preference, attribute);
        total += matched;
        attribute_matches.insert(dimension, matched);
    }

    Ok(MatchScore {
        match_score: (total / DIMENSION_COUNT).clamp(SCALE_MIN, SCALE_MAX),
        attribute_matches,
    })
}

/// Match a single preference against a single attribute.
///
/// Returns `100.0` for identical values and falls linearly to `0.0` when the
/// values sit at opposite ends of the scale.
#[expect(
    clippy::float_arithmetic,
    reason = "dimension matches are linear in the absolute difference"
)]
#[must_use]
pub fn dimension_match(preference: f32, attribute: f32) -> f32 {
    let gap = (preference - attribute).abs();
    (SCALE_MAX - gap).clamp(SCALE_MIN, SCALE_MAX)
}

/// Calculate a match score for a place.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a single scorer
/// can rank lists across threads. Implementations must:
/// - Produce finite aggregate and dimension scores.
/// - Keep every score within `0.0..=100.0`.
/// - Fail rather than default when an input dimension is unusable.
///
/// Use [`MatchScorer::sanitise`] to apply the range guards.
///
/// # Examples
///
/// ```rust
/// use wayfarer_core::{
///     InvalidInputError, LinearMatcher, MatchScore, MatchScorer, PlaceAttributes,
///     UserPreferences,
/// };
///
/// struct Pessimist;
///
/// impl MatchScorer for Pessimist {
///     fn score(
///         &self,
///         preferences: &UserPreferences,
///         place: &PlaceAttributes,
///     ) -> Result<MatchScore, InvalidInputError> {
///         let mut score = LinearMatcher.score(preferences, place)?;
///         score.match_score = Self::sanitise(score.match_score - 10.0);
///         Ok(score)
///     }
/// }
///
/// let preferences = UserPreferences::uniform(50.0);
/// let place = PlaceAttributes::uniform("bergen", 50.0);
/// assert_eq!(Pessimist.score(&preferences, &place).map(|s| s.match_score), Ok(90.0));
/// ```
pub trait MatchScorer: Send + Sync {
    /// Return the match between `preferences` and `place`.
    ///
    /// # Errors
    /// Returns [`InvalidInputError`] when either vector cannot be scored.
    fn score(
        &self,
        preferences: &UserPreferences,
        place: &PlaceAttributes,
    ) -> Result<MatchScore, InvalidInputError>;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=100.0`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return SCALE_MIN;
        }
        score.clamp(SCALE_MIN, SCALE_MAX)
    }
}

/// Equal-weight absolute-difference matcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearMatcher;

impl MatchScorer for LinearMatcher {
    fn score(
        &self,
        preferences: &UserPreferences,
        place: &PlaceAttributes,
    ) -> Result<MatchScore, InvalidInputError> {
        calculate_match(preferences, place)
    }
}

impl<S: MatchScorer + ?Sized> MatchScorer for &S {
    fn score(
        &self,
        preferences: &UserPreferences,
        place: &PlaceAttributes,
    ) -> Result<MatchScore, InvalidInputError> {
        (**self).score(preferences, place)
    }
}
