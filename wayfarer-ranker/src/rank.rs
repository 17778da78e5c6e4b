//! Filter, sort, and paginate places by match score.
//!
//! Pagination mirrors the list conventions of the hosted data store: pages
//! are numbered from one and responses report `totalItems` and `totalPages`.

use std::str::FromStr;

use log::{debug, warn};
use serde::Serialize;
use wayfarer_core::{
    InputSide, MatchScore, MatchScorer, PlaceAttributes, SCALE_MAX, SCALE_MIN, UserPreferences,
};

use crate::RankError;

/// Page size used when none is requested.
pub const DEFAULT_PER_PAGE: u32 = 30;
/// Largest accepted page size.
pub const MAX_PER_PAGE: u32 = 500;

/// What to do with a place whose attributes cannot be scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidPlacePolicy {
    /// Abort ranking with the place's validation error.
    #[default]
    Fail,
    /// Log a warning, record the place id, and keep ranking.
    Skip,
}

impl FromStr for InvalidPlacePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "skip" => Ok(Self::Skip),
            _ => Err(format!("unknown invalid-place policy '{s}' (expected fail or skip)")),
        }
    }
}

/// Ranking request parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankOptions {
    /// One-based page number.
    pub page: u32,
    /// Number of places per page.
    pub per_page: u32,
    /// Drop places scoring below this threshold.
    pub min_score: Option<f32>,
    /// Handling of places that cannot be scored.
    pub on_invalid: InvalidPlacePolicy,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            min_score: None,
            on_invalid: InvalidPlacePolicy::Fail,
        }
    }
}

impl RankOptions {
    /// Validate the options and return a copy.
    ///
    /// # Errors
    /// Returns [`RankError::InvalidPage`] for page zero,
    /// [`RankError::InvalidPerPage`] for a page size outside
    /// `1..=MAX_PER_PAGE`, and [`RankError::InvalidMinScore`] for a
    /// threshold outside `0.0..=100.0`.
    pub fn validate(self) -> Result<Self, RankError> {
        if self.page == 0 {
            return Err(RankError::InvalidPage);
        }
        if !(1..=MAX_PER_PAGE).contains(&self.per_page) {
            return Err(RankError::InvalidPerPage {
                per_page: self.per_page,
                max: MAX_PER_PAGE,
            });
        }
        if let Some(min_score) = self.min_score {
            if !min_score.is_finite() || !(SCALE_MIN..=SCALE_MAX).contains(&min_score) {
                return Err(RankError::InvalidMinScore { min_score });
            }
        }
        Ok(self)
    }
}

/// A place together with its position in the full ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPlace {
    /// One-based position across all pages.
    pub rank: usize,
    /// Place identifier.
    pub id: String,
    /// Display name, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Match against the ranking preferences.
    #[serde(flatten)]
    pub score: MatchScore,
}

/// One page of ranked places.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPage {
    /// One-based page number.
    pub page: u32,
    /// Requested page size.
    pub per_page: u32,
    /// Places passing the score filter across all pages.
    pub total_items: usize,
    /// Number of pages needed for `total_items`.
    pub total_pages: usize,
    /// Places on this page, best first.
    pub items: Vec<RankedPlace>,
    /// Identifiers of places skipped as unscorable.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

/// Score, filter, sort, and paginate `places` for `preferences`.
///
/// Places are ordered by score descending with ties broken by id ascending,
/// so the ordering is stable across calls.
///
/// # Errors
/// Returns [`RankError`] when the options are invalid, when the preferences
/// cannot be scored, or when a place cannot be scored under
/// [`InvalidPlacePolicy::Fail`].
///
/// # Examples
/// ```
/// use wayfarer_core::{LinearMatcher, PlaceAttributes, UserPreferences};
/// use wayfarer_ranker::{RankOptions, rank_places};
///
/// # fn main() -> Result<(), wayfarer_ranker::RankError> {
/// let places = vec![
///     PlaceAttributes::uniform("far", 0.0),
///     PlaceAttributes::uniform("near", 45.0),
/// ];
/// let page = rank_places(
///     &LinearMatcher,
///     &UserPreferences::uniform(50.0),
///     &places,
///     RankOptions::default(),
/// )?;
/// assert_eq!(page.items.first().map(|item| item.id.as_str()), Some("near"));
/// # Ok(())
/// # }
/// ```
pub fn rank_places<S: MatchScorer + ?Sized>(
    scorer: &S,
    preferences: &UserPreferences,
    places: &[PlaceAttributes],
    options: RankOptions,
) -> Result<RankedPage, RankError> {
    let validated = options.validate()?;
    preferences.validate().map_err(RankError::Preferences)?;

    let mut skipped = Vec::new();
    let mut scored = Vec::with_capacity(places.len());
    for place in places {
        match scorer.score(preferences, place) {
            Ok(score) => scored.push((place, score)),
            Err(source) if source.side() == InputSide::Preferences => {
                return Err(RankError::Preferences(source));
            }
            Err(source) => match validated.on_invalid {
                InvalidPlacePolicy::Fail => {
                    return Err(RankError::Place {
                        place_id: place.id().to_owned(),
                        source,
                    });
                }
                InvalidPlacePolicy::Skip => {
                    warn!("skipping place {}: {source}", place.id());
                    skipped.push(place.id().to_owned());
                }
            },
        }
    }

    if let Some(min_score) = validated.min_score {
        scored.retain(|(_, score)| score.match_score >= min_score);
    }
    scored.sort_by(|(left_place, left), (right_place, right)| {
        right
            .match_score
            .total_cmp(&left.match_score)
            .then_with(|| left_place.id().cmp(right_place.id()))
    });

    let total_items = scored.len();
    let per_page = usize::try_from(validated.per_page).unwrap_or(usize::MAX);
    let total_pages = total_items.div_ceil(per_page);
    let offset = usize::try_from(validated.page.saturating_sub(1))
        .ok()
        .and_then(|page_index| page_index.checked_mul(per_page))
        .unwrap_or(usize::MAX);

    let items: Vec<RankedPlace> = scored
        .into_iter()
        .enumerate()
        .skip(offset)
        .take(per_page)
        .map(|(position, (place, score))| RankedPlace {
            rank: position.saturating_add(1),
            id: place.id().to_owned(),
            name: place.name().map(str::to_owned),
            score,
        })
        .collect();

    debug!(
        "ranked {total_items} of {} places; page {} holds {} ({} skipped)",
        places.len(),
        validated.page,
        items.len(),
        skipped.len()
    );

    Ok(RankedPage {
        page: validated.page,
        per_page: validated.per_page,
        total_items,
        total_pages,
        items,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use wayfarer_core::{Dimension, InvalidInputError, LinearMatcher};

    use crate::{DEFAULT_CACHE_CAPACITY, MemoizedMatcher};

    fn catalogue() -> Vec<PlaceAttributes> {
        vec![
            PlaceAttributes::uniform("c", 30.0),
            PlaceAttributes::uniform("a", 50.0).with_name("Alpha"),
            PlaceAttributes::uniform("b", 50.0),
            PlaceAttributes::uniform("d", 0.0),
        ]
    }

    #[rstest]
    #[case(RankOptions { page: 0, ..RankOptions::default() }, RankError::InvalidPage)]
    #[case(
        RankOptions { per_page: 0, ..RankOptions::default() },
        RankError::InvalidPerPage { per_page: 0, max: MAX_PER_PAGE }
    )]
    #[case(
        RankOptions { per_page: 501, ..RankOptions::default() },
        RankError::InvalidPerPage { per_page: 501, max: MAX_PER_PAGE }
    )]
    #[case(
        RankOptions { min_score: Some(101.0), ..RankOptions::default() },
        RankError::InvalidMinScore { min_score: 101.0 }
    )]
    fn invalid_options_are_rejected(#[case] options: RankOptions, #[case] expected: RankError) {
        assert_eq!(options.validate(), Err(expected));
    }

    #[rstest]
    fn ties_are_broken_by_id() {
        let page = rank_places(
            &LinearMatcher,
            &UserPreferences::uniform(50.0),
            &catalogue(),
            RankOptions::default(),
        )
        .expect("rank catalogue");

        let ids: Vec<&str> = page.items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
        let ranks: Vec<usize> = page.items.iter().map(|item| item.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert_eq!(page.items.first().and_then(|item| item.name.as_deref()), Some("Alpha"));
    }

    #[rstest]
    fn pagination_reports_totals_and_global_ranks() {
        let options = RankOptions {
            page: 2,
            per_page: 3,
            ..RankOptions::default()
        };

        let page = rank_places(&LinearMatcher, &UserPreferences::uniform(50.0), &catalogue(), options)
            .expect("rank catalogue");

        assert_eq!(page.total_items, 4);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items.first().map(|item| item.rank), Some(4));
    }

    #[rstest]
    fn pages_past_the_end_are_empty() {
        let options = RankOptions {
            page: 9,
            ..RankOptions::default()
        };

        let page = rank_places(&LinearMatcher, &UserPreferences::uniform(50.0), &catalogue(), options)
            .expect("rank catalogue");

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[rstest]
    fn min_score_filters_before_pagination() {
        let options = RankOptions {
            min_score: Some(80.0),
            ..RankOptions::default()
        };

        let page = rank_places(&LinearMatcher, &UserPreferences::uniform(50.0), &catalogue(), options)
            .expect("rank catalogue");

        assert_eq!(page.total_items, 3);
        assert!(page.items.iter().all(|item| item.score.match_score >= 80.0));
    }

    #[rstest]
    fn unscorable_place_fails_by_default() {
        let mut places = catalogue();
        places.push(PlaceAttributes::new("empty"));

        let err = rank_places(&LinearMatcher, &UserPreferences::uniform(50.0), &places, RankOptions::default())
            .expect_err("empty place must fail");

        assert_eq!(
            err,
            RankError::Place {
                place_id: "empty".to_owned(),
                source: InvalidInputError::MissingDimension {
                    side: InputSide::Place,
                    dimension: Dimension::Budget,
                },
            }
        );
    }

    #[rstest]
    fn skip_policy_records_unscorable_places() {
        let mut places = catalogue();
        places.push(PlaceAttributes::new("empty"));
        let options = RankOptions {
            on_invalid: InvalidPlacePolicy::Skip,
            ..RankOptions::default()
        };

        let page = rank_places(&LinearMatcher, &UserPreferences::uniform(50.0), &places, options)
            .expect("skip policy keeps ranking");

        assert_eq!(page.total_items, 4);
        assert_eq!(page.skipped, vec!["empty".to_owned()]);
    }

    #[rstest]
    fn incomplete_preferences_fail_regardless_of_policy() {
        let options = RankOptions {
            on_invalid: InvalidPlacePolicy::Skip,
            ..RankOptions::default()
        };

        let err = rank_places(&LinearMatcher, &UserPreferences::new(), &catalogue(), options)
            .expect_err("empty preferences must fail");

        assert!(matches!(err, RankError::Preferences(_)));
    }

    #[rstest]
    #[case("skip", InvalidPlacePolicy::Skip)]
    #[case("FAIL", InvalidPlacePolicy::Fail)]
    fn policy_parses_case_insensitively(#[case] raw: &str, #[case] expected: InvalidPlacePolicy) {
        assert_eq!(raw.parse::<InvalidPlacePolicy>(), Ok(expected));
    }

    #[rstest]
    #[case::nan(f32::NAN)]
    #[case::infinite(f32::INFINITY)]
    #[case::below_scale(-1.0)]
    #[case::above_scale(101.0)]
    fn out_of_range_min_scores_are_rejected(#[case] min_score: f32) {
        let options = RankOptions {
            min_score: Some(min_score),
            ..RankOptions::default()
        };

        let err = options.validate().expect_err("min score outside 0-100");

        assert!(matches!(err, RankError::InvalidMinScore { .. }), "found {err:?}");
    }

    #[rstest]
    #[case::lower_bound(0.0)]
    #[case::upper_bound(100.0)]
    fn boundary_min_scores_are_accepted(#[case] min_score: f32) {
        let options = RankOptions {
            min_score: Some(min_score),
            ..RankOptions::default()
        };

        assert_eq!(options.validate(), Ok(options));
    }

    #[rstest]
    fn repeated_ids_rank_the_same_with_and_without_memoisation() {
        let places = vec![
            PlaceAttributes::uniform("dup", 50.0),
            PlaceAttributes::uniform("dup", 0.0),
        ];
        let preferences = UserPreferences::uniform(50.0);
        let memoised = MemoizedMatcher::new(LinearMatcher, DEFAULT_CACHE_CAPACITY);

        let plain = rank_places(&LinearMatcher, &preferences, &places, RankOptions::default())
            .expect("rank catalogue");
        let cached = rank_places(&memoised, &preferences, &places, RankOptions::default())
            .expect("rank catalogue");

        let scores = |page: &RankedPage| -> Vec<f32> {
            page.items.iter().map(|item| item.score.match_score).collect()
        };
        assert_eq!(scores(&plain), vec![100.0, 50.0]);
        assert_eq!(scores(&cached), scores(&plain));
    }
}
