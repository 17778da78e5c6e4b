//! Scenario coverage for `calculate_match`.

use rstest::rstest;
use wayfarer_core::test_support::{place_from_values, preferences_from_values};
use wayfarer_core::{
    Dimension, InputSide, InvalidInputError, LinearMatcher, MatchScorer, PlaceAttributes,
    UserPreferences, calculate_match,
};

const TOLERANCE: f32 = 1e-4;

#[rstest]
// Exact match on every dimension.
#[case([80.0, 20.0, 50.0, 50.0, 50.0, 50.0], [80.0, 20.0, 50.0, 50.0, 50.0, 50.0], 100.0)]
// Preferences all 50 against attributes all 0.
#[case([50.0; 6], [0.0; 6], 50.0)]
// Maximal divergence, in both directions.
#[case([0.0, 100.0, 0.0, 100.0, 0.0, 100.0], [100.0, 0.0, 100.0, 0.0, 100.0, 0.0], 0.0)]
// A single 60 point gap costs ten aggregate points.
#[case([60.0, 50.0, 50.0, 50.0, 50.0, 50.0], [0.0, 50.0, 50.0, 50.0, 50.0, 50.0], 90.0)]
// Out-of-range inputs are clamped before comparison.
#[case([105.0; 6], [100.0; 6], 100.0)]
#[case([-20.0; 6], [100.0; 6], 0.0)]
fn aggregate_scenarios(
    #[case] preferences: [f32; 6],
    #[case] attributes: [f32; 6],
    #[case] expected: f32,
) {
    let score = calculate_match(
        &preferences_from_values(preferences),
        &place_from_values("candidate", attributes),
    )
    .expect("complete inputs score");

    assert!(score.match_score.is_finite(), "score must be finite");
    assert!(
        (0.0..=100.0).contains(&score.match_score),
        "score must be within [0, 100]"
    );
    assert!((score.match_score - expected).abs() <= TOLERANCE);
}

#[rstest]
fn exact_match_reports_perfect_breakdown() {
    let values = [80.0, 20.0, 50.0, 50.0, 50.0, 50.0];
    let score = calculate_match(
        &preferences_from_values(values),
        &place_from_values("mirror", values),
    )
    .expect("complete inputs score");

    for dimension in Dimension::ALL {
        assert_eq!(score.attribute_match(dimension), Some(100.0));
    }
}

#[rstest]
fn half_way_breakdown_is_fifty_everywhere() {
    let score = calculate_match(
        &UserPreferences::uniform(50.0),
        &PlaceAttributes::uniform("flat", 0.0),
    )
    .expect("complete inputs score");

    assert!(score.attribute_matches.values().all(|&value| value == 50.0));
}

#[rstest]
#[case(Dimension::Budget)]
#[case(Dimension::TripLength)]
#[case(Dimension::Accessibility)]
fn missing_attribute_fails_without_score(#[case] missing: Dimension) {
    let mut place = PlaceAttributes::uniform("patchy", 50.0);
    place.clear_value(missing);

    let result = LinearMatcher.score(&UserPreferences::uniform(50.0), &place);

    assert_eq!(
        result,
        Err(InvalidInputError::MissingDimension {
            side: InputSide::Place,
            dimension: missing,
        })
    );
}

#[rstest]
fn non_finite_preference_is_rejected() {
    let preferences = UserPreferences::uniform(50.0).with_value(Dimension::Season, f32::NAN);

    let err = calculate_match(&preferences, &PlaceAttributes::uniform("any", 50.0))
        .expect_err("nan preference must fail");

    assert_eq!(
        err,
        InvalidInputError::NonNumeric {
            side: InputSide::Preferences,
            dimension: Dimension::Season,
        }
    );
}

#[rstest]
fn match_score_serialises_with_camel_case_keys() {
    let score = calculate_match(
        &UserPreferences::uniform(50.0),
        &PlaceAttributes::uniform("json", 50.0),
    )
    .expect("complete inputs score");

    let value = serde_json::to_value(&score).expect("serialise match score");

    assert_eq!(value["matchScore"], serde_json::json!(100.0));
    assert_eq!(value["attributeMatches"]["tripLength"], serde_json::json!(100.0));
}
