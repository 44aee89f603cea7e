//! Metric values for whole scenario documents.

use rstest::rstest;
use scenario::project::{Scenario, ScenarioKey, ScenarioMetrics};
use scenario::{LoadError, ParseError};

use crate::helpers::source_fixtures::*;

fn parse(text: &str) -> Result<Scenario, LoadError> {
    Scenario::parse(ScenarioKey::new("REQ-0001", "uc1"), text)
}

#[rstest]
#[case(LOGIN, ScenarioMetrics {
    entities: 2,
    actors: 1,
    explicit: 0,
    actors_explicit: 0,
    interactions: 2,
    user_level_interactions: 2,
    consecutive_interactions: 1,
})]
#[case(LOOP_CONTINUATION, ScenarioMetrics {
    entities: 3,
    actors: 0,
    explicit: 3,
    actors_explicit: 0,
    interactions: 3,
    user_level_interactions: 0,
    consecutive_interactions: 2,
})]
#[case(CHECKOUT, ScenarioMetrics {
    entities: 4,
    actors: 2,
    explicit: 2,
    actors_explicit: 1,
    interactions: 7,
    user_level_interactions: 3,
    consecutive_interactions: 5,
})]
fn test_scenario_metrics(#[case] text: &str, #[case] expected: ScenarioMetrics) {
    let scenario = parse(text).expect("scenario parses");
    assert_eq!(scenario.metrics(), expected);
}

#[rstest]
#[case(LOGIN)]
#[case(LOOP_CONTINUATION)]
#[case(CHECKOUT)]
fn test_metric_invariants(#[case] text: &str) {
    let metrics = parse(text).expect("scenario parses").metrics();
    assert!(metrics.actors <= metrics.entities);
    assert!(metrics.explicit <= metrics.entities);
    assert!(metrics.actors_explicit <= metrics.actors.min(metrics.explicit));
    assert!(metrics.user_level_interactions <= metrics.interactions);
    assert!(metrics.consecutive_interactions <= metrics.interactions);
}

#[test]
fn test_parsing_twice_gives_identical_metrics() {
    let first = parse(CHECKOUT).expect("scenario parses");
    let second = parse(CHECKOUT).expect("scenario parses");
    assert_eq!(first, second);
    assert_eq!(first.metrics(), second.metrics());
}

#[test]
fn test_unknown_entity_points_at_document_line() {
    let err = parse(UNKNOWN_ENTITY).unwrap_err();
    assert!(
        matches!(
            &err,
            LoadError::Parse(ParseError::UnknownEntity { line_no: 5, id }) if id == "ghost"
        ),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_unterminated_loop() {
    let err = parse(UNTERMINATED_LOOP).unwrap_err();
    assert!(err.is_parse_error());
    assert_eq!(
        err.to_string(),
        "Parse error: unterminated 'loop' block opened on line 6: missing 'end'"
    );
}
