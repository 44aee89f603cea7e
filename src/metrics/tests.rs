//! Tests for the metric engine

use rstest::rstest;

use super::*;
use crate::model::EntityKind;
use crate::parser::{parse_declarations, parse_sequence};

/// Parse declarations and steps from one line list.
fn scenario(lines: &[&str]) -> (Vec<Entity>, Step) {
    let (entities, consumed) = parse_declarations(lines).expect("declarations");
    let head = parse_sequence(&lines[consumed..], &entities).expect("sequence");
    (entities, head)
}

const LOGIN: &[&str] = &[
    "actor u AS (User)",
    "participant s AS (System)",
    "u ->> s : login",
    "s -->> u : session token",
];

#[test]
fn test_login_scenario_metrics() {
    let (entities, head) = scenario(LOGIN);

    assert_eq!(count_entities(&entities, EntityFilter::ALL), 2);
    assert_eq!(count_entities(&entities, EntityFilter::ACTORS), 1);
    assert_eq!(count_entities(&entities, EntityFilter::EXPLICIT_ACTORS), 0);
    assert_eq!(count_interactions(&head, &entities, false), 2);
    assert_eq!(count_interactions(&head, &entities, true), 2);
    assert_eq!(count_consecutive_interactions(&head), 1);
}

#[test]
fn test_entity_filters() {
    let entities = vec![
        Entity::new("u", "User", EntityKind::Actor, false),
        Entity::new("admin", "Alice", EntityKind::Actor, true),
        Entity::new("s", "System", EntityKind::Participant, true),
        Entity::new("db", "Store", EntityKind::Participant, false),
    ];

    assert_eq!(count_entities(&entities, EntityFilter::ALL), 4);
    assert_eq!(count_entities(&entities, EntityFilter::ACTORS), 2);
    assert_eq!(count_entities(&entities, EntityFilter::EXPLICIT), 2);
    assert_eq!(count_entities(&entities, EntityFilter::EXPLICIT_ACTORS), 1);
    assert_eq!(EntityFilter::default(), EntityFilter::ALL);
}

#[test]
fn test_loop_continuation_uses_body_end() {
    let (_, head) = scenario(&[
        "participant a AS A",
        "participant b AS B",
        "participant c AS C",
        "a->>b:m1",
        "loop L",
        "b->>c:m2",
        "end",
        "c->>a:m3",
    ]);
    assert_eq!(count_consecutive_interactions(&head), 2);
}

#[test]
fn test_fork_continuation_uses_first_branch_only() {
    let declarations = ["participant a AS A", "participant b AS B", "participant c AS C"];

    // First branch ends at `c`, so `c ->> a` after the fork is consecutive.
    let mut lines = declarations.to_vec();
    lines.extend([
        "a ->> b : m0",
        "alt x",
        "b ->> c : m1",
        "else y",
        "b ->> a : m2",
        "end",
        "c ->> a : m3",
    ]);
    let (_, head) = scenario(&lines);
    assert_eq!(count_consecutive_interactions(&head), 3);

    // Same branches, swapped: the first branch now ends at `a`.
    let mut lines = declarations.to_vec();
    lines.extend([
        "a ->> b : m0",
        "alt y",
        "b ->> a : m2",
        "else x",
        "b ->> c : m1",
        "end",
        "c ->> a : m3",
    ]);
    let (_, head) = scenario(&lines);
    assert_eq!(count_consecutive_interactions(&head), 2);
}

#[test]
fn test_consecutive_context_enters_loop_body() {
    let (_, head) = scenario(&[
        "participant a AS A",
        "participant b AS B",
        "loop poll",
        "a ->> b : ask",
        "b ->> a : answer",
        "end",
    ]);
    // No context before the loop; inside, `answer` follows `ask`.
    assert_eq!(count_consecutive_interactions(&head), 1);
    assert_eq!(count_consecutive_from(&head, Some(EntityIdx::new(0))), 2);
}

#[test]
fn test_consecutive_after_loop_ending_in_fork() {
    let (_, head) = scenario(&[
        "participant a AS A",
        "participant b AS B",
        "participant c AS C",
        "loop L",
        "a ->> b : m1",
        "alt first",
        "b ->> c : m2",
        "else second",
        "b ->> a : m3",
        "end",
        "end",
        "c ->> a : m4",
    ]);
    // m2 and m3 each follow m1; m4 follows the first branch's `c`.
    assert_eq!(count_consecutive_interactions(&head), 3);
}

#[test]
fn test_nested_interactions_are_counted() {
    let (entities, head) = scenario(&[
        "actor u AS User",
        "participant s AS (System)",
        "participant db AS (Database)",
        "u ->> s : request",
        "loop for each item",
        "s ->> db : lookup",
        "alt found",
        "db -->> s : record",
        "else missing",
        "db -->> s : nothing",
        "s ->> u : ask again",
        "end",
        "end",
        "s -->> u : response",
    ]);

    assert_eq!(count_interactions(&head, &entities, false), 6);
    // request, ask again, response
    assert_eq!(count_interactions(&head, &entities, true), 3);
}

#[rstest]
#[case(&["actor a AS A", "actor b AS B", "a ->> b : talk"], 1, 0)]
#[case(&["participant a AS A", "participant b AS B", "a ->> b : call"], 1, 0)]
#[case(&["actor a AS A", "participant b AS B", "a ->> b : use"], 1, 1)]
#[case(&["actor a AS A", "participant b AS B", "b -->> a : reply"], 1, 1)]
fn test_user_level_filter(#[case] lines: &[&str], #[case] all: usize, #[case] user_level: usize) {
    let (entities, head) = scenario(lines);
    assert_eq!(count_interactions(&head, &entities, false), all);
    assert_eq!(count_interactions(&head, &entities, true), user_level);
}

#[rstest]
#[case(1)]
#[case(5)]
#[case(40)]
fn test_flat_count_equals_line_count(#[case] n: usize) {
    let entities = vec![
        Entity::new("a", "A", EntityKind::Actor, true),
        Entity::new("b", "B", EntityKind::Participant, true),
    ];
    let lines: Vec<String> = (0..n)
        .map(|i| if i % 2 == 0 { format!("a ->> b : m{i}") } else { format!("b -->> a : m{i}") })
        .collect();
    let head = parse_sequence(&lines, &entities).expect("parse");

    assert_eq!(count_interactions(&head, &entities, false), n);
    assert!(count_interactions(&head, &entities, true) <= n);
    assert_eq!(count_consecutive_interactions(&head), n - 1);
}

#[test]
fn test_metrics_are_deterministic() {
    let (entities, first) = scenario(LOGIN);
    let (_, second) = scenario(LOGIN);
    assert_eq!(
        count_consecutive_interactions(&first),
        count_consecutive_interactions(&second)
    );
    assert_eq!(
        count_interactions(&first, &entities, true),
        count_interactions(&second, &entities, true)
    );
}
