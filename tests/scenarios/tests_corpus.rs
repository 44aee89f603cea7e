//! Corpus loading and reports.

use scenario::project::loader::collect_scenario_paths;
use scenario::project::{LoadError, LoaderConfig, Report, ScenarioKey, load_corpus, load_scenario};

use crate::helpers::corpus::{corpus, write_file};
use crate::helpers::source_fixtures::*;

#[test]
fn test_collect_scenario_paths() {
    let dir = corpus(&[
        ("REQ-0002", "uc1.md", LOGIN),
        ("REQ-0001", "uc2.md", LOGIN),
        ("REQ-0001", "uc1.md", LOGIN),
        ("REQ-0001", "notes.txt", "not a scenario"),
    ]);
    std::fs::write(dir.path().join("README.md"), "top-level file").expect("write");

    let paths = collect_scenario_paths(dir.path(), "md").expect("collect");
    let keys: Vec<_> = paths.iter().map(|(key, _)| key.to_string()).collect();
    assert_eq!(keys, vec!["REQ-0001/uc1", "REQ-0001/uc2", "REQ-0002/uc1"]);
}

#[test]
fn test_ucid_stops_at_first_dot() {
    let dir = corpus(&[("REQ-0001", "uc3.draft.md", LOGIN)]);
    let paths = collect_scenario_paths(dir.path(), "md").expect("collect");
    assert_eq!(paths[0].0, ScenarioKey::new("REQ-0001", "uc3"));
}

#[test]
fn test_load_corpus_skips_failing_scenarios() {
    let dir = corpus(&[
        ("REQ-0001", "uc1.md", LOGIN),
        ("REQ-0001", "uc2.md", UNKNOWN_ENTITY),
        ("REQ-0002", "uc1.md", CHECKOUT),
        ("REQ-0002", "uc2.md", UNTERMINATED_LOOP),
    ]);

    let corpus = load_corpus(dir.path(), &LoaderConfig::default()).expect("load");
    assert_eq!(corpus.len(), 2);
    let loaded: Vec<_> = corpus.scenarios.iter().map(|s| s.key().to_string()).collect();
    assert_eq!(loaded, vec!["REQ-0001/uc1", "REQ-0002/uc1"]);

    let failed: Vec<_> = corpus.failures.iter().map(|(key, _)| key.to_string()).collect();
    assert_eq!(failed, vec!["REQ-0001/uc2", "REQ-0002/uc2"]);
    assert!(corpus.failures.iter().all(|(_, err)| err.is_parse_error()));
}

#[test]
fn test_report_from_corpus() {
    let dir = corpus(&[
        ("REQ-0002", "uc1.md", CHECKOUT),
        ("REQ-0001", "uc1.md", LOGIN),
    ]);
    let corpus = load_corpus(dir.path(), &LoaderConfig::default()).expect("load");

    let csv = Report::from_scenarios(&corpus.scenarios).to_csv_string();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "req,ucid,entities,actors,actors_explicit,interactions,pureinteractions,consecutive",
            "REQ-0001,uc1,2,1,0,2,2,1",
            "REQ-0002,uc1,4,2,1,7,3,5",
        ]
    );
}

#[test]
fn test_load_single_scenario() {
    let dir = corpus(&[("REQ-0001", "uc1.md", LOOP_CONTINUATION)]);
    let scenario = load_scenario(dir.path(), "REQ-0001", "uc1", &LoaderConfig::default()).expect("load");
    assert_eq!(scenario.consecutive_interaction_count(), 2);

    let missing = load_scenario(dir.path(), "REQ-0001", "uc9", &LoaderConfig::default()).unwrap_err();
    assert!(matches!(missing, LoadError::NotFound(_)));
}

#[test]
fn test_custom_extension() {
    let dir = corpus(&[("REQ-0001", "uc1.mmd", LOGIN)]);
    write_file(dir.path(), "REQ-0001", "uc2.md", LOGIN);

    let config = LoaderConfig {
        extension: "mmd".to_string(),
        ..LoaderConfig::default()
    };
    let corpus = load_corpus(dir.path(), &config).expect("load");
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.scenarios[0].ucid(), "uc1");
}

#[test]
fn test_missing_corpus_root() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_corpus(dir.path().join("absent"), &LoaderConfig::default()).unwrap_err();
    assert!(matches!(err, LoadError::NotFound(_)));
}
