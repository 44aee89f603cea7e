//! Scenario layer tests
//!
//! End-to-end tests from scenario documents to metrics:
//! - Metric values for representative scenarios
//! - Corpus loading with failing scenarios
//! - CSV reports

mod tests_corpus;
mod tests_metrics;
