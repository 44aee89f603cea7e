//! Scenario documents, corpus loading and metric reports.
//!
//! A corpus is a directory of requirements, each holding one file per use
//! case: `<root>/<req>/<ucid>.md`. Each file carries one fenced sequence
//! diagram.

mod error;
pub mod loader;
pub mod report;
mod scenario;

pub use error::LoadError;
pub use loader::{Corpus, LoaderConfig, load_corpus, load_scenario};
pub use report::{Report, ReportRow, ScenarioMetrics};
pub use scenario::{Scenario, ScenarioKey, diagram_lines};
