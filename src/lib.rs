//! # scenario-metrics
//!
//! Parser and complexity metrics for use-case scenarios written as sequence
//! diagrams (actors, participants, message arrows, `loop` and `alt` blocks).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project  → Scenario documents, corpus loading, CSV/JSON reports
//!   ↓
//! metrics  → Entity, interaction and consecutive-interaction counts
//!   ↓
//! parser   → Declarations, block boundary scanner, recursive-descent parser
//!   ↓
//! model    → Entity, Step chain (Interaction | Loop | Fork)
//!   ↓
//! base     → Keywords, arrow markers, limits
//! ```
//!
//! ## Example
//!
//! ```
//! use scenario::project::{Scenario, ScenarioKey};
//!
//! let text = "\
//! actor u AS (User)
//! participant s AS (System)
//! u ->> s : login
//! s -->> u : session token
//! ";
//! let scenario = Scenario::parse(ScenarioKey::new("REQ-0001", "uc1"), text).unwrap();
//! let metrics = scenario.metrics();
//! assert_eq!(metrics.entities, 2);
//! assert_eq!(metrics.interactions, 2);
//! assert_eq!(metrics.consecutive_interactions, 1);
//! ```

// ============================================================================
// MODULES (dependency order: base → model → parser → metrics → project)
// ============================================================================

/// Foundation: keywords, markers, limits
pub mod base;

/// Scenario model: entities and step chains
pub mod model;

/// Parser: declarations, block scanner, sequence parser
pub mod parser;

/// Metric engine over parsed step chains
pub mod metrics;

/// Scenario documents, corpus loading, reports
pub mod project;

// Re-export commonly needed items
pub use base::Keyword;
pub use metrics::EntityFilter;
pub use model::{Entity, EntityKind, Step, StepKind};
pub use parser::{ParseError, ParserConfig, parse_sequence};
pub use project::{LoadError, Report, Scenario, ScenarioKey, ScenarioMetrics};
