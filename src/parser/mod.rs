//! Recursive-descent parser for scenario diagrams
//!
//! Turns pre-split diagram lines into declared [`Entity`](crate::model::Entity)
//! values and a [`Step`](crate::model::Step) chain.
//!
//! ## Architecture
//!
//! ```text
//! Declaration lines ──▶ declaration::parse_entity ──▶ Vec<Entity>
//!                                                        │
//! Sequence lines ──▶ SequenceParser ◀────────────────────┘
//!                       │  ▲
//!                       ▼  │ nested bodies / branches
//!                    scanner (depth-counted `end` / `else` matching)
//!                       │
//!                       ▼
//!                    Step chain
//! ```
//!
//! Parsing is all-or-nothing: the first malformed line aborts the scenario
//! with a [`ParseError`] carrying its 1-based line number.

mod declaration;
mod error;
pub mod scanner;
mod sequence;

pub use declaration::{parse_declarations, parse_entity};
pub use error::ParseError;
pub use scanner::{find_block_end, find_branch_boundaries};
pub use sequence::{ParserConfig, parse_sequence, parse_sequence_with};
