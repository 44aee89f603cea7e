//! Scenario model: declared entities and the step chain.
//!
//! A parsed scenario is a list of [`Entity`] declarations plus the head of a
//! forward-linked chain of [`Step`]s. Loop bodies and fork branches are nested
//! chains of their own.
//!
//! ```text
//! Step ──successor──▶ Step ──successor──▶ Step
//!  │ Interaction       │ Loop               │ Fork
//!                      └─ body: Step ─▶ …   ├─ "c1": Step ─▶ …
//!                                           └─ "c2": Step ─▶ …
//! ```

mod entity;
mod step;

pub use entity::{Entity, EntityIdx, EntityKind};
pub use step::{Chain, Fork, Interaction, Loop, Step, StepKind};
