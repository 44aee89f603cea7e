//! Shared test helpers

pub mod corpus;
pub mod source_fixtures;
