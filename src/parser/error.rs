//! Error types for scenario parsing.

use thiserror::Error;

use crate::base::Keyword;

/// Errors that abort parsing of a single scenario.
///
/// Line numbers are 1-based and relative to the line sequence handed to the
/// parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Declaration without `<id> AS <name>`, or with an empty side.
    #[error(
        "malformed declaration on line {line_no}: {line} (expected '<actor|participant> <id> AS <name>')"
    )]
    MalformedDeclaration { line_no: usize, line: String },

    /// No depth-zero `end` before the input ran out.
    #[error("unterminated '{keyword}' block opened on line {line_no}: missing 'end'")]
    UnterminatedBlock { line_no: usize, keyword: Keyword },

    /// Interaction endpoint that matches no declared entity.
    #[error("unknown entity '{id}' on line {line_no}")]
    UnknownEntity { line_no: usize, id: String },

    /// Interaction endpoint that matches several declared entities.
    #[error("ambiguous entity '{id}' on line {line_no}: declared {count} times")]
    AmbiguousEntity {
        line_no: usize,
        id: String,
        count: usize,
    },

    /// Interaction without an arrow, a label separator or an endpoint.
    #[error(
        "malformed interaction on line {line_no}: {line} (expected '<from> ->> <to> : <label>' or '<from> -->> <to> : <label>')"
    )]
    MalformedInteraction { line_no: usize, line: String },

    /// `else`, `end` or a declaration where a step was expected.
    #[error("unexpected '{keyword}' on line {line_no}")]
    UnexpectedKeyword { line_no: usize, keyword: Keyword },

    /// Loop body or fork branch without any step.
    #[error("empty '{keyword}' section on line {line_no}: contains no steps")]
    EmptyBlock { line_no: usize, keyword: Keyword },

    /// Two branches of the same fork with identical condition text.
    ///
    /// The scenario is rejected instead of letting the later branch replace
    /// the earlier one, so every written branch is kept and counted.
    #[error("duplicate branch condition on line {line_no}: '{condition}'")]
    DuplicateBranch { line_no: usize, condition: String },

    /// Block nesting beyond the configured maximum.
    #[error("block nesting too deep on line {line_no}: max supported depth is {max_depth}")]
    NestingTooDeep { line_no: usize, max_depth: usize },

    /// No step lines at all.
    #[error("scenario contains no steps")]
    EmptySequence,
}

impl ParseError {
    /// Line the error points at, if any.
    pub fn line_no(&self) -> Option<usize> {
        match self {
            Self::MalformedDeclaration { line_no, .. }
            | Self::UnterminatedBlock { line_no, .. }
            | Self::UnknownEntity { line_no, .. }
            | Self::AmbiguousEntity { line_no, .. }
            | Self::MalformedInteraction { line_no, .. }
            | Self::UnexpectedKeyword { line_no, .. }
            | Self::EmptyBlock { line_no, .. }
            | Self::DuplicateBranch { line_no, .. }
            | Self::NestingTooDeep { line_no, .. } => Some(*line_no),
            Self::EmptySequence => None,
        }
    }

    /// Move the reported line down by `offset` lines.
    ///
    /// Used when an error raised on a sub-slice is reported against the
    /// enclosing sequence.
    pub fn shifted(mut self, offset: usize) -> Self {
        match &mut self {
            Self::MalformedDeclaration { line_no, .. }
            | Self::UnterminatedBlock { line_no, .. }
            | Self::UnknownEntity { line_no, .. }
            | Self::AmbiguousEntity { line_no, .. }
            | Self::MalformedInteraction { line_no, .. }
            | Self::UnexpectedKeyword { line_no, .. }
            | Self::EmptyBlock { line_no, .. }
            | Self::DuplicateBranch { line_no, .. }
            | Self::NestingTooDeep { line_no, .. } => *line_no += offset,
            Self::EmptySequence => {}
        }
        self
    }
}
