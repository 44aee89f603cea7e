//! A single use-case scenario.

use std::fmt;

use crate::base::constants::{DIAGRAM_HEADER, FENCE};
use crate::metrics::{
    EntityFilter, count_consecutive_interactions, count_entities, count_interactions,
};
use crate::model::{Entity, Step};
use crate::parser::{ParseError, ParserConfig, parse_declarations, parse_sequence_with};

use super::error::LoadError;
use super::report::ScenarioMetrics;

/// Identifies a scenario: requirement id plus use-case id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScenarioKey {
    /// Requirement id, e.g. `REQ-0001`.
    pub req: String,
    /// Use-case id, e.g. `uc1`.
    pub ucid: String,
}

impl ScenarioKey {
    pub fn new(req: impl Into<String>, ucid: impl Into<String>) -> Self {
        Self {
            req: req.into(),
            ucid: ucid.into(),
        }
    }
}

impl fmt::Display for ScenarioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.req, self.ucid)
    }
}

/// A parsed scenario: its declared entities and the head of its step chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    key: ScenarioKey,
    entities: Vec<Entity>,
    head: Option<Step>,
}

impl Scenario {
    /// Assemble a scenario from already parsed parts.
    pub fn new(key: ScenarioKey, entities: Vec<Entity>, head: Option<Step>) -> Self {
        Self {
            key,
            entities,
            head,
        }
    }

    /// Parse a scenario document with the default parser limits.
    ///
    /// `text` is the whole file; the diagram is taken from its first fenced
    /// block (or the whole text if there is no fence).
    pub fn parse(key: ScenarioKey, text: &str) -> Result<Self, LoadError> {
        Self::parse_with(key, text, &ParserConfig::default())
    }

    /// Parse a scenario document with explicit parser limits.
    ///
    /// Parse errors report line numbers of `text`, not of the diagram.
    pub fn parse_with(key: ScenarioKey, text: &str, config: &ParserConfig) -> Result<Self, LoadError> {
        let numbered = diagram_lines(text)?;
        let lines: Vec<&str> = numbered.iter().map(|&(_, line)| line).collect();
        // Map a line of the diagram back to its line in `text`.
        let relocate = |err: ParseError| {
            let offset = err.line_no().and_then(|line_no| {
                let &(source_line, _) = numbered.get(line_no.checked_sub(1)?)?;
                Some(source_line - line_no)
            });
            match offset {
                Some(offset) => err.shifted(offset),
                None => err,
            }
        };

        let (entities, consumed) = parse_declarations(&lines).map_err(relocate)?;
        let steps = &lines[consumed..];
        let head = if steps.is_empty() {
            None
        } else {
            let head = parse_sequence_with(steps, &entities, config)
                .map_err(|err| relocate(err.shifted(consumed)))?;
            Some(head)
        };

        tracing::debug!(
            "parsed scenario {key}: {} entities, {} top-level steps",
            entities.len(),
            head.as_ref().map_or(0, |head| head.iter().count())
        );
        Ok(Self::new(key, entities, head))
    }

    pub fn key(&self) -> &ScenarioKey {
        &self.key
    }

    pub fn req(&self) -> &str {
        &self.key.req
    }

    pub fn ucid(&self) -> &str {
        &self.key.ucid
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// First step, or `None` for a scenario that only declares entities.
    pub fn head(&self) -> Option<&Step> {
        self.head.as_ref()
    }

    pub fn entity_count(&self, filter: EntityFilter) -> usize {
        count_entities(&self.entities, filter)
    }

    pub fn interaction_count(&self, only_user_level: bool) -> usize {
        self.head
            .as_ref()
            .map_or(0, |head| count_interactions(head, &self.entities, only_user_level))
    }

    pub fn consecutive_interaction_count(&self) -> usize {
        self.head.as_ref().map_or(0, count_consecutive_interactions)
    }

    /// Snapshot of every metric for this scenario.
    pub fn metrics(&self) -> ScenarioMetrics {
        ScenarioMetrics::of(self)
    }
}

/// Extract the diagram lines of a scenario document.
///
/// Returns trimmed, non-blank lines with their 1-based line numbers in
/// `text`. Only the first fenced block is read; a leading
/// `sequenceDiagram` header is dropped.
pub fn diagram_lines(text: &str) -> Result<Vec<(usize, &str)>, LoadError> {
    let numbered: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .collect();

    let is_fence = |line: &str| line.starts_with(FENCE);
    let body = match numbered.iter().position(|&(_, line)| is_fence(line)) {
        Some(open) => {
            let close = numbered[open + 1..]
                .iter()
                .position(|&(_, line)| is_fence(line))
                .ok_or(LoadError::UnterminatedFence {
                    line_no: numbered[open].0,
                })?;
            &numbered[open + 1..open + 1 + close]
        }
        None => &numbered[..],
    };

    let mut lines = body.iter().copied().filter(|&(_, line)| !line.is_empty()).peekable();
    if lines.peek().is_some_and(|&(_, line)| line == DIAGRAM_HEADER) {
        lines.next();
    }
    Ok(lines.collect())
}
