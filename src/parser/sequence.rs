//! Step chain construction.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::base::Keyword;
use crate::base::constants::{
    CALL_ARROW, COMPACT_LABEL_SEPARATOR, DEFAULT_MAX_NESTING_DEPTH, LABEL_SEPARATOR, RETURN_ARROW,
};
use crate::model::{Entity, EntityIdx, Fork, Step, StepKind};

use super::error::ParseError;
use super::scanner::{find_block_end, find_branch_boundaries};

/// Parser limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest allowed `loop`/`alt` nesting. `0` rejects every block.
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// Parse a scenario's step lines into a chain, using the default limits.
///
/// `lines` must be trimmed, non-empty and start after the declarations.
/// Every interaction endpoint must name exactly one of `entities`.
///
/// # Example
/// ```
/// use scenario::model::{Entity, EntityKind, StepKind};
/// use scenario::parser::parse_sequence;
///
/// let entities = [
///     Entity::new("u", "User", EntityKind::Actor, false),
///     Entity::new("s", "System", EntityKind::Participant, false),
/// ];
/// let head = parse_sequence(&["u ->> s : login", "s -->> u : token"], &entities).unwrap();
/// assert!(matches!(head.kind(), StepKind::Interaction(i) if i.label == "login"));
/// assert_eq!(head.iter().count(), 2);
/// ```
pub fn parse_sequence<S: AsRef<str>>(lines: &[S], entities: &[Entity]) -> Result<Step, ParseError> {
    parse_sequence_with(lines, entities, &ParserConfig::default())
}

/// Parse a scenario's step lines into a chain with explicit limits.
pub fn parse_sequence_with<S: AsRef<str>>(
    lines: &[S],
    entities: &[Entity],
    config: &ParserConfig,
) -> Result<Step, ParseError> {
    let parser = SequenceParser {
        lines,
        entities: EntityIndex::new(entities),
        config,
    };
    parser
        .parse_chain(0, lines.len(), 0)?
        .ok_or(ParseError::EmptySequence)
}

/// Declared entities by identifier, with a count to detect duplicates.
struct EntityIndex<'a> {
    by_id: FxHashMap<&'a str, (EntityIdx, usize)>,
}

impl<'a> EntityIndex<'a> {
    fn new(entities: &'a [Entity]) -> Self {
        let mut by_id = FxHashMap::default();
        for (i, entity) in entities.iter().enumerate() {
            by_id
                .entry(entity.id())
                .and_modify(|(_, count)| *count += 1)
                .or_insert((EntityIdx::new(i), 1));
        }
        Self { by_id }
    }

    fn resolve(&self, id: &str, line_no: usize) -> Result<EntityIdx, ParseError> {
        match self.by_id.get(id) {
            Some(&(idx, 1)) => Ok(idx),
            Some(&(_, count)) => Err(ParseError::AmbiguousEntity {
                line_no,
                id: id.to_owned(),
                count,
            }),
            None => Err(ParseError::UnknownEntity {
                line_no,
                id: id.to_owned(),
            }),
        }
    }
}

struct SequenceParser<'a, S> {
    lines: &'a [S],
    entities: EntityIndex<'a>,
    config: &'a ParserConfig,
}

impl<S: AsRef<str>> SequenceParser<'_, S> {
    fn line(&self, index: usize) -> &str {
        self.lines[index].as_ref()
    }

    /// Parse `lines[start..end]` into a chain; `None` if the range is empty.
    ///
    /// Each step reports where the next one starts, and the collected steps
    /// are linked back to front once the whole range is consumed.
    fn parse_chain(&self, start: usize, end: usize, depth: usize) -> Result<Option<Step>, ParseError> {
        let mut steps = Vec::new();
        let mut cursor = start;
        while cursor < end {
            let (step, next) = self.parse_step(cursor, end, depth)?;
            steps.push(step);
            cursor = next;
        }

        let mut head: Option<Step> = None;
        while let Some(mut step) = steps.pop() {
            if let Some(next) = head.take() {
                step.set_successor(next);
            }
            head = Some(step);
        }
        Ok(head)
    }

    /// Parse the step starting at `at`; returns it with the index after it.
    fn parse_step(&self, at: usize, end: usize, depth: usize) -> Result<(Step, usize), ParseError> {
        match Keyword::of_line(self.line(at)) {
            Some(Keyword::Alt) => self.parse_fork(at, end, depth),
            Some(Keyword::Loop) => self.parse_loop(at, end, depth),
            Some(keyword) => Err(ParseError::UnexpectedKeyword {
                line_no: at + 1,
                keyword,
            }),
            None => Ok((self.parse_interaction(at)?, at + 1)),
        }
    }

    fn enter_block(&self, at: usize, depth: usize) -> Result<usize, ParseError> {
        if depth >= self.config.max_nesting_depth {
            return Err(ParseError::NestingTooDeep {
                line_no: at + 1,
                max_depth: self.config.max_nesting_depth,
            });
        }
        Ok(depth + 1)
    }

    fn parse_loop(&self, at: usize, end: usize, depth: usize) -> Result<(Step, usize), ParseError> {
        let inner = self.enter_block(at, depth)?;
        let block_end = at + find_block_end(&self.lines[at..end]).map_err(|err| err.shifted(at))?;

        let condition = Keyword::Loop.rest_of(self.line(at));
        let body = self
            .parse_chain(at + 1, block_end, inner)?
            .ok_or(ParseError::EmptyBlock {
                line_no: at + 1,
                keyword: Keyword::Loop,
            })?;

        tracing::trace!("line {}: loop '{condition}' until line {}", at + 1, block_end + 1);
        Ok((Step::looped(condition, body), block_end + 1))
    }

    fn parse_fork(&self, at: usize, end: usize, depth: usize) -> Result<(Step, usize), ParseError> {
        let inner = self.enter_block(at, depth)?;
        let boundaries =
            find_branch_boundaries(&self.lines[at..end]).map_err(|err| err.shifted(at))?;

        let mut branches = IndexMap::with_capacity(boundaries.len());
        let mut opener = at;
        for boundary in boundaries.into_iter().map(|offset| at + offset) {
            let keyword = if opener == at { Keyword::Alt } else { Keyword::Else };
            let condition = keyword.rest_of(self.line(opener));
            if branches.contains_key(condition) {
                return Err(ParseError::DuplicateBranch {
                    line_no: opener + 1,
                    condition: condition.to_owned(),
                });
            }

            let head = self
                .parse_chain(opener + 1, boundary, inner)?
                .ok_or(ParseError::EmptyBlock {
                    line_no: opener + 1,
                    keyword,
                })?;
            branches.insert(condition.to_owned(), head);
            opener = boundary;
        }

        tracing::trace!("line {}: fork with {} branches", at + 1, branches.len());
        let fork = Fork::new(branches).ok_or(ParseError::EmptyBlock {
            line_no: at + 1,
            keyword: Keyword::Alt,
        })?;
        // `opener` now holds the closing `end`.
        Ok((Step::new(StepKind::Fork(fork)), opener + 1))
    }

    fn parse_interaction(&self, at: usize) -> Result<Step, ParseError> {
        let line = self.line(at);
        let line_no = at + 1;
        let malformed = || ParseError::MalformedInteraction {
            line_no,
            line: line.to_owned(),
        };

        let (endpoints, label) = split_label(line).ok_or_else(malformed)?;
        let (returns, arrow) = if endpoints.contains(RETURN_ARROW) {
            (true, RETURN_ARROW)
        } else {
            (false, CALL_ARROW)
        };
        let (source, target) = endpoints.split_once(arrow).ok_or_else(malformed)?;
        let (source, target) = (source.trim(), target.trim());
        if source.is_empty() || target.is_empty() {
            return Err(malformed());
        }

        let source = self.entities.resolve(source, line_no)?;
        let target = self.entities.resolve(target, line_no)?;
        Ok(Step::interaction(source, target, returns, label.trim()))
    }
}

/// Split an interaction line into its arrow segment and label.
///
/// Prefers ` : `; lines without it fall back to the first `:` after the
/// arrow, so entity ids may contain `:` in compact lines.
fn split_label(line: &str) -> Option<(&str, &str)> {
    if let Some(split) = line.split_once(LABEL_SEPARATOR) {
        return Some(split);
    }
    // `-->>` ends with `->>`, so this finds the end of either arrow.
    let arrow_end = line.find(CALL_ARROW)? + CALL_ARROW.len();
    let colon = arrow_end + line[arrow_end..].find(COMPACT_LABEL_SEPARATOR)?;
    Some((&line[..colon], &line[colon + COMPACT_LABEL_SEPARATOR.len_utf8()..]))
}
