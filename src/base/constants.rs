//! Keywords, markers and limits of the scenario notation.

use std::fmt;

/// Call-with-return arrow (`a -->> b`).
pub const RETURN_ARROW: &str = "-->>";
/// Plain call arrow (`a ->> b`).
pub const CALL_ARROW: &str = "->>";
/// Preferred separator between the arrow segment and the label.
pub const LABEL_SEPARATOR: &str = " : ";
/// Fallback separator for compact lines such as `a->>b:msg`.
pub const COMPACT_LABEL_SEPARATOR: char = ':';
/// Separator between an entity identifier and its display name.
pub const NAME_SEPARATOR: &str = " AS ";

/// Opening and closing marker of a fenced diagram block.
pub const FENCE: &str = "```";
/// Optional header line directly inside the fence.
pub const DIAGRAM_HEADER: &str = "sequenceDiagram";

/// Default upper bound on `loop`/`alt` nesting.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 32;
/// Default extension of scenario files in a corpus.
pub const DEFAULT_SCENARIO_EXTENSION: &str = "md";

/// A keyword that opens a line of the notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Actor,
    Participant,
    Alt,
    Else,
    Loop,
    End,
}

impl Keyword {
    /// Get the keyword as written in the notation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::Participant => "participant",
            Self::Alt => "alt",
            Self::Else => "else",
            Self::Loop => "loop",
            Self::End => "end",
        }
    }

    /// Classify a trimmed line by its first whitespace-delimited token.
    ///
    /// Only a whole token counts, so `endpoint ->> x : y` is not an `end`.
    pub fn of_line(line: &str) -> Option<Self> {
        let token = line.split_whitespace().next()?;
        match token {
            "actor" => Some(Self::Actor),
            "participant" => Some(Self::Participant),
            "alt" => Some(Self::Alt),
            "else" => Some(Self::Else),
            "loop" => Some(Self::Loop),
            "end" => Some(Self::End),
            _ => None,
        }
    }

    /// Whether this keyword opens a nested block that needs a matching `end`.
    pub fn opens_block(self) -> bool {
        matches!(self, Self::Alt | Self::Loop)
    }

    /// Whether this keyword starts an entity declaration.
    pub fn declares_entity(self) -> bool {
        matches!(self, Self::Actor | Self::Participant)
    }

    /// The trimmed text following this keyword on `line`.
    ///
    /// Returns an empty string when nothing follows the keyword.
    pub fn rest_of<'a>(self, line: &'a str) -> &'a str {
        line.trim_start()
            .strip_prefix(self.as_str())
            .unwrap_or_default()
            .trim()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
