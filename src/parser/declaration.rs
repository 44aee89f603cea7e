//! Actor and participant declarations.

use crate::base::Keyword;
use crate::base::constants::NAME_SEPARATOR;
use crate::model::{Entity, EntityKind};

use super::error::ParseError;

/// Parse one declaration line.
///
/// Accepted forms:
/// - `actor <id> AS <name>` / `participant <id> AS <name>` (explicit name)
/// - `actor <id> AS (<name>)` / `participant <id> AS (<name>)` (placeholder name)
///
/// Errors report line 1; see [`parse_declarations`] for positioned errors.
pub fn parse_entity(line: &str) -> Result<Entity, ParseError> {
    let trimmed = line.trim();
    let malformed = || ParseError::MalformedDeclaration {
        line_no: 1,
        line: trimmed.to_owned(),
    };

    let (keyword, kind) = match Keyword::of_line(trimmed) {
        Some(Keyword::Actor) => (Keyword::Actor, EntityKind::Actor),
        Some(Keyword::Participant) => (Keyword::Participant, EntityKind::Participant),
        _ => return Err(malformed()),
    };

    let (id, name) = keyword
        .rest_of(trimmed)
        .split_once(NAME_SEPARATOR)
        .ok_or_else(malformed)?;
    let id = id.trim();
    let name = name.trim();

    let explicit = !name.starts_with('(') && !name.ends_with(')');
    let name = if explicit {
        name
    } else {
        let name = name.strip_prefix('(').unwrap_or(name);
        name.strip_suffix(')').unwrap_or(name).trim()
    };

    if id.is_empty() || name.is_empty() {
        return Err(malformed());
    }

    Ok(Entity::new(id, name, kind, explicit))
}

/// Parse the leading run of declaration lines.
///
/// Stops at the first line that does not start with `actor` or `participant`
/// and returns the entities in declaration order plus the number of lines
/// consumed.
pub fn parse_declarations<S: AsRef<str>>(lines: &[S]) -> Result<(Vec<Entity>, usize), ParseError> {
    let mut entities = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if !Keyword::of_line(line).is_some_and(Keyword::declares_entity) {
            return Ok((entities, i));
        }
        let entity = parse_entity(line).map_err(|err| err.shifted(i))?;
        tracing::trace!("declared {} '{}'", entity.kind().as_str(), entity.id());
        entities.push(entity);
    }

    let consumed = entities.len();
    Ok((entities, consumed))
}
