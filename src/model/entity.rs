//! Declared actors and participants.

use smol_str::SmolStr;

/// Whether an entity is a human-facing actor or a system participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Actor,
    Participant,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::Participant => "participant",
        }
    }
}

/// An actor or participant declared at the top of a scenario.
///
/// Entities are created once while reading the declarations and never change
/// afterwards; steps refer to them through an [`EntityIdx`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    id: SmolStr,
    name: String,
    kind: EntityKind,
    explicit: bool,
}

impl Entity {
    /// Create a new entity.
    ///
    /// `explicit` is false when the name was a generated placeholder written
    /// in parentheses, e.g. `actor u AS (User)`.
    pub fn new(
        id: impl Into<SmolStr>,
        name: impl Into<String>,
        kind: EntityKind,
        explicit: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            explicit,
        }
    }

    /// Identifier used by interaction lines.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, without surrounding parentheses.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn is_actor(&self) -> bool {
        self.kind == EntityKind::Actor
    }

    pub fn is_explicit(&self) -> bool {
        self.explicit
    }
}

/// Position of an entity in its scenario's declaration list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityIdx(usize);

impl EntityIdx {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Look up the entity this index points at.
    pub fn resolve(self, entities: &[Entity]) -> Option<&Entity> {
        entities.get(self.index())
    }
}
