//! Scenario complexity metrics
//!
//! All interaction metrics walk the chain by `successor` links and recurse
//! into every loop body and every fork branch, so nesting depth bounds the
//! recursion. Metrics assume a chain produced by the parser and cannot fail.

use crate::model::{Entity, EntityIdx, Interaction, Step, StepKind};

/// Which declared entities to count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EntityFilter {
    /// Count actors only, not participants.
    pub only_actors: bool,
    /// Count entities with a literal name only, not placeholders.
    pub only_explicit: bool,
}

impl EntityFilter {
    pub const ALL: Self = Self {
        only_actors: false,
        only_explicit: false,
    };
    pub const ACTORS: Self = Self {
        only_actors: true,
        only_explicit: false,
    };
    pub const EXPLICIT: Self = Self {
        only_actors: false,
        only_explicit: true,
    };
    pub const EXPLICIT_ACTORS: Self = Self {
        only_actors: true,
        only_explicit: true,
    };

    pub fn matches(&self, entity: &Entity) -> bool {
        (!self.only_actors || entity.is_actor()) && (!self.only_explicit || entity.is_explicit())
    }
}

/// Number of declared entities passing `filter`.
pub fn count_entities(entities: &[Entity], filter: EntityFilter) -> usize {
    entities.iter().filter(|entity| filter.matches(entity)).count()
}

/// Whether exactly one endpoint is an actor and the other a participant.
pub fn is_user_level(interaction: &Interaction, entities: &[Entity]) -> bool {
    match (
        interaction.source.resolve(entities),
        interaction.target.resolve(entities),
    ) {
        (Some(source), Some(target)) => source.is_actor() != target.is_actor(),
        _ => false,
    }
}

/// Count every interaction in the chain, including those nested in loops and
/// in every fork branch.
///
/// With `only_user_level`, only interactions between an actor and a
/// participant are counted.
pub fn count_interactions(head: &Step, entities: &[Entity], only_user_level: bool) -> usize {
    head.iter()
        .map(|step| match step.kind() {
            StepKind::Interaction(interaction) => {
                usize::from(!only_user_level || is_user_level(interaction, entities))
            }
            StepKind::Loop(looped) => count_interactions(&looped.body, entities, only_user_level),
            StepKind::Fork(fork) => fork
                .branches()
                .map(|(_, branch)| count_interactions(branch, entities, only_user_level))
                .sum(),
        })
        .sum()
}

/// Count interactions whose source is the target of the interaction right
/// before them.
pub fn count_consecutive_interactions(head: &Step) -> usize {
    count_consecutive_from(head, None)
}

/// Consecutive count for a chain entered with `last_target` as the target of
/// the preceding interaction.
///
/// A loop body and each fork branch are counted with the context the block
/// was entered with. After a loop the chain continues from the end of its
/// body; after a fork it continues from the end of the first declared branch
/// only.
pub fn count_consecutive_from(head: &Step, mut last_target: Option<EntityIdx>) -> usize {
    let mut count = 0;

    for step in head {
        match step.kind() {
            StepKind::Interaction(interaction) => {
                if last_target == Some(interaction.source) {
                    count += 1;
                }
                last_target = Some(interaction.target);
            }
            StepKind::Loop(looped) => {
                count += count_consecutive_from(&looped.body, last_target);
                last_target = looped.body.last_interaction().map(|last| last.target);
            }
            StepKind::Fork(fork) => {
                count += fork
                    .branches()
                    .map(|(_, branch)| count_consecutive_from(branch, last_target))
                    .sum::<usize>();
                last_target = fork
                    .first_branch()
                    .and_then(|(_, branch)| branch.last_interaction())
                    .map(|last| last.target);
            }
        }
    }

    count
}

#[cfg(test)]
mod tests;
