//! Step chain: interactions, loops and forks.

use std::fmt;

use indexmap::IndexMap;

use super::entity::EntityIdx;

/// A single message exchange between two declared entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    /// Entity that initiates the interaction.
    pub source: EntityIdx,
    /// Entity that receives the interaction.
    pub target: EntityIdx,
    /// True for a call-with-return arrow (`-->>`).
    pub returns: bool,
    pub label: String,
}

/// A repeated sub-sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loop {
    pub condition: String,
    pub body: Box<Step>,
}

/// Mutually exclusive branches of an `alt` block, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fork {
    branches: IndexMap<String, Step>,
}

impl Fork {
    /// Create a fork from its branches, keyed by condition text.
    ///
    /// Returns `None` if there are no branches.
    pub fn new(branches: IndexMap<String, Step>) -> Option<Self> {
        (!branches.is_empty()).then_some(Self { branches })
    }

    /// Branches in declaration order.
    pub fn branches(&self) -> impl Iterator<Item = (&str, &Step)> {
        self.branches.iter().map(|(condition, head)| (condition.as_str(), head))
    }

    pub fn branch(&self, condition: &str) -> Option<&Step> {
        self.branches.get(condition)
    }

    /// The `alt` branch. Its ending stands in for the whole fork when the
    /// chain continues after `end`.
    pub fn first_branch(&self) -> Option<(&str, &Step)> {
        self.branches
            .first()
            .map(|(condition, head)| (condition.as_str(), head))
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

/// The closed set of step variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepKind {
    Interaction(Interaction),
    Loop(Loop),
    Fork(Fork),
}

/// One node of a forward-linked step chain.
///
/// The successor is attached once, right after the rest of the chain has been
/// built, and the chain is never modified afterwards. No backward link is kept.
///
/// `Clone`, `PartialEq` and `Debug` walk the chain iteratively; only loop
/// bodies and fork branches recurse, bounded by block nesting.
pub struct Step {
    kind: StepKind,
    successor: Option<Box<Step>>,
}

impl Step {
    pub fn new(kind: StepKind) -> Self {
        Self {
            kind,
            successor: None,
        }
    }

    pub fn interaction(
        source: EntityIdx,
        target: EntityIdx,
        returns: bool,
        label: impl Into<String>,
    ) -> Self {
        Self::new(StepKind::Interaction(Interaction {
            source,
            target,
            returns,
            label: label.into(),
        }))
    }

    pub fn looped(condition: impl Into<String>, body: Step) -> Self {
        Self::new(StepKind::Loop(Loop {
            condition: condition.into(),
            body: Box::new(body),
        }))
    }

    /// Attach `next` as this step's successor.
    pub fn with_successor(mut self, next: Step) -> Self {
        self.set_successor(next);
        self
    }

    pub(crate) fn set_successor(&mut self, next: Step) {
        debug_assert!(self.successor.is_none(), "successor is assigned once");
        self.successor = Some(Box::new(next));
    }

    pub fn kind(&self) -> &StepKind {
        &self.kind
    }

    pub fn successor(&self) -> Option<&Step> {
        self.successor.as_deref()
    }

    /// Iterate over this step and every step reachable through `successor`.
    ///
    /// Loop bodies and fork branches are not entered.
    pub fn iter(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// The final step of this chain.
    pub fn last(&self) -> &Step {
        let mut last = self;
        while let Some(next) = last.successor() {
            last = next;
        }
        last
    }

    /// The interaction that ends this chain.
    ///
    /// A trailing loop ends with the end of its body; a trailing fork ends
    /// with the end of its first declared branch, regardless of what the other
    /// branches end with.
    pub fn last_interaction(&self) -> Option<&Interaction> {
        let mut step = self.last();
        loop {
            match &step.kind {
                StepKind::Interaction(interaction) => return Some(interaction),
                StepKind::Loop(looped) => step = looped.body.last(),
                StepKind::Fork(fork) => step = fork.first_branch()?.1.last(),
            }
        }
    }
}

// Unlinks the successor chain iteratively so long flat scenarios don't
// recurse once per step on drop.
impl Drop for Step {
    fn drop(&mut self) {
        let mut next = self.successor.take();
        while let Some(mut step) = next {
            next = step.successor.take();
        }
    }
}

impl Clone for Step {
    fn clone(&self) -> Self {
        let mut kinds: Vec<StepKind> = self.iter().skip(1).map(|step| step.kind.clone()).collect();
        let mut tail: Option<Box<Step>> = None;
        while let Some(kind) = kinds.pop() {
            tail = Some(Box::new(Step {
                kind,
                successor: tail,
            }));
        }
        Step {
            kind: self.kind.clone(),
            successor: tail,
        }
    }
}

impl PartialEq for Step {
    fn eq(&self, other: &Self) -> bool {
        self.iter().map(Step::kind).eq(other.iter().map(Step::kind))
    }
}

impl Eq for Step {}

// Formats the chain as a flat list of step kinds.
impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(Step::kind)).finish()
    }
}

/// Iterator over a chain's steps by `successor` link.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a Step>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Step;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.next?;
        self.next = step.successor();
        Some(step)
    }
}

impl<'a> IntoIterator for &'a Step {
    type Item = &'a Step;
    type IntoIter = Chain<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
