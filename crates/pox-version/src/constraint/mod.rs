//! Constraint building blocks shared by the relaxed and strict flavors

pub mod bump;
mod grammar;
mod operand;
mod operator;

use std::fmt;

use itertools::Itertools;

use crate::segment::Segment;

pub(crate) use grammar::{strip_names, ClauseMatch, Grammar};
pub(crate) use operand::below;
pub use operand::Operand;
pub use operator::Operator;
pub(crate) use operator::{RELAXED_OPERATORS, STRICT_OPERATORS};

/// Anything a version can be checked against
pub trait VersionConstraint: fmt::Debug + fmt::Display + Send + Sync {
    type Version;

    /// Check if the version satisfies this constraint
    fn check(&self, version: &Self::Version) -> bool;
}

/// OR-combined groups of AND-combined clauses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups<C> {
    groups: Vec<Vec<C>>,
}

impl<C> Groups<C> {
    pub(crate) fn new(groups: Vec<Vec<C>>) -> Self {
        Groups { groups }
    }

    pub fn as_slice(&self) -> &[Vec<C>] {
        &self.groups
    }
}

impl<C: VersionConstraint> Groups<C> {
    /// True if every clause of at least one group is satisfied
    pub fn check(&self, version: &C::Version) -> bool {
        self.groups
            .iter()
            .any(|group| group.iter().all(|clause| clause.check(version)))
    }
}

impl<C: fmt::Display> fmt::Display for Groups<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .groups
            .iter()
            .map(|group| group.iter().join(","))
            .join("||");
        f.write_str(&rendered)
    }
}

/// Split the release part of an operand into segments.
///
/// Returns the segments and how many leading positions were numbers. The
/// first wildcard turns every later position into a wildcard too.
pub(crate) fn pattern_segments(release: &str) -> (Vec<Segment>, usize) {
    let mut segments = Vec::new();
    let mut specified = 0;
    let mut wild = false;

    for part in release.split('.') {
        let segment = Segment::parse_pattern(part);
        wild = wild || segment.is_any();
        if wild {
            segments.push(Segment::Any);
        } else {
            segments.push(segment);
            specified += 1;
        }
    }

    (segments, specified)
}
