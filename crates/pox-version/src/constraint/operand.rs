//! The version pattern on the right-hand side of a constraint clause

use std::cmp::Ordering;
use std::fmt;

use super::bump;
use crate::prerelease;
use crate::segment::{Segment, Segments};
use crate::version::compare_parts;

/// A version pattern that may contain wildcard segments.
///
/// `specified` counts the leading segments that were written out as numbers;
/// omitted or wildcard positions after them never count, even when they are
/// filled with zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    segments: Segments,
    pre_release: String,
    specified: usize,
    original: String,
}

impl Operand {
    pub(crate) fn new(
        segments: Segments,
        pre_release: &str,
        specified: usize,
        original: &str,
    ) -> Self {
        Operand {
            segments,
            pre_release: pre_release.to_string(),
            specified,
            original: original.to_string(),
        }
    }

    /// The operand matching every version
    pub(crate) fn any() -> Self {
        Operand::new(Segments::new(vec![Segment::Any]), "", 0, "*")
    }

    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    pub fn pre_release(&self) -> &str {
        &self.pre_release
    }

    pub fn specified(&self) -> usize {
        self.specified
    }

    /// The operand as written in the constraint
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_wild(&self) -> bool {
        self.segments.iter().any(Segment::is_any)
    }

    pub fn is_major_wild(&self) -> bool {
        self.segments.get(0).map_or(true, Segment::is_any)
    }

    pub fn has_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Order a version relative to this operand.
    ///
    /// Wildcard segments compare equal. A wildcard operand without its own
    /// pre-release tag also accepts any pre-release at the boundary.
    pub fn compare_version(&self, segments: &Segments, pre_release: &str) -> Ordering {
        let ordering = segments
            .normalize()
            .compare(&self.segments.normalize(), &Segment::UInt(0));
        if ordering != Ordering::Equal || (self.is_wild() && !self.has_pre_release()) {
            return ordering;
        }
        prerelease::compare(pre_release, &self.pre_release)
    }

    /// Order a version relative to this operand with every wildcard read as zero
    pub fn compare_floor(&self, segments: &Segments, pre_release: &str) -> Ordering {
        let floor: Segments = self
            .segments
            .iter()
            .map(|s| if s.is_any() { Segment::UInt(0) } else { s.clone() })
            .collect();
        compare_parts(segments, pre_release, &floor, &self.pre_release)
    }

    pub fn tilde_bump(&self) -> Option<Segments> {
        bump::tilde(&self.segments, self.specified)
    }

    pub fn caret_bump(&self) -> Option<Segments> {
        bump::caret(&self.segments, self.specified)
    }

    pub fn pessimistic_bump(&self) -> Option<Segments> {
        bump::pessimistic(&self.segments, self.specified)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

/// Check `segments`/`pre_release` against an upper bound produced by a bump
pub(crate) fn below(segments: &Segments, pre_release: &str, bound: Option<Segments>) -> bool {
    match bound {
        Some(bound) => compare_parts(segments, pre_release, &bound, "") == Ordering::Less,
        None => true,
    }
}
