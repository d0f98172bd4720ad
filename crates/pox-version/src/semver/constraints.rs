//! Strict constraints over `major.minor.patch` operands
//!
//! Omitted minor/patch positions and `x`/`X`/`*` wildcards make an operand
//! "wild": `=1.2` means `>=1.2.0, <1.3.0`, `<=1.2` means `<1.3.0` and `>1.2`
//! means `>=1.3.0`. With zero padding enabled, omitted positions are plain
//! zeros instead. Pre-release versions only satisfy clauses whose operand
//! carries a pre-release too, unless pre-releases are explicitly included.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use super::{ConstraintOptions, Version};
use crate::constraint::{
    below, ClauseMatch, Grammar, Groups, Operand, Operator, VersionConstraint, STRICT_OPERATORS,
};
use crate::error::{Error, Result};
use crate::segment::{Segment, Segments};

const OPERAND_PATTERN: &str = concat!(
    r"v?(?P<major>[0-9]+|[xX*])",
    r"(?:\.(?P<minor>[0-9]+|[xX*]))?",
    r"(?:\.(?P<patch>[0-9]+|[xX*]))?",
    r"(?:-(?P<pre>[0-9A-Za-z\-]+(?:\.[0-9A-Za-z\-]+)*))?",
    r"(?:\+(?P<build>[0-9A-Za-z\-]+(?:\.[0-9A-Za-z\-]+)*))?",
);

lazy_static! {
    static ref GRAMMAR: Grammar = Grammar::new(STRICT_OPERATORS, OPERAND_PATTERN).unwrap();
}

/// A single `operator operand` clause of a strict constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    operator: Operator,
    operand: Operand,
    options: ConstraintOptions,
}

impl Constraint {
    fn from_match(clause: Option<ClauseMatch<'_>>, options: ConstraintOptions) -> Self {
        // An empty group is the same clause as a written `*`
        let Some(clause) = clause else {
            return Constraint {
                operator: Operator::Equal,
                operand: Operand::new(Segments::new(vec![Segment::Any; 3]), "", 0, "*"),
                options,
            };
        };

        let mut segments = Vec::with_capacity(3);
        let mut specified = 0;
        let mut wild = false;
        for name in ["major", "minor", "patch"] {
            let part = clause.captures.name(name).map(|m| m.as_str());
            match part {
                Some(text) if !wild && !crate::segment::is_wildcard(text) => {
                    segments.push(Segment::parse(text));
                    specified += 1;
                }
                None if !wild && options.zero_padding => segments.push(Segment::UInt(0)),
                _ => {
                    wild = true;
                    segments.push(Segment::Any);
                }
            }
        }
        let pre_release = clause.captures.name("pre").map_or("", |m| m.as_str());

        Constraint {
            operator: clause.operator,
            operand: Operand::new(
                Segments::new(segments),
                pre_release,
                specified,
                clause.operand(),
            ),
            options,
        }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    pub fn options(&self) -> ConstraintOptions {
        self.options
    }

    /// Pre-release versions are rejected unless the clause opts into them
    fn admits_pre_release(&self) -> bool {
        if self.operand.has_pre_release() {
            !self.operand.is_wild()
        } else {
            self.options.include_pre_release
        }
    }

    fn evaluate(&self, version: &Version) -> bool {
        if version.is_pre_release() && !self.admits_pre_release() {
            return false;
        }

        if self.operand.is_major_wild() {
            return matches!(
                self.operator,
                Operator::Equal
                    | Operator::GreaterThanOrEqual
                    | Operator::LessThanOrEqual
                    | Operator::Tilde
                    | Operator::Caret
                    | Operator::Pessimistic
            );
        }

        let segments = version.segments();
        let pre_release = version.pre_release();
        let ordering = self.operand.compare_version(segments, pre_release);
        let in_tilde_range = || {
            ordering != Ordering::Less
                && below(segments, pre_release, self.operand.tilde_bump())
        };
        let shorthand = self.operand.is_wild() && !self.options.zero_padding;

        match self.operator {
            Operator::Equal if shorthand => in_tilde_range(),
            Operator::Equal => ordering == Ordering::Equal,
            Operator::NotEqual if shorthand => !in_tilde_range(),
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::GreaterThan if shorthand => {
                !below(segments, pre_release, self.operand.tilde_bump())
            }
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
            Operator::LessThan => {
                self.operand.compare_floor(segments, pre_release) == Ordering::Less
            }
            Operator::LessThanOrEqual if shorthand => {
                below(segments, pre_release, self.operand.tilde_bump())
            }
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::Tilde | Operator::Pessimistic => in_tilde_range(),
            Operator::Caret => {
                ordering != Ordering::Less
                    && below(segments, pre_release, self.operand.caret_bump())
            }
        }
    }
}

impl VersionConstraint for Constraint {
    type Version = Version;

    fn check(&self, version: &Version) -> bool {
        let matched = self.evaluate(version);
        log::trace!("{} against {}: {}", version, self, matched);
        matched
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operator == Operator::Equal && self.operand.original() == "*" {
            return f.write_str("*");
        }
        write!(f, "{}{}", self.operator, self.operand)
    }
}

/// Strict constraints: OR-groups of AND-combined clauses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    groups: Groups<Constraint>,
    options: ConstraintOptions,
}

impl Constraints {
    /// Parse with default options
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_options(text, ConstraintOptions::default())
    }

    pub fn parse_with_options(text: &str, options: ConstraintOptions) -> Result<Self> {
        let groups = GRAMMAR
            .parse(text)?
            .into_iter()
            .map(|group| {
                group
                    .into_iter()
                    .map(|clause| Constraint::from_match(clause, options))
                    .collect()
            })
            .collect();

        Ok(Constraints {
            groups: Groups::new(groups),
            options,
        })
    }

    pub fn check(&self, version: &Version) -> bool {
        self.groups.check(version)
    }

    pub fn groups(&self) -> &[Vec<Constraint>] {
        self.groups.as_slice()
    }

    pub fn options(&self) -> ConstraintOptions {
        self.options
    }
}

impl FromStr for Constraints {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Constraints::parse(s)
    }
}

impl VersionConstraint for Constraints {
    type Version = Version;

    fn check(&self, version: &Version) -> bool {
        Constraints::check(self, version)
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.groups)
    }
}
