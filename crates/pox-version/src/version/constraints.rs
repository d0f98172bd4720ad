use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::Version;
use crate::constraint::{
    below, pattern_segments, strip_names, ClauseMatch, Grammar, Groups, Operand, Operator,
    VersionConstraint, RELAXED_OPERATORS,
};
use crate::error::{Error, Result};
use crate::segment::Segments;

const OPERAND_PATTERN: &str = concat!(
    r"v?(?P<release>(?:[0-9]+|[xX*])(?:\.(?:[0-9]+|[xX*]))*)",
    r"(?:-(?P<pre>[0-9A-Za-z\-]+(?:\.[0-9A-Za-z\-]+)*))?",
    r"(?:\+(?P<build>[0-9A-Za-z\-]+(?:\.[0-9A-Za-z\-]+)*))?",
);

lazy_static! {
    static ref GRAMMAR: Grammar = Grammar::new(RELAXED_OPERATORS, OPERAND_PATTERN).unwrap();
    static ref OPERAND_RE: Regex = Regex::new(&format!("^{}$", OPERAND_PATTERN)).unwrap();
    static ref RANGE_RE: Regex = Regex::new(&format!(
        r"(?P<lower>{op})\s+-\s+(?P<upper>{op})",
        op = strip_names(OPERAND_PATTERN)
    ))
    .unwrap();
}

/// A single `operator operand` clause of a relaxed constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    operator: Operator,
    operand: Operand,
}

impl Constraint {
    fn from_match(clause: Option<ClauseMatch<'_>>) -> Self {
        let Some(clause) = clause else {
            return Constraint {
                operator: Operator::Equal,
                operand: Operand::any(),
            };
        };

        let (segments, specified) = pattern_segments(&clause.captures["release"]);
        let pre_release = clause.captures.name("pre").map_or("", |m| m.as_str());

        Constraint {
            operator: clause.operator,
            operand: Operand::new(
                Segments::new(segments),
                pre_release,
                specified,
                clause.operand(),
            ),
        }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    fn upper_bound(&self) -> Option<Segments> {
        match self.operator {
            Operator::Tilde => self.operand.tilde_bump(),
            Operator::Caret => self.operand.caret_bump(),
            _ => self.operand.pessimistic_bump(),
        }
    }
}

impl VersionConstraint for Constraint {
    type Version = Version;

    fn check(&self, version: &Version) -> bool {
        let segments = version.segments();
        let pre_release = version.pre_release();
        let ordering = self.operand.compare_version(segments, pre_release);

        let matched = match self.operator {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::Tilde | Operator::Caret | Operator::Pessimistic => {
                ordering != Ordering::Less && below(segments, pre_release, self.upper_bound())
            }
        };

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

/// Relaxed constraints: OR-groups of AND-combined clauses.
///
/// Accepts any number of segments per operand, the pessimistic operator `~>`
/// and hyphen ranges such as `1.2 - 1.4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    groups: Groups<Constraint>,
}

impl Constraints {
    /// Parse constraint text such as `>= 1.2.3, < 2.0 || ~> 3.1`
    pub fn parse(text: &str) -> Result<Self> {
        let text = rewrite_range(text);

        let groups = GRAMMAR
            .parse(&text)?
            .into_iter()
            .map(|group| group.into_iter().map(Constraint::from_match).collect())
            .collect();

        Ok(Constraints {
            groups: Groups::new(groups),
        })
    }

    /// Check if a version satisfies at least one group of clauses
    pub fn check(&self, version: &Version) -> bool {
        self.groups.check(version)
    }

    /// The OR-groups, each a list of clauses that must all hold
    pub fn groups(&self) -> &[Vec<Constraint>] {
        self.groups.as_slice()
    }
}

/// Rewrite every `A - B` range into `>= A, <= B.*`; pre-release and build of `B` are dropped
fn rewrite_range(text: &str) -> String {
    let rewritten = RANGE_RE.replace_all(text, |caps: &regex::Captures<'_>| {
        let upper = &caps["upper"];
        let release = OPERAND_RE
            .captures(upper)
            .and_then(|c| c.name("release"))
            .map_or(upper, |m| m.as_str());
        format!(">= {}, <= {}.*", &caps["lower"], release)
    });

    if rewritten != text {
        log::trace!("Rewrote range {:?} to {:?}", text, rewritten);
    }
    rewritten.into_owned()
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

#[cfg(test)]
mod tests {
    use super::*;

    fn check(constraint: &str, version: &str) -> bool {
        let c = Constraints::parse(constraint).unwrap();
        let v = Version::parse(version).unwrap();
        c.check(&v)
    }

    #[test]
    fn test_parse() {
        let cases = [
            ("> 1.0", false),
            ("= abc", true),
            ("> 1.0 || < foo", true),
            (">= 1.2.3, < 2.0 || => 3.0, < 4", false),
            (">= 1.1", false),
            (">40.50.60, < 50.70", false),
            ("2.0", false),
            ("2.3.5-20161202202307-sha.e8fc5e5", false),
            (">= bar", true),
            ("BAR >= 1.2.3", true),
        ];
        for (constraint, want_err) in cases {
            assert_eq!(
                Constraints::parse(constraint).is_err(),
                want_err,
                "{}",
                constraint
            );
        }
    }

    #[test]
    fn test_parse_error_names_group() {
        assert_eq!(
            Constraints::parse("> 1.0 || < foo").unwrap_err(),
            Error::MalformedConstraint("< foo".to_string())
        );
    }

    #[test]
    fn test_check_equal() {
        let cases = [
            ("=2.0.0", "1.2.3", false),
            ("=2.0.0", "2.0.0", true),
            ("= 1.0", "1.1.5", false),
            ("= 1.0", "1.0.0", true),
            ("=4.1", "4.1.0-alpha.1", false),
            ("=4.1-alpha", "4.1.0-alpha", true),
            ("=2.0", "1.2.3", false),
            ("=2.0", "2.0.0", true),
            ("=2.0", "2.0.1", false),
            ("=0", "1.0.0", false),
            ("== 2.0.0", "1.2.3", false),
            ("==2.0.0", "2.0.0", true),
            ("== 4.1", "4.1.0-alpha.1", false),
            ("==4.1-alpha", "4.1.0-alpha", true),
            ("2", "1.0.0", false),
            ("2", "3.4.5", false),
            ("2", "2.1.1", false),
            ("2.1", "2.1.1", false),
            ("2.1", "2.2.1", false),
            ("4.1", "4.1.0", true),
            ("1.0", "1.0.0", true),
            ("!=4.1.0", "4.1.0", false),
            ("!=4.1.0", "4.1.1", true),
            ("!=4.1", "5.1.0-alpha.1", true),
            ("!=4.1-alpha", "4.1.0", true),
        ];
        for (constraint, version, want) in cases {
            assert_eq!(check(constraint, version), want, "{} {}", version, constraint);
        }
    }

    #[test]
    fn test_check_less() {
        let cases = [
            ("<0.0.5", "0.1.0", false),
            ("<1.0.0", "0.1.0", true),
            ("<0", "0.0.0-alpha", true),
            ("<0-z", "0.0.0-alpha", true),
            ("<0", "1.0.0-alpha", false),
            ("<1", "1.0.0-alpha", true),
            ("<11", "0.1.0", true),
            ("<11", "11.1.0", false),
            ("<1.1", "0.1.0", true),
            ("<1.1", "1.1.0", false),
            ("<1.1", "1.1.1", false),
            ("<=0.2.3", "1.2.3", false),
            ("<=1.2.3", "1.2.3", true),
            ("<= 2.1.0-a", "2.0.0", true),
            ("<=11", "1.2.3", true),
            ("<=11", "12.2.3", false),
            ("<=11", "11.2.3", false),
            ("<=1.1", "1.2.3", false),
            ("<=1.1", "0.1.0", true),
            ("<=1.1", "1.1.0", true),
            ("<=1.1", "1.1.1", false),
        ];
        for (constraint, version, want) in cases {
            assert_eq!(check(constraint, version), want, "{} {}", version, constraint);
        }
    }

    #[test]
    fn test_check_greater() {
        let cases = [
            (">5.0.0", "4.1.0", false),
            (">4.0.0", "4.1.0", true),
            ("> 2.0", "2.1.0-beta", true),
            (">0", "0.0.1-alpha", true),
            (">0.0", "0.0.1-alpha", true),
            (">0-0", "0.0.1-alpha", true),
            (">0.0-0", "0.0.1-alpha", true),
            (">0", "0.0.0-alpha", false),
            (">0-0", "0.0.0-alpha", true),
            (">0.0.0-0", "0.0.0-alpha", true),
            (">1.2.3-alpha.1", "1.2.3-alpha.2", true),
            (">1.2.3-alpha.1", "1.3.3-alpha.2", true),
            (">1.1", "4.1.0", true),
            (">1.1", "1.1.0", false),
            (">0", "0.0.0", false),
            (">0", "1.0.0", true),
            (">11", "11.1.0", true),
            (">11.1", "11.1.0", false),
            (">11.1", "11.1.1", true),
            (">11.1", "11.2.1", true),
            (">=11.1.3", "11.1.2", false),
            (">=11.1.2", "11.1.2", true),
            (">= 1.0, < 1.2", "1.1.5", true),
            (">= 2.1.0-a", "2.1.0-beta", true),
            (">= 2.1.0-a", "2.1.1-beta", true),
            (">= 2.0.0", "2.1.0-beta", true),
            (">= 2.1.0-a", "2.1.1", true),
            (">= 2.1.0-a", "2.1.0", true),
            (">=0", "0.0.1-alpha", true),
            (">=0.0", "0.0.1-alpha", true),
            (">=0-0", "0.0.1-alpha", true),
            (">=0.0-0", "0.0.1-alpha", true),
            (">=0", "0.0.0-alpha", false),
            (">=0-0", "0.0.0-alpha", true),
            (">=0.0.0-0", "0.0.0-alpha", true),
            (">=0.0.0-0", "1.2.3", true),
            (">=0.0.0-0", "3.4.5-beta.1", true),
            (">=11", "11.1.2", true),
            (">=11.1", "11.1.2", true),
            (">=11.1", "11.0.2", false),
            (">=1.1", "4.1.0", true),
            (">=1.1", "1.1.0", true),
            (">=1.1", "0.0.9", false),
            (">=0", "0.0.0", true),
        ];
        for (constraint, version, want) in cases {
            assert_eq!(check(constraint, version), want, "{} {}", version, constraint);
        }
    }

    #[test]
    fn test_check_pessimistic() {
        let cases = [
            ("~> 1.0", "2.0", false),
            ("~> 1.0", "1.1", true),
            ("~> 1.0", "1.2.3", true),
            ("~> 1.0.0", "1.2.3", false),
            ("~> 1.0.0", "1.0.7", true),
            ("~> 1.0.0", "1.1.0", false),
            ("~> 1.0.7", "1.0.4", false),
            ("~> 1.0.7", "1.0.7", true),
            ("~> 1.0.7", "1.0.8", true),
            ("~> 1.0.7", "1.0.7.5", true),
            ("~> 1.0.7", "1.0.6.99", false),
            ("~> 1.0.7", "1.0.8.0", true),
            ("~> 1.0.9.5", "1.0.9.5", true),
            ("~> 1.0.9.5", "1.0.9.4", false),
            ("~> 1.0.9.5", "1.0.9.6", true),
            ("~> 1.0.9.5", "1.0.9.5.0", true),
            ("~> 1.0.9.5", "1.0.9.5.1", true),
            ("~> 2.0", "2.1.0-beta", true),
            ("~> 2.1.0-a", "2.2.0", false),
            ("~> 2.1.0-a", "2.1.0", true),
            ("~> 2.1.0-a", "2.1.0-beta", true),
            ("~> 2.1.0-a", "2.2.0-alpha", true),
        ];
        for (constraint, version, want) in cases {
            assert_eq!(check(constraint, version), want, "{} {}", version, constraint);
        }
    }

    #[test]
    fn test_check_tilde_and_caret() {
        let cases = [
            ("~1.2.3", "1.2.4", true),
            ("~1.2.3", "1.3.4", false),
            ("~1.2", "1.2.4", true),
            ("~1.2", "1.3.4", false),
            ("~1", "1.2.4", true),
            ("~1", "2.3.4", false),
            ("~0.2.3", "0.2.5", true),
            ("~0.2.3", "0.3.5", false),
            ("~1.2.3-beta.2", "1.2.3-beta.4", true),
            ("~1.2.3-beta.2", "1.2.4-beta.2", true),
            ("~1.2.3-beta.2", "1.3.4-beta.2", false),
            ("^1.2.3", "1.8.9", true),
            ("^1.2.3", "2.8.9", false),
            ("^1.2.3", "1.2.1", false),
            ("^1.1.0", "2.1.0", false),
            ("^1.2.0", "2.2.1", false),
            ("^1.2", "1.8.9", true),
            ("^1.2", "2.8.9", false),
            ("^1", "1.8.9", true),
            ("^1", "2.8.9", false),
            ("^0.2.3", "0.2.5", true),
            ("^0.2.3", "0.5.6", false),
            ("^0.2", "0.2.5", true),
            ("^0.2", "0.5.6", false),
            ("^0.0.3", "0.0.3", true),
            ("^0.0.3", "0.0.4", false),
            ("^0.0", "0.0.3", true),
            ("^0.0", "0.1.4", false),
            ("^0.0", "1.0.4", false),
            ("^0", "0.2.3", true),
            ("^0", "1.1.4", false),
            ("^1.2.0", "1.2.1-alpha.1", true),
            ("^1.2.0-alpha.0", "1.2.1-alpha.1", true),
            ("^1.2.0-alpha.0", "1.2.1-alpha.0", true),
            ("^1.2.0-alpha.2", "1.2.0-alpha.1", false),
            ("^0.2.3-beta.2", "0.2.3-beta.4", true),
            ("^0.2.3-beta.2", "0.2.4-beta.2", true),
            ("^0.2.3-beta.2", "0.3.4-beta.2", false),
            ("^0.2.3-beta.2", "0.2.3-beta.2", true),
        ];
        for (constraint, version, want) in cases {
            assert_eq!(check(constraint, version), want, "{} {}", version, constraint);
        }
    }

    #[test]
    fn test_check_groups() {
        let cases = [
            ("< 1.0.0.1 || = 2.0.1.2.3", "2.0", false),
            ("< 1.0.0.1 || = 2.0.5.4.8", "2.0.5.4.8", true),
            ("> 1.0.0.0.1 < 1.0.0.1 || = 2.0.5.4.8", "1.0.0.0.9", true),
            (">1.2.3", "1.02.4", true),
            ("<1.3.09", "1.05.4", false),
            ("< 1.0 || = 2.0", "2.0", true),
            ("< 1.0 || = 2.0", "0.1", true),
            ("< 1.0 || = 2.0", "1.1", false),
            ("> 1.0, < 1.2", "1.1.5", true),
            ("> 1.0, < 1.2 || >3.0", "1.5", false),
            ("> 1.0 < 1.2 || >3.0", "1.5", false),
            ("> 1.0\t< 1.2 || >3.0", "1.1", true),
            ("> 1.0, < 1.2 || >3.0", "4.2", true),
            ("> 1.0 < 1.2 || >3.0, <4.0", "4.2", false),
            ("^0.2 || ^1", "1.8.0", true),
            ("^0.2, ^1", "1.8.0", false),
        ];
        for (constraint, version, want) in cases {
            assert_eq!(check(constraint, version), want, "{} {}", version, constraint);
        }
    }

    #[test]
    fn test_wildcards() {
        assert!(check("", "1.2.3"));
        assert!(check("*", "0.0.1-alpha"));
        assert!(check("~*", "7.0"));
        assert!(check("^x", "7.0"));
        assert!(check("1.2.x", "1.2.9.1"));
        assert!(!check("1.2.x", "1.3"));
        assert!(check(">= 1.x", "1.0-rc.1"));
    }

    #[test]
    fn test_range_rewrite() {
        assert_eq!(rewrite_range("1.2 - 1.4"), ">= 1.2, <= 1.4.*");
        assert_eq!(rewrite_range("1.2 - v1.4.5-rc.1+b7"), ">= 1.2, <= 1.4.5.*");
        assert_eq!(rewrite_range("1.2-beta"), "1.2-beta");

        assert!(check("1.2 - 1.4", "1.4.9"));
        assert!(check("1.2 - 1.4", "1.2.0"));
        assert!(!check("1.2 - 1.4", "1.5"));
        assert!(!check("1.2 - 1.4", "1.1.9"));
        assert!(check("1.0 - 1.1 || 3.0 - 3.1", "3.1.7"));
    }

    #[test]
    fn test_display() {
        let cases = [
            (">= 1.2.3, < 2.0 || => 3.0, < 4", ">=1.2.3,<2.0||>=3.0,<4"),
            ("~> 1.0.7", "~>1.0.7"),
            ("== v2.0", "=v2.0"),
            ("1.2 - 1.4", ">=1.2,<=1.4.*"),
            ("", "*"),
            ("1.0 ||", "=1.0||*"),
        ];
        for (input, want) in cases {
            let c = Constraints::parse(input).unwrap();
            assert_eq!(c.to_string(), want);
            assert_eq!(Constraints::parse(&c.to_string()).unwrap(), c);
        }
    }

    #[test]
    fn test_groups() {
        let c: Constraints = ">= 1.2, < 2 || ~> 3.1".parse().unwrap();
        let groups = c.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0][0].operator(), Operator::GreaterThanOrEqual);
        assert_eq!(groups[0][1].operand().original(), "2");
        assert_eq!(groups[1][0].operator(), Operator::Pessimistic);
        assert_eq!(groups[1][0].operand().specified(), 2);
    }
}
