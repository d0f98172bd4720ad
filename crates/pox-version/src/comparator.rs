//! String-level version comparison helpers

use std::cmp::Ordering;

use crate::constraint::Operator;
use crate::version::{Constraints, Version};

/// Compares version strings with the relaxed flavor.
///
/// Every helper answers `false` when either input fails to parse.
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">", version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">=", version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<", version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<=", version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "==", version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "!=", version2)
    }

    /// Compare version1 to version2 using an operator token such as `>=` or `=<`
    pub fn compare(version1: &str, operator: &str, version2: &str) -> bool {
        let (Ok(v1), Ok(v2), Ok(op)) = (
            Version::parse(version1),
            Version::parse(version2),
            operator.parse::<Operator>(),
        ) else {
            return false;
        };

        let ordering = v1.compare(&v2);
        match op {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
            Operator::Tilde => {
                ordering != Ordering::Less && v1.less_than(&v2.tilde_bump())
            }
            Operator::Caret => {
                ordering != Ordering::Less && v1.less_than(&v2.caret_bump())
            }
            Operator::Pessimistic => {
                ordering != Ordering::Less && v1.less_than(&v2.pessimistic_bump())
            }
        }
    }

    /// Check if a version satisfies a constraint expression
    pub fn satisfies(version: &str, constraints: &str) -> bool {
        match (Version::parse(version), Constraints::parse(constraints)) {
            (Ok(v), Ok(c)) => c.check(&v),
            _ => false,
        }
    }
}
