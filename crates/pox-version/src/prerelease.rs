//! Pre-release precedence
//!
//! Follows item 11 of semver.org: a version without a pre-release outranks
//! its pre-releases, identifiers compare one by one, numbers sort before
//! strings, and a shorter tag that is a prefix of a longer one sorts first.

use std::cmp::Ordering;

use crate::segment::Segments;

/// Compare two pre-release tags (the text after `-`, without the dash)
pub fn compare(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    match (a.is_empty(), b.is_empty()) {
        (true, _) => Ordering::Greater,
        (_, true) => Ordering::Less,
        _ => Segments::parse(a).compare_unpadded(&Segments::parse(b)),
    }
}
