//! Version segments and segment sequences
//!
//! A segment is one dot-separated component of a version string or of a
//! pre-release tag. Segments of different kinds are totally ordered against
//! each other so that any two sequences can be compared position by position.

use std::cmp::Ordering;
use std::fmt;

use itertools::{EitherOrBoth, Itertools};

static ANY_SEGMENT: Segment = Segment::Any;

/// Unsigned integer of arbitrary size, stored as canonical decimal digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigNumber(String);

impl BigNumber {
    /// Build a number from ASCII digits, stripping leading zeros
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Some(BigNumber("0".to_string()))
        } else {
            Some(BigNumber(trimmed.to_string()))
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return this number plus one
    pub fn increment(&self) -> Self {
        let mut digits: Vec<u8> = self.0.bytes().collect();
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }

        BigNumber(digits.into_iter().map(char::from).collect())
    }
}

impl Ord for BigNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for BigNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single dot-separated version component
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Numeric component that fits in 64 bits
    UInt(u64),
    /// Numeric component larger than `u64::MAX`
    BigInt(BigNumber),
    /// Non-numeric component
    Str(String),
    /// Wildcard (`x`, `X`, `*`), equal to everything
    Any,
    /// Missing component
    Empty,
}

impl Segment {
    /// Parse a version or pre-release component.
    ///
    /// All-digit text becomes a number, anything else a string. Empty text
    /// yields [`Segment::Empty`].
    pub fn parse(s: &str) -> Segment {
        if s.is_empty() {
            return Segment::Empty;
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            return Segment::number(s);
        }
        Segment::Str(s.to_string())
    }

    /// Parse a constraint pattern component, where `x`, `X` and `*` are wildcards
    pub fn parse_pattern(s: &str) -> Segment {
        if is_wildcard(s) {
            Segment::Any
        } else {
            Segment::parse(s)
        }
    }

    fn number(digits: &str) -> Segment {
        match digits.parse::<u64>() {
            Ok(n) => Segment::UInt(n),
            Err(_) => match BigNumber::from_digits(digits) {
                Some(big) => Segment::BigInt(big),
                None => Segment::Str(digits.to_string()),
            },
        }
    }

    /// Whether this is the identity value of its kind (zero, empty string, missing)
    pub fn is_null(&self) -> bool {
        match self {
            Segment::UInt(n) => *n == 0,
            Segment::BigInt(n) => n.is_zero(),
            Segment::Str(s) => s.is_empty(),
            Segment::Any => false,
            Segment::Empty => true,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Segment::Any)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Segment::Empty)
    }

    /// Return the numeric successor of this segment.
    ///
    /// Missing segments count as zero; strings and wildcards are returned unchanged.
    pub fn increment(&self) -> Segment {
        match self {
            Segment::UInt(n) => match n.checked_add(1) {
                Some(next) => Segment::UInt(next),
                None => Segment::BigInt(BigNumber(n.to_string()).increment()),
            },
            Segment::BigInt(n) => Segment::BigInt(n.increment()),
            Segment::Empty => Segment::UInt(1),
            other => other.clone(),
        }
    }

    /// Compare two segments.
    ///
    /// Numbers compare by magnitude and always sort before strings. A wildcard
    /// is equal to anything, and a missing segment behaves like zero.
    pub fn compare(&self, other: &Segment) -> Ordering {
        match (self, other) {
            (Segment::Any, _) | (_, Segment::Any) => Ordering::Equal,
            (Segment::Empty, Segment::Empty) => Ordering::Equal,
            (Segment::Empty, _) => Segment::UInt(0).compare(other),
            (_, Segment::Empty) => self.compare(&Segment::UInt(0)),
            (Segment::UInt(a), Segment::UInt(b)) => a.cmp(b),
            (Segment::UInt(_), Segment::BigInt(_)) => Ordering::Less,
            (Segment::BigInt(_), Segment::UInt(_)) => Ordering::Greater,
            (Segment::BigInt(a), Segment::BigInt(b)) => a.cmp(b),
            (Segment::Str(a), Segment::Str(b)) => a.cmp(b),
            (Segment::Str(_), _) => Ordering::Greater,
            (_, Segment::Str(_)) => Ordering::Less,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::UInt(n) => write!(f, "{}", n),
            Segment::BigInt(n) => write!(f, "{}", n),
            Segment::Str(s) => f.write_str(s),
            Segment::Any => f.write_str("*"),
            Segment::Empty => Ok(()),
        }
    }
}

/// Check whether a pattern component is a wildcard
pub fn is_wildcard(s: &str) -> bool {
    matches!(s, "x" | "X" | "*")
}

/// Ordered list of segments
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Segments(Vec<Segment>);

impl Segments {
    pub fn new(segments: Vec<Segment>) -> Self {
        Segments(segments)
    }

    /// Split dot-separated text into segments
    pub fn parse(s: &str) -> Self {
        s.split('.').map(Segment::parse).collect()
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.0.get(index)
    }

    /// Strip trailing null segments, so `1.2.0.0` becomes `1.2`
    pub fn normalize(&self) -> Segments {
        let keep = self
            .0
            .iter()
            .rposition(|s| !s.is_null())
            .map_or(0, |i| i + 1);
        Segments(self.0[..keep].to_vec())
    }

    /// Compare position by position, substituting `padding` for the
    /// positions the shorter sequence lacks.
    ///
    /// A sequence ending in a wildcard is padded with wildcards instead, so
    /// `2.0.*` is equal to `2.0.5.1`.
    pub fn compare(&self, other: &Segments, padding: &Segment) -> Ordering {
        let left_padding = self.padding_or(padding);
        let right_padding = other.padding_or(padding);

        for pair in self.0.iter().zip_longest(other.0.iter()) {
            let ordering = match pair {
                EitherOrBoth::Both(l, r) => l.compare(r),
                EitherOrBoth::Left(l) => l.compare(right_padding),
                EitherOrBoth::Right(r) => left_padding.compare(r),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Compare without padding: a present segment outranks an absent one
    pub fn compare_unpadded(&self, other: &Segments) -> Ordering {
        for pair in self.0.iter().zip_longest(other.0.iter()) {
            let ordering = match pair {
                EitherOrBoth::Both(l, r) => l.compare(r),
                EitherOrBoth::Left(_) => Ordering::Greater,
                EitherOrBoth::Right(_) => Ordering::Less,
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    fn padding_or<'a>(&self, padding: &'a Segment) -> &'a Segment {
        match self.0.last() {
            Some(Segment::Any) => &ANY_SEGMENT,
            _ => padding,
        }
    }
}

impl FromIterator<Segment> for Segments {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Segments(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Segments {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Segments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join("."))
    }
}
