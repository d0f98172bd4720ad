//! Strict semantic versions (`major.minor.patch`, SemVer 2.0)

mod constraints;
mod options;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::constraint::bump;
use crate::error::{Error, Result};
use crate::segment::{Segment, Segments};
use crate::version::compare_parts;

pub use constraints::{Constraint, Constraints};
pub use options::ConstraintOptions;

lazy_static! {
    // semver.org suggested pattern, with an optional `v` prefix
    static ref VERSION_RE: Regex = Regex::new(concat!(
        r"^v?(?P<major>0|[1-9][0-9]*)\.(?P<minor>0|[1-9][0-9]*)\.(?P<patch>0|[1-9][0-9]*)",
        r"(?:-(?P<pre>(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
        r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
        r"(?:\+(?P<build>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    ))
    .unwrap();
}

/// A parsed semantic version
#[derive(Debug, Clone)]
pub struct Version {
    segments: Segments,
    pre_release: String,
    build_metadata: String,
    original: String,
}

/// Parse a strict semantic version
pub fn parse(version: &str) -> Result<Version> {
    Version::parse(version)
}

impl Version {
    pub fn parse(version: &str) -> Result<Self> {
        let caps = VERSION_RE.captures(version).ok_or_else(|| {
            log::debug!("Rejected semantic version {:?}", version);
            Error::MalformedVersion(version.to_string())
        })?;

        let segments = ["major", "minor", "patch"]
            .iter()
            .map(|name| Segment::parse(&caps[*name]))
            .collect();

        Ok(Version {
            segments,
            pre_release: caps.name("pre").map_or("", |m| m.as_str()).to_string(),
            build_metadata: caps.name("build").map_or("", |m| m.as_str()).to_string(),
            original: version.to_string(),
        })
    }

    fn segment(&self, index: usize) -> &Segment {
        &self.segments.as_slice()[index]
    }

    pub fn major(&self) -> &Segment {
        self.segment(0)
    }

    pub fn minor(&self) -> &Segment {
        self.segment(1)
    }

    pub fn patch(&self) -> &Segment {
        self.segment(2)
    }

    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    pub fn pre_release(&self) -> &str {
        &self.pre_release
    }

    pub fn build_metadata(&self) -> &str {
        &self.build_metadata
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    pub fn compare(&self, other: &Version) -> Ordering {
        compare_parts(
            &self.segments,
            &self.pre_release,
            &other.segments,
            &other.pre_release,
        )
    }

    pub fn equal(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Equal
    }

    pub fn less_than(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn greater_than(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn less_or_equal(&self, other: &Version) -> bool {
        self.compare(other) != Ordering::Greater
    }

    pub fn greater_or_equal(&self, other: &Version) -> bool {
        self.compare(other) != Ordering::Less
    }

    /// `1.2.3` gives `1.3.0`
    pub fn tilde_bump(&self) -> Version {
        self.bumped(bump::tilde(&self.segments, 3))
    }

    /// `1.2.3` gives `2.0.0`, `0.2.3` gives `0.3.0`, `0.0.3` gives `0.0.4`
    pub fn caret_bump(&self) -> Version {
        self.bumped(bump::caret(&self.segments, 3))
    }

    fn bumped(&self, segments: Option<Segments>) -> Version {
        let segments = segments.unwrap_or_else(|| self.segments.clone());
        Version {
            original: segments.to_string(),
            segments,
            pre_release: String::new(),
            build_metadata: String::new(),
        }
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata)?;
        }
        Ok(())
    }
}
