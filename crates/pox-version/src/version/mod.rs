//! Relaxed versions with any number of numeric segments
//!
//! Accepts `1`, `1.2.3.4`, `v1.2`, `17.03.0-ce`, `1.7rc2` and similar loosely
//! structured version strings. Omitted trailing segments compare as zero.

mod constraints;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::constraint::bump;
use crate::error::{Error, Result};
use crate::prerelease;
use crate::segment::{Segment, Segments};

pub use constraints::{Constraint, Constraints};

lazy_static! {
    static ref VERSION_RE: Regex = Regex::new(concat!(
        r"^v?(?P<release>[0-9]+(?:\.[0-9]+)*)",
        r"(?:-(?P<numeric_pre>[0-9]+[0-9A-Za-z\-~]*(?:\.[0-9A-Za-z\-~]+)*)",
        r"|-?(?P<named_pre>[A-Za-z\-~]+[0-9A-Za-z\-~]*(?:\.[0-9A-Za-z\-~]+)*))?",
        r"(?:\+(?P<build>[0-9A-Za-z\-~]+(?:\.[0-9A-Za-z\-~]+)*))?$",
    ))
    .unwrap();
}

/// A parsed relaxed version
#[derive(Debug, Clone)]
pub struct Version {
    segments: Segments,
    pre_release: String,
    build_metadata: String,
    original: String,
}

/// Parse a relaxed version string
pub fn parse(version: &str) -> Result<Version> {
    Version::parse(version)
}

impl Version {
    /// Parse a relaxed version string
    pub fn parse(version: &str) -> Result<Self> {
        let caps = VERSION_RE.captures(version).ok_or_else(|| {
            log::debug!("Rejected version {:?}", version);
            Error::MalformedVersion(version.to_string())
        })?;

        let release_end = caps.name("release").map_or(0, |m| m.end());
        let segments = Segments::parse(&caps["release"]);
        // A lone `-` right after the release is a separator, not a tag
        let pre_release = match (caps.name("numeric_pre"), caps.name("named_pre")) {
            (Some(m), _) => m.as_str(),
            (None, Some(m)) if m.as_str() == "-" && m.start() == release_end => "",
            (None, Some(m)) => m.as_str(),
            (None, None) => "",
        };
        let build_metadata = caps.name("build").map_or("", |m| m.as_str());

        Ok(Version {
            segments,
            pre_release: pre_release.to_string(),
            build_metadata: build_metadata.to_string(),
            original: version.to_string(),
        })
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

    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    pub fn pre_release(&self) -> &str {
        &self.pre_release
    }

    pub fn build_metadata(&self) -> &str {
        &self.build_metadata
    }

    /// The version exactly as it was given, including any `v` prefix
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Compare two versions; build metadata is ignored
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

    /// Next version outside the tilde range: `1.2.3` gives `1.3.0`, `1` gives `2`
    pub fn tilde_bump(&self) -> Version {
        self.bumped(bump::tilde(&self.segments, self.segments.len()))
    }

    /// Next version outside the caret range: `1.2.3` gives `2.0.0`, `0.0.3` gives `0.0.4`
    pub fn caret_bump(&self) -> Version {
        self.bumped(bump::caret(&self.segments, self.segments.len()))
    }

    /// Next version outside the pessimistic range: `1.2.3` gives `1.3.0`, `1.2` gives `2.0`
    pub fn pessimistic_bump(&self) -> Version {
        self.bumped(bump::pessimistic(&self.segments, self.segments.len()))
    }
}

/// Order two versions given as segments and pre-release tag.
///
/// Identical parts are equal without further work. Otherwise trailing zero
/// segments are dropped, the release segments are compared with zero
/// padding, and ties are broken by pre-release precedence.
pub(crate) fn compare_parts(
    segments: &Segments,
    pre_release: &str,
    other_segments: &Segments,
    other_pre_release: &str,
) -> Ordering {
    if segments == other_segments && pre_release == other_pre_release {
        return Ordering::Equal;
    }

    let ordering = segments
        .normalize()
        .compare(&other_segments.normalize(), &Segment::UInt(0));
    if ordering != Ordering::Equal {
        return ordering;
    }
    prerelease::compare(pre_release, other_pre_release)
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
    /// Canonical form: no `v` prefix and no leading zeros (`v17.03.0-ce` is `17.3.0-ce`)
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
