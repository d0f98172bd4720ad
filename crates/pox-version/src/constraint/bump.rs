//! Upper bounds implied by the shorthand range operators
//!
//! Each bump works on the leading run of explicitly given numeric segments
//! (`specified`). The result keeps the input length, increments one segment
//! and resets every later segment to zero. Without any specified segment
//! there is no bound and `None` is returned.

use crate::segment::{Segment, Segments};

/// `~1.2.3` is below `1.3.0`, `~1.2` below `1.3.0`, `~1` below `2.0.0`
pub fn tilde(segments: &Segments, specified: usize) -> Option<Segments> {
    match specified {
        0 => None,
        1 => Some(bump_at(segments, 0)),
        _ => Some(bump_at(segments, 1)),
    }
}

/// `^1.2.3` is below `2.0.0`, `^0.2.3` below `0.3.0`, `^0.0.3` below `0.0.4`
pub fn caret(segments: &Segments, specified: usize) -> Option<Segments> {
    if specified == 0 {
        return None;
    }

    let index = segments
        .iter()
        .take(specified)
        .position(|s| !s.is_null())
        .unwrap_or(specified - 1);
    Some(bump_at(segments, index))
}

/// `~> 1.2.3` is below `1.3.0`, `~> 1.2` below `2.0`, `~> 1` below `2`
pub fn pessimistic(segments: &Segments, specified: usize) -> Option<Segments> {
    match specified {
        0 => None,
        1 => Some(bump_at(segments, 0)),
        n => Some(bump_at(segments, n - 2)),
    }
}

fn bump_at(segments: &Segments, index: usize) -> Segments {
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| match i.cmp(&index) {
            std::cmp::Ordering::Less => segment.clone(),
            std::cmp::Ordering::Equal => segment.increment(),
            std::cmp::Ordering::Greater => Segment::UInt(0),
        })
        .collect()
}
