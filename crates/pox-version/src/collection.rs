//! Sorting and filtering over lists of versions

use crate::constraint::VersionConstraint;
use crate::version::Version;

/// Sort versions in ascending order
pub fn sort<V: Ord>(versions: &mut [V]) {
    versions.sort();
}

/// Sort versions in descending order
pub fn rsort<V: Ord>(versions: &mut [V]) {
    versions.sort_by(|a, b| b.cmp(a));
}

/// Sort version strings in ascending order, dropping entries that do not parse
pub fn sort_strings(versions: &[&str]) -> Vec<String> {
    sort_strings_by(versions, true)
}

/// Sort version strings in descending order, dropping entries that do not parse
pub fn rsort_strings(versions: &[&str]) -> Vec<String> {
    sort_strings_by(versions, false)
}

fn sort_strings_by(versions: &[&str], ascending: bool) -> Vec<String> {
    let mut parsed: Vec<(Version, usize)> = versions
        .iter()
        .enumerate()
        .filter_map(|(i, v)| match Version::parse(v) {
            Ok(version) => Some((version, i)),
            Err(e) => {
                log::debug!("Skipping {:?}: {}", v, e);
                None
            }
        })
        .collect();

    parsed.sort_by(|(a, _), (b, _)| {
        let cmp = a.cmp(b);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });

    parsed
        .into_iter()
        .map(|(_, i)| versions[i].to_string())
        .collect()
}

/// Return the versions satisfying a constraint, keeping their order
pub fn satisfied_by<'a, V, C>(versions: &'a [V], constraint: &C) -> Vec<&'a V>
where
    C: VersionConstraint<Version = V>,
{
    versions.iter().filter(|v| constraint.check(v)).collect()
}
