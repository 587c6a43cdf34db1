//! String-level helpers over [`Version`].
//!
//! The list helpers (`sort_versions`, `find_latest_compatible`) silently drop
//! entries that do not parse. Matrix keys and user-supplied lists routinely
//! contain labels like `latest` next to real versions, and callers want the
//! ordered subset rather than an error.

use std::cmp::Ordering;

use super::error::InvalidVersionError;
use super::types::Version;

/// Parse a version string.
pub fn parse_version(input: &str) -> Result<Version, InvalidVersionError> {
    Version::parse(input)
}

/// Check whether a string parses as a version. Never fails.
pub fn is_version_valid(input: &str) -> bool {
    Version::parse(input).is_ok()
}

/// Compare two version strings.
pub fn compare_versions(a: &str, b: &str) -> Result<Ordering, InvalidVersionError> {
    Ok(Version::parse(a)?.cmp(&Version::parse(b)?))
}

/// True when `current >= minimum_required`.
pub fn is_compatible(current: &str, minimum_required: &str) -> Result<bool, InvalidVersionError> {
    Ok(compare_versions(current, minimum_required)? != Ordering::Less)
}

/// Sort version strings, dropping the ones that do not parse.
///
/// Ascending order is stable. `reverse = true` returns exactly the reversal
/// of the ascending result.
pub fn sort_versions<S, I>(versions: I, reverse: bool) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed: Vec<(Version, S)> = versions
        .into_iter()
        .filter_map(|v| Version::parse(v.as_ref()).ok().map(|parsed| (parsed, v)))
        .collect();

    parsed.sort_by(|(a, _), (b, _)| a.cmp(b));
    if reverse {
        parsed.reverse();
    }
    parsed.into_iter().map(|(_, v)| v).collect()
}

/// Pick the newest version within optional inclusive bounds.
///
/// Entries that do not parse are ignored. On ties the first occurrence wins.
pub fn find_latest_compatible<S, I>(
    versions: I,
    min_version: Option<&Version>,
    max_version: Option<&Version>,
) -> Option<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut best: Option<(Version, S)> = None;

    for candidate in versions {
        let Ok(parsed) = Version::parse(candidate.as_ref()) else {
            continue;
        };
        if min_version.is_some_and(|min| parsed < *min) {
            continue;
        }
        if max_version.is_some_and(|max| parsed > *max) {
            continue;
        }
        if best.as_ref().is_none_or(|(current, _)| parsed > *current) {
            best = Some((parsed, candidate));
        }
    }

    best.map(|(_, v)| v)
}

/// Extract `major.minor` from a version string (`8.0.0.rc1` -> `8.0`).
pub fn get_major_minor(input: &str) -> Result<String, InvalidVersionError> {
    let version = Version::parse(input)?;
    Ok(format!("{}.{}", version.major(), version.minor()))
}
