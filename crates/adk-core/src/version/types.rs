//! The parsed version value and its ordering.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use super::error::InvalidVersionError;
use super::parse;

/// Pre-release stage, ordered `Alpha < Beta < ReleaseCandidate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreStage {
    /// `a`, `alpha`
    Alpha,
    /// `b`, `beta`
    Beta,
    /// `rc`, `c`, `pre`, `preview`
    ReleaseCandidate,
}

impl PreStage {
    /// Canonical short spelling used when re-serializing.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "a",
            Self::Beta => "b",
            Self::ReleaseCandidate => "rc",
        }
    }
}

/// A pre-release marker such as `rc1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PreRelease {
    pub stage: PreStage,
    pub number: u64,
}

/// One dot-separated piece of a local label (`+ubuntu.1`).
///
/// Text segments sort before numeric ones; numbers compare numerically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LocalSegment {
    Text(String),
    Number(u64),
}

impl fmt::Display for LocalSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A parsed version.
///
/// Equality and ordering are structural: `1.0` equals `1.0.0`, `8.0.RC1`
/// equals `8.0.0rc1`. The original spelling is kept and returned by
/// [`Version::as_str`] so error messages echo what the matrix author wrote;
/// [`Display`](fmt::Display) renders the normalized form.
#[derive(Debug, Clone)]
pub struct Version {
    pub(crate) raw: String,
    pub(crate) epoch: u64,
    pub(crate) release: Vec<u64>,
    pub(crate) pre: Option<PreRelease>,
    pub(crate) post: Option<u64>,
    pub(crate) dev: Option<u64>,
    pub(crate) local: Option<Vec<LocalSegment>>,
}

/// Sentinel wrapper used to build the comparison key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Bound<T> {
    NegInf,
    Value(T),
    PosInf,
}

type CmpKey<'a> = (
    u64,
    &'a [u64],
    Bound<PreRelease>,
    Bound<u64>,
    Bound<u64>,
    Option<&'a [LocalSegment]>,
);

impl Version {
    /// Parse a version string.
    pub fn parse(input: &str) -> Result<Self, InvalidVersionError> {
        parse::parse(input)
    }

    /// The string this version was parsed from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Release segments as written (trailing zeros preserved).
    pub fn release(&self) -> &[u64] {
        &self.release
    }

    pub const fn pre(&self) -> Option<PreRelease> {
        self.pre
    }

    pub const fn post(&self) -> Option<u64> {
        self.post
    }

    pub const fn dev(&self) -> Option<u64> {
        self.dev
    }

    pub fn local(&self) -> Option<&[LocalSegment]> {
        self.local.as_deref()
    }

    /// First release segment.
    pub fn major(&self) -> u64 {
        self.release.first().copied().unwrap_or(0)
    }

    /// Second release segment, zero when absent.
    pub fn minor(&self) -> u64 {
        self.release.get(1).copied().unwrap_or(0)
    }

    /// True for versions carrying a pre-release or dev marker.
    pub const fn is_prerelease(&self) -> bool {
        self.pre.is_some() || self.dev.is_some()
    }

    fn trimmed_release(&self) -> &[u64] {
        let end = self
            .release
            .iter()
            .rposition(|&seg| seg != 0)
            .map_or(0, |idx| idx + 1);
        &self.release[..end]
    }

    fn cmp_key(&self) -> CmpKey<'_> {
        // A bare dev release (1.0.dev0) sorts before any pre-release of 1.0.
        let pre = match (self.pre, self.post, self.dev) {
            (None, None, Some(_)) => Bound::NegInf,
            (None, _, _) => Bound::PosInf,
            (Some(pre), _, _) => Bound::Value(pre),
        };
        let post = self.post.map_or(Bound::NegInf, Bound::Value);
        let dev = self.dev.map_or(Bound::PosInf, Bound::Value);

        (
            self.epoch,
            self.trimmed_release(),
            pre,
            post,
            dev,
            self.local.as_deref(),
        )
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
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
        self.cmp_key().cmp(&other.cmp_key())
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cmp_key().hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch != 0 {
            write!(f, "{}!", self.epoch)?;
        }

        let mut segments = self.release.iter();
        if let Some(first) = segments.next() {
            write!(f, "{first}")?;
        }
        for seg in segments {
            write!(f, ".{seg}")?;
        }

        if let Some(pre) = self.pre {
            write!(f, "{}{}", pre.stage.as_str(), pre.number)?;
        }
        if let Some(post) = self.post {
            write!(f, ".post{post}")?;
        }
        if let Some(dev) = self.dev {
            write!(f, ".dev{dev}")?;
        }
        if let Some(local) = &self.local {
            f.write_str("+")?;
            for (idx, seg) in local.iter().enumerate() {
                if idx > 0 {
                    f.write_str(".")?;
                }
                write!(f, "{seg}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = InvalidVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = InvalidVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Version {
    type Error = InvalidVersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
