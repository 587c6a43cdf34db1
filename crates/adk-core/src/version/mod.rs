//! Version ordering for CANN, driver and framework versions.
//!
//! Versions follow the PEP 440 shape used by the Ascend release stream:
//! dotted release segments with optional pre-release (`rc1`, `a2`, `beta`),
//! post-release, development-release and local labels. Parsing is lenient
//! about spelling (`v` prefix, `-`/`_`/`.` separators, case) and strict about
//! structure, so `24.1.rc1`, `8.0.RC3` and `2.4.0.post2` all parse while
//! `1.0.0--` does not.
//!
//! # Layout
//!
//! - [`Version`] is the parsed, totally ordered value
//! - `parse` holds the grammar
//! - `ops` holds list helpers that tolerate invalid entries

mod error;
mod ops;
mod parse;
mod types;

pub use error::InvalidVersionError;
pub use ops::{
    compare_versions, find_latest_compatible, get_major_minor, is_compatible, is_version_valid,
    parse_version, sort_versions,
};
pub use types::{LocalSegment, PreRelease, PreStage, Version};
