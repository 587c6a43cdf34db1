//! Identifiers the tooling knows about.
//!
//! The matrix itself stores plain strings, so a new OS or chip can be added
//! to the data without a release. These enums exist for adapters: help text,
//! argument parsing and architecture alias normalization.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Returned by the catalog `FromStr` impls.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'. Known values: {known}")]
pub struct UnknownValueError {
    pub kind: &'static str,
    pub value: String,
    pub known: String,
}

macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every known value, in catalog order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Identifier as it appears in the matrix.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            fn lookup(raw: &str) -> Result<Self, UnknownValueError> {
                let raw = raw.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|item| item.as_str().eq_ignore_ascii_case(raw))
                    .ok_or_else(|| UnknownValueError {
                        kind: $kind,
                        value: raw.to_string(),
                        known: Self::ALL
                            .iter()
                            .map(|item| item.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

catalog_enum! {
    /// Host operating systems with published toolkit builds.
    SupportedOs, "operating system" {
        Ubuntu2004 => "ubuntu20.04",
        Ubuntu2204 => "ubuntu22.04",
        Ubuntu2404 => "ubuntu24.04",
        OpenEuler2203 => "openEuler22.03",
        OpenEuler2403 => "openEuler24.03",
        KylinV10 => "kylinV10",
    }
}

catalog_enum! {
    /// Accelerator chip families.
    NpuType, "NPU type" {
        Ascend910A => "910A",
        Ascend910B => "910B",
        Ascend910B2 => "910B2",
        Ascend910B3 => "910B3",
        Ascend310P => "310P",
        Ascend310 => "310",
    }
}

catalog_enum! {
    /// CPU architectures.
    CpuArch, "architecture" {
        X86_64 => "x86_64",
        Aarch64 => "aarch64",
    }
}

catalog_enum! {
    /// Deep-learning frameworks with NPU builds.
    FrameworkKind, "framework" {
        PyTorch => "pytorch",
        MindSpore => "mindspore",
    }
}

impl CpuArch {
    /// Map a `uname -m` or package-manager spelling onto the canonical name.
    pub fn normalize(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "x86_64" | "amd64" | "x64" => Some(Self::X86_64),
            "aarch64" | "arm64" => Some(Self::Aarch64),
            _ => None,
        }
    }
}

impl FromStr for SupportedOs {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl FromStr for NpuType {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl FromStr for CpuArch {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s).map_or_else(|| Self::lookup(s), Ok)
    }
}

impl FromStr for FrameworkKind {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}
