//! SPIR revisions and revision gating.
//!
//! Every piece of the type vocabulary (primitive kinds, address spaces,
//! compound kinds) reports the first revision that accepts it through
//! [`Versioned`]. Support is then a single comparison, so adding a revision
//! means adding a variant and updating the `since` rows, never new control
//! flow in the encoder.

use std::fmt;
use std::str::FromStr;

/// A SPIR target revision.
///
/// Revisions are totally ordered; a later revision accepts everything an
/// earlier one does.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpirVersion {
    /// SPIR 1.2 (OpenCL C 1.2).
    #[default]
    V1_2,
    /// SPIR 2.0 (OpenCL C 2.0): atomics, blocks, pipes, device-side enqueue
    /// handles and the generic address space.
    V2_0,
}

impl SpirVersion {
    /// All known revisions, oldest first.
    pub const ALL: [SpirVersion; 2] = [SpirVersion::V1_2, SpirVersion::V2_0];

    /// The bare revision number, e.g. `"1.2"`.
    pub const fn number(self) -> &'static str {
        match self {
            SpirVersion::V1_2 => "1.2",
            SpirVersion::V2_0 => "2.0",
        }
    }

    /// The label used in diagnostics, e.g. `"SPIR 1.2"`.
    pub const fn label(self) -> &'static str {
        match self {
            SpirVersion::V1_2 => "SPIR 1.2",
            SpirVersion::V2_0 => "SPIR 2.0",
        }
    }

    /// Check whether `item` is part of this revision's vocabulary.
    #[inline]
    pub fn supports<T: Versioned + ?Sized>(self, item: &T) -> bool {
        self >= item.since()
    }
}

impl fmt::Display for SpirVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a revision string is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown SPIR version `{0}`, expected `1.2` or `2.0`")]
pub struct ParseVersionError(String);

impl FromStr for SpirVersion {
    type Err = ParseVersionError;

    /// Accepts both the bare number (`"2.0"`) and the label (`"SPIR 2.0"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_prefix("SPIR").map_or(trimmed, str::trim_start);

        SpirVersion::ALL
            .into_iter()
            .find(|v| v.number() == number)
            .ok_or_else(|| ParseVersionError(s.to_string()))
    }
}

/// Something whose availability depends on the target revision.
pub trait Versioned {
    /// The first revision that accepts this item.
    fn since(&self) -> SpirVersion;
}

/// Check whether `item` may appear in a prototype targeting `version`.
#[inline]
pub fn is_supported<T: Versioned + ?Sized>(item: &T, version: SpirVersion) -> bool {
    version.supports(item)
}
