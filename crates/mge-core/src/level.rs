//! # Geographic Reading Level
//!
//! Defines the `GeoLevel` enum: the single reading level a case file is
//! declared at. Every `match` on `GeoLevel` is exhaustive, so adding a level
//! forces the level validator to state its rules for it.
//!
//! The five-level taxonomy keeps federal and local districts as distinct
//! levels. A collapsed four-level taxonomy (one generic "district") exists in
//! some upstream material; it is intentionally not representable here.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MgeError;

/// The reading level of an MGE case file, from widest to narrowest.
///
/// | Level | Focus |
/// |-------|-------|
/// | State | whole federative entity, panoramic catalog |
/// | FederalDistrict | one federal electoral district |
/// | LocalDistrict | one local electoral district |
/// | Municipality | one municipality |
/// | Precinct | one electoral section |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeoLevel {
    /// Federative entity (state).
    State,
    /// Federal electoral district.
    FederalDistrict,
    /// Local electoral district.
    LocalDistrict,
    /// Municipality.
    Municipality,
    /// Electoral section (precinct).
    Precinct,
}

/// Total number of reading levels.
pub const GEO_LEVEL_COUNT: usize = 5;

impl GeoLevel {
    /// Returns all levels from widest to narrowest.
    pub fn all_levels() -> &'static [GeoLevel] {
        &[
            Self::State,
            Self::FederalDistrict,
            Self::LocalDistrict,
            Self::Municipality,
            Self::Precinct,
        ]
    }

    /// Returns the kebab-case tag used in identities and serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::State => "state",
            Self::FederalDistrict => "federal-district",
            Self::LocalDistrict => "local-district",
            Self::Municipality => "municipality",
            Self::Precinct => "precinct",
        }
    }

    /// Whether federal and local districts may appear together at this level.
    ///
    /// `State` holds them as a catalog; `Precinct` pins a single section
    /// that both districts must match.
    pub fn allows_district_coexistence(&self) -> bool {
        matches!(self, Self::State | Self::Precinct)
    }
}

impl std::fmt::Display for GeoLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeoLevel {
    type Err = MgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "state" => Ok(Self::State),
            "federal-district" => Ok(Self::FederalDistrict),
            "local-district" => Ok(Self::LocalDistrict),
            "municipality" => Ok(Self::Municipality),
            "precinct" => Ok(Self::Precinct),
            other => Err(MgeError::Parse(format!("unknown geographic level: {other:?}"))),
        }
    }
}
