//! # Canonical Identifiers
//!
//! Newtype wrappers for the identifiers every MGE record carries. Upstream
//! catalogs are inconsistent about process ids: some tables store them as
//! integers, others as strings. [`ProcessId`] normalizes both to a single
//! canonical string at the boundary, so that `2024` and `"2024"` compare
//! equal everywhere downstream without ad hoc conversions at each check.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::MgeError;

/// Canonical electoral process identifier.
///
/// Always holds the printed form of the id with surrounding whitespace
/// removed. Deserializes from either a string or an unsigned integer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProcessId(String);

impl ProcessId {
    /// Parse a process id, rejecting empty or whitespace-only input.
    pub fn parse(s: &str) -> Result<Self, MgeError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MgeError::Parse("process id must not be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Access the canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProcessId {
    fn from(s: &str) -> Self {
        Self(s.trim().to_string())
    }
}

impl From<String> for ProcessId {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<u32> for ProcessId {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl From<u64> for ProcessId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl std::fmt::Display for ProcessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProcessId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Self::from(n)),
            Raw::Text(s) => Self::parse(&s).map_err(serde::de::Error::custom),
        }
    }
}

/// Numeric code of a federative entity (state).
///
/// Rendered zero-padded to two digits, as in `30` or `07`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateCode(pub u8);

impl StateCode {
    /// The raw numeric code.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<u8> for StateCode {
    fn from(n: u8) -> Self {
        Self(n)
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}
