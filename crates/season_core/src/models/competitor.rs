use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Opaque reference to a fighter already assigned to a division.
///
/// The scheduler never looks inside it; ordering is only used to build
/// normalized pairing keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompetitorId(String);

impl CompetitorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompetitorId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CompetitorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CompetitorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Longest accepted competition short code.
pub const MAX_CODE_LEN: usize = 16;

/// Short competition code embedded in every fixture identifier (e.g. "IFC").
///
/// Only ASCII alphanumerics and `_` are accepted so the code can never
/// contain the `-` separator used by [`super::FixtureId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompetitionCode(String);

impl CompetitionCode {
    pub fn parse(raw: &str) -> Result<Self, ScheduleError> {
        if raw.trim().is_empty() {
            return Err(ScheduleError::MissingCompetitionCode);
        }

        let valid = raw.len() <= MAX_CODE_LEN
            && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(ScheduleError::InvalidCompetitionCode { code: raw.to_string() });
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompetitionCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CompetitionCode {
    type Error = ScheduleError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<CompetitionCode> for String {
    fn from(code: CompetitionCode) -> Self {
        code.0
    }
}
