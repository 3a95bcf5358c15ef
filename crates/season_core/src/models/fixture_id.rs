//! Fixture identifiers
//!
//! `"{code}-S{season}-D{division}-R{round}-F{index}"`, e.g. `IFC-S3-D1-R2-F1`.
//! Round and index are 1-based. The competition code can never contain `-`,
//! so splitting on the separator is unambiguous.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::CompetitionCode;
use crate::error::FixtureIdError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixtureId {
    pub code: CompetitionCode,
    pub season: u32,
    pub division: u32,
    pub round: u32,
    pub index: u32,
}

impl FixtureId {
    pub fn new(code: CompetitionCode, season: u32, division: u32, round: u32, index: u32) -> Self {
        Self { code, season, division, round, index }
    }
}

impl fmt::Display for FixtureId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}-S{}-D{}-R{}-F{}",
            self.code, self.season, self.division, self.round, self.index
        )
    }
}

/// Parses `"{prefix}{digits}"` without accepting signs, leading zeros or
/// empty digit runs.
fn parse_part(
    raw: &str,
    segment: &str,
    prefix: char,
    part: &'static str,
) -> Result<u32, FixtureIdError> {
    let invalid = || FixtureIdError::InvalidComponent { id: raw.to_string(), part };

    let digits = segment.strip_prefix(prefix).ok_or_else(invalid)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    // One spelling per number: "S03" would alias "S3"
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(invalid());
    }
    digits.parse().map_err(|_| invalid())
}

impl FromStr for FixtureId {
    type Err = FixtureIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = raw.split('-').collect();
        let [code, season, division, round, index] = parts.as_slice() else {
            return Err(FixtureIdError::Malformed(raw.to_string()));
        };

        let code = CompetitionCode::parse(code)
            .map_err(|_| FixtureIdError::InvalidComponent { id: raw.to_string(), part: "code" })?;
        let season = parse_part(raw, season, 'S', "season")?;
        let division = parse_part(raw, division, 'D', "division")?;
        let round = parse_part(raw, round, 'R', "round")?;
        let index = parse_part(raw, index, 'F', "index")?;

        if round == 0 {
            return Err(FixtureIdError::InvalidComponent { id: raw.to_string(), part: "round" });
        }
        if index == 0 {
            return Err(FixtureIdError::InvalidComponent { id: raw.to_string(), part: "index" });
        }

        Ok(Self { code, season, division, round, index })
    }
}

impl Serialize for FixtureId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FixtureId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
