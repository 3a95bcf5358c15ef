//! Fixtures: one scheduled pairing within a round.
//!
//! A fixture is either `Scheduled` (as produced by the generator) or
//! `Completed` (after the result workflow has run). On the wire both are the
//! same flat record:
//!
//! ```json
//! { "fighter1": "a", "fighter2": "b", "winner": null,
//!   "fightIdentifier": "IFC-S3-D1-R1-F1", "date": null, "isSimulated": false,
//!   "fighterStats": [], "fightStatus": "scheduled" }
//! ```
//!
//! `winner: null` together with `fightStatus: "scheduled"` is the sentinel
//! downstream readers use for "not yet played", so the conversion below is
//! strict in both directions.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CompetitorId, FixtureId};
use crate::error::{FixtureError, FixtureShapeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FightStatus {
    Scheduled,
    Completed,
}

/// Per-fighter statistics attached to a completed fight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterStat {
    pub fighter_id: CompetitorId,
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
}

/// Outcome recorded against a fixture by the result workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct FightResult {
    pub winner: CompetitorId,
    pub date: DateTime<Utc>,
    pub is_simulated: bool,
    pub fighter_stats: Vec<FighterStat>,
}

impl FightResult {
    pub fn new(winner: CompetitorId, date: DateTime<Utc>) -> Self {
        Self { winner, date, is_simulated: false, fighter_stats: Vec::new() }
    }

    pub fn simulated(mut self) -> Self {
        self.is_simulated = true;
        self
    }

    pub fn with_stats(mut self, stats: Vec<FighterStat>) -> Self {
        self.fighter_stats = stats;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "FixtureRecord", try_from = "FixtureRecord")]
pub enum Fixture {
    Scheduled {
        id: FixtureId,
        fighter1: CompetitorId,
        fighter2: CompetitorId,
    },
    Completed {
        id: FixtureId,
        fighter1: CompetitorId,
        fighter2: CompetitorId,
        result: FightResult,
    },
}

impl Fixture {
    /// New unresolved fixture. Callers guarantee `fighter1 != fighter2`.
    pub fn scheduled(id: FixtureId, fighter1: CompetitorId, fighter2: CompetitorId) -> Self {
        debug_assert_ne!(fighter1, fighter2);
        Fixture::Scheduled { id, fighter1, fighter2 }
    }

    pub fn id(&self) -> &FixtureId {
        match self {
            Fixture::Scheduled { id, .. } | Fixture::Completed { id, .. } => id,
        }
    }

    pub fn fighter1(&self) -> &CompetitorId {
        match self {
            Fixture::Scheduled { fighter1, .. } | Fixture::Completed { fighter1, .. } => fighter1,
        }
    }

    pub fn fighter2(&self) -> &CompetitorId {
        match self {
            Fixture::Scheduled { fighter2, .. } | Fixture::Completed { fighter2, .. } => fighter2,
        }
    }

    pub fn status(&self) -> FightStatus {
        match self {
            Fixture::Scheduled { .. } => FightStatus::Scheduled,
            Fixture::Completed { .. } => FightStatus::Completed,
        }
    }

    pub fn result(&self) -> Option<&FightResult> {
        match self {
            Fixture::Scheduled { .. } => None,
            Fixture::Completed { result, .. } => Some(result),
        }
    }

    pub fn winner(&self) -> Option<&CompetitorId> {
        self.result().map(|r| &r.winner)
    }

    pub fn involves(&self, competitor: &CompetitorId) -> bool {
        self.fighter1() == competitor || self.fighter2() == competitor
    }

    /// Unordered pair, smaller id first. `{A,B}` and `{B,A}` give the same key.
    pub fn pairing_key(&self) -> (&CompetitorId, &CompetitorId) {
        let (a, b) = (self.fighter1(), self.fighter2());
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Moves a scheduled fixture to `Completed`.
    pub fn complete(&mut self, result: FightResult) -> Result<(), FixtureError> {
        let (id, fighter1, fighter2) = match self {
            Fixture::Completed { id, .. } => return Err(FixtureError::AlreadyCompleted(id.clone())),
            Fixture::Scheduled { id, fighter1, fighter2 } => {
                (id.clone(), fighter1.clone(), fighter2.clone())
            }
        };

        if !self.involves(&result.winner) {
            return Err(FixtureError::WinnerNotInFixture { id, winner: result.winner });
        }

        *self = Fixture::Completed { id, fighter1, fighter2, result };
        Ok(())
    }
}

/// Flat wire shape shared by both fixture states.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureRecord {
    fighter1: CompetitorId,
    fighter2: CompetitorId,
    winner: Option<CompetitorId>,
    fight_identifier: FixtureId,
    date: Option<DateTime<Utc>>,
    #[serde(default)]
    is_simulated: bool,
    #[serde(default)]
    fighter_stats: Vec<FighterStat>,
    fight_status: FightStatus,
}

impl From<Fixture> for FixtureRecord {
    fn from(fixture: Fixture) -> Self {
        match fixture {
            Fixture::Scheduled { id, fighter1, fighter2 } => FixtureRecord {
                fighter1,
                fighter2,
                winner: None,
                fight_identifier: id,
                date: None,
                is_simulated: false,
                fighter_stats: Vec::new(),
                fight_status: FightStatus::Scheduled,
            },
            Fixture::Completed { id, fighter1, fighter2, result } => FixtureRecord {
                fighter1,
                fighter2,
                winner: Some(result.winner),
                fight_identifier: id,
                date: Some(result.date),
                is_simulated: result.is_simulated,
                fighter_stats: result.fighter_stats,
                fight_status: FightStatus::Completed,
            },
        }
    }
}

impl TryFrom<FixtureRecord> for Fixture {
    type Error = FixtureShapeError;

    fn try_from(record: FixtureRecord) -> Result<Self, Self::Error> {
        let id = record.fight_identifier;
        if record.fighter1 == record.fighter2 {
            return Err(FixtureShapeError::SelfPairing(id.to_string()));
        }

        match record.fight_status {
            FightStatus::Scheduled => {
                let has_result = record.winner.is_some()
                    || record.date.is_some()
                    || record.is_simulated
                    || !record.fighter_stats.is_empty();
                if has_result {
                    return Err(FixtureShapeError::ResultOnScheduled(id.to_string()));
                }
                Ok(Fixture::Scheduled { id, fighter1: record.fighter1, fighter2: record.fighter2 })
            }
            FightStatus::Completed => {
                let winner =
                    record.winner.ok_or_else(|| FixtureShapeError::MissingWinner(id.to_string()))?;
                let date = record.date.ok_or_else(|| FixtureShapeError::MissingDate(id.to_string()))?;
                if winner != record.fighter1 && winner != record.fighter2 {
                    return Err(FixtureShapeError::WinnerNotInFixture {
                        id: id.to_string(),
                        winner: winner.to_string(),
                    });
                }
                Ok(Fixture::Completed {
                    id,
                    fighter1: record.fighter1,
                    fighter2: record.fighter2,
                    result: FightResult {
                        winner,
                        date,
                        is_simulated: record.is_simulated,
                        fighter_stats: record.fighter_stats,
                    },
                })
            }
        }
    }
}
