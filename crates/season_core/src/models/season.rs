use serde::{Deserialize, Serialize};

use super::{CompetitionCode, CompetitorId, FightResult, Fixture, FixtureId, Round};
use crate::error::FixtureError;

/// Per-division block of the season document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionSchedule {
    pub division_number: u32,
    pub name: String,
    pub total_rounds: u32,
    /// Always 0 when the season is created
    pub current_round: u32,
    pub rounds: Vec<Round>,
}

impl DivisionSchedule {
    pub fn new(division_number: u32, name: String, rounds: Vec<Round>) -> Self {
        Self {
            division_number,
            name,
            total_rounds: rounds.len() as u32,
            current_round: 0,
            rounds,
        }
    }

    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.rounds.iter().flat_map(|r| r.fights.iter())
    }

    pub fn fixture_count(&self) -> usize {
        self.rounds.iter().map(|r| r.fights.len()).sum()
    }

    /// Distinct competitors appearing in this division, sorted.
    pub fn competitors(&self) -> Vec<&CompetitorId> {
        let mut seen: Vec<&CompetitorId> =
            self.fixtures().flat_map(|f| [f.fighter1(), f.fighter2()]).collect();
        seen.sort();
        seen.dedup();
        seen
    }
}

/// The document persisted by the season-creation workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonDocument {
    pub schema_version: u8,
    pub competition_code: CompetitionCode,
    pub season_number: u32,
    pub divisions: Vec<DivisionSchedule>,
    /// SHA-256 over the pairings and identifiers (see `schedule::digest`)
    pub digest: String,
}

impl SeasonDocument {
    pub fn division(&self, division_number: u32) -> Option<&DivisionSchedule> {
        self.divisions.iter().find(|d| d.division_number == division_number)
    }

    pub fn fixture_count(&self) -> usize {
        self.divisions.iter().map(DivisionSchedule::fixture_count).sum()
    }

    /// Looks a fixture up by identifier: division, then round, then index.
    pub fn fixture(&self, id: &FixtureId) -> Option<&Fixture> {
        if id.code != self.competition_code || id.season != self.season_number {
            return None;
        }

        let round = self.division(id.division)?.rounds.get(id.round.checked_sub(1)? as usize)?;
        let fixture = round.fights.get(id.index.checked_sub(1)? as usize)?;
        (fixture.id() == id).then_some(fixture)
    }

    fn fixture_mut(&mut self, id: &FixtureId) -> Option<&mut Fixture> {
        if id.code != self.competition_code || id.season != self.season_number {
            return None;
        }

        let division = self.divisions.iter_mut().find(|d| d.division_number == id.division)?;
        let round = division.rounds.get_mut(id.round.checked_sub(1)? as usize)?;
        let fixture = round.fights.get_mut(id.index.checked_sub(1)? as usize)?;
        if fixture.id() == id {
            Some(fixture)
        } else {
            None
        }
    }

    /// Applies a result to a scheduled fixture. The digest is unaffected:
    /// it only covers pairings and identifiers.
    pub fn record_result(&mut self, id: &FixtureId, result: FightResult) -> Result<(), FixtureError> {
        let fixture =
            self.fixture_mut(id).ok_or_else(|| FixtureError::UnknownFixture(id.clone()))?;
        fixture.complete(result)
    }
}
