//! Duplicate-pairing audit
//!
//! Verification only: nothing here repairs or drops fixtures.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::ScheduleError;
use crate::models::{CompetitorId, DivisionSchedule, FixtureId, Round};

/// A pairing seen more than once within a division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub division_number: u32,
    pub fighter1: CompetitorId,
    pub fighter2: CompetitorId,
}

impl From<Violation> for ScheduleError {
    fn from(v: Violation) -> Self {
        ScheduleError::DuplicateFixture {
            division: v.division_number,
            fighter1: v.fighter1,
            fighter2: v.fighter2,
        }
    }
}

/// Replays every fixture through a set of normalized pairing keys and reports
/// each repeat. An empty result means the division passes.
pub fn audit(rounds: &[Round], division_number: u32) -> Vec<Violation> {
    let mut seen = HashSet::new();
    let mut violations = Vec::new();

    for fixture in rounds.iter().flat_map(|r| r.fights.iter()) {
        if !seen.insert(fixture.pairing_key()) {
            violations.push(Violation {
                division_number,
                fighter1: fixture.fighter1().clone(),
                fighter2: fixture.fighter2().clone(),
            });
        }
    }

    violations
}

/// `n(n-1)/2`
pub fn expected_fixture_count(roster_size: usize) -> usize {
    roster_size * roster_size.saturating_sub(1) / 2
}

pub fn fixture_count(rounds: &[Round]) -> usize {
    rounds.iter().map(|r| r.fights.len()).sum()
}

/// Identifiers occurring more than once across the whole season.
pub fn audit_identifiers(divisions: &[DivisionSchedule]) -> Vec<FixtureId> {
    let mut seen = HashSet::new();
    divisions
        .iter()
        .flat_map(DivisionSchedule::fixtures)
        .map(|f| f.id())
        .filter(|id| !seen.insert(*id))
        .cloned()
        .collect()
}

/// Runs the audit and the fixture-count cross-check for one division.
pub fn certify(rounds: &[Round], division_number: u32, roster_size: usize) -> Result<(), ScheduleError> {
    if let Some(violation) = audit(rounds, division_number).into_iter().next() {
        return Err(violation.into());
    }

    let expected = expected_fixture_count(roster_size);
    let actual = fixture_count(rounds);
    if expected != actual {
        return Err(ScheduleError::FixtureCountMismatch { division: division_number, expected, actual });
    }

    Ok(())
}
