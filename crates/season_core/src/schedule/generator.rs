//! Circle-method fixture generator
//!
//! Position 0 stays fixed; every round the tail (positions 1..n-1) rotates
//! one step to the right, so the element at the last position moves to
//! position 1. Round `r` pairs position `i` with position `n-1-i`.
//!
//! Rather than mutating a working array, [`Rotation::seat`] computes which
//! competitor sits at a position for a given round directly from the
//! original roster.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{Result, ScheduleError};
use crate::models::{CompetitionCode, CompetitorId, Fixture, FixtureId, Round};

/// Seat map of the circle method over a borrowed roster.
struct Rotation<'a> {
    roster: &'a [CompetitorId],
}

impl<'a> Rotation<'a> {
    fn new(roster: &'a [CompetitorId]) -> Self {
        Self { roster }
    }

    /// Competitor at `position` after `round_index` right-rotations of the tail.
    fn seat(&self, round_index: usize, position: usize) -> &'a CompetitorId {
        if position == 0 {
            return &self.roster[0];
        }
        let tail = self.roster.len() - 1;
        let shift = round_index % tail;
        &self.roster[1 + (position - 1 + tail - shift) % tail]
    }
}

/// Checks the roster preconditions: even, non-empty, no repeated competitor.
pub fn validate_roster(roster: &[CompetitorId], division_number: u32) -> Result<()> {
    let size = roster.len();
    if size % 2 != 0 {
        return Err(ScheduleError::OddRosterSize { division: division_number, size });
    }
    if size < 2 {
        return Err(ScheduleError::RosterTooSmall { division: division_number, size });
    }

    let mut seen = HashSet::with_capacity(size);
    for competitor in roster {
        if !seen.insert(competitor) {
            return Err(ScheduleError::DuplicateCompetitor {
                division: division_number,
                competitor: competitor.clone(),
            });
        }
    }

    Ok(())
}

/// Generates a full single round-robin for one division.
///
/// Returns `n - 1` rounds of `n / 2` fixtures each, numbered from 1, with
/// identifiers `"{code}-S{season}-D{division}-R{round}-F{index}"`.
pub fn generate(
    roster: &[CompetitorId],
    division_number: u32,
    competition_code: &str,
    season_number: u32,
) -> Result<Vec<Round>> {
    validate_roster(roster, division_number)?;
    let code = CompetitionCode::parse(competition_code)?;
    Ok(build_rounds(roster, division_number, &code, season_number))
}

/// Same as [`generate`] for a code that has already been validated.
pub fn generate_with_code(
    roster: &[CompetitorId],
    division_number: u32,
    code: &CompetitionCode,
    season_number: u32,
) -> Result<Vec<Round>> {
    validate_roster(roster, division_number)?;
    Ok(build_rounds(roster, division_number, code, season_number))
}

fn build_rounds(
    roster: &[CompetitorId],
    division_number: u32,
    code: &CompetitionCode,
    season_number: u32,
) -> Vec<Round> {
    let n = roster.len();
    let rotation = Rotation::new(roster);

    let rounds: Vec<Round> = (0..n - 1)
        .map(|round_index| {
            let round_number = round_index as u32 + 1;
            let fights = (0..n / 2)
                .map(|i| {
                    let id = FixtureId::new(
                        code.clone(),
                        season_number,
                        division_number,
                        round_number,
                        i as u32 + 1,
                    );
                    Fixture::scheduled(
                        id,
                        rotation.seat(round_index, i).clone(),
                        rotation.seat(round_index, n - 1 - i).clone(),
                    )
                })
                .collect();
            Round::new(round_number, fights)
        })
        .collect();

    debug!(
        division = division_number,
        competitors = n,
        rounds = rounds.len(),
        fixtures = n * (n - 1) / 2,
        "generated division schedule"
    );

    rounds
}
