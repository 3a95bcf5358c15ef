//! Season assembly
//!
//! Generate then audit every division; accept the season only if all of them
//! pass. Divisions share no state and are scheduled in parallel, but the
//! result keeps configuration order and the first error aborts everything.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::audit::{audit_identifiers, certify};
use super::digest::schedule_digest;
use super::draw::draw_roster;
use super::generator::generate_with_code;
use crate::config::{DivisionConfig, SeasonConfig};
use crate::error::{Result, ScheduleError};
use crate::models::{CompetitionCode, DivisionSchedule, FixtureId, Round, SeasonDocument};
use crate::SCHEMA_VERSION;

pub fn assemble_season(config: &SeasonConfig) -> Result<SeasonDocument> {
    let result = try_assemble(config);
    if let Err(err) = &result {
        warn!(
            code = %config.competition_code,
            season = config.season_number,
            kind = err.kind(),
            "season rejected: {}",
            err
        );
    }
    result
}

fn try_assemble(config: &SeasonConfig) -> Result<SeasonDocument> {
    if config.divisions.is_empty() {
        return Err(ScheduleError::NoDivisions);
    }

    let code = CompetitionCode::parse(&config.competition_code)?;

    let mut numbers = HashSet::new();
    for division in &config.divisions {
        if !numbers.insert(division.division_number) {
            return Err(ScheduleError::DuplicateDivision { division: division.division_number });
        }
    }

    // Collected per division first so the reported error is always the
    // first failing division in configuration order.
    let scheduled: Vec<Result<DivisionSchedule>> = config
        .divisions
        .par_iter()
        .map(|division| schedule_division(division, &code, config.season_number, config.draw_seed))
        .collect();
    let divisions = scheduled.into_iter().collect::<Result<Vec<DivisionSchedule>>>()?;

    if let Some(id) = audit_identifiers(&divisions).into_iter().next() {
        return Err(ScheduleError::DuplicateFixtureId { id });
    }

    let document = SeasonDocument {
        schema_version: SCHEMA_VERSION,
        competition_code: code,
        season_number: config.season_number,
        digest: schedule_digest(&divisions),
        divisions,
    };

    info!(
        code = %document.competition_code,
        season = document.season_number,
        divisions = document.divisions.len(),
        fixtures = document.fixture_count(),
        "season accepted"
    );

    Ok(document)
}

fn schedule_division(
    division: &DivisionConfig,
    code: &CompetitionCode,
    season_number: u32,
    draw_seed: Option<u64>,
) -> Result<DivisionSchedule> {
    let number = division.division_number;
    let roster = match draw_seed {
        Some(seed) => draw_roster(&division.roster, seed, number),
        None => division.roster.clone(),
    };

    let rounds = generate_with_code(&roster, number, code, season_number)?;
    certify(&rounds, number, roster.len())?;
    debug!(division = number, "division passed audit");

    Ok(DivisionSchedule::new(number, division.display_name(), rounds))
}

/// Re-certifies an existing season document, e.g. after loading it back
/// from storage: roster size, round numbering and shape, one fight per
/// competitor per round, identifiers matching their position, pairing
/// audit, fixture counts, identifier uniqueness and digest.
pub fn verify_season(document: &SeasonDocument) -> Result<()> {
    if document.divisions.is_empty() {
        return Err(ScheduleError::NoDivisions);
    }

    let mut numbers = HashSet::new();
    for division in &document.divisions {
        let number = division.division_number;
        if !numbers.insert(number) {
            return Err(ScheduleError::DuplicateDivision { division: number });
        }

        let roster_size = division.competitors().len();
        if roster_size < 2 {
            return Err(ScheduleError::RosterTooSmall { division: number, size: roster_size });
        }

        for (position, round) in division.rounds.iter().enumerate() {
            verify_round(document, number, position as u32 + 1, round, roster_size)?;
        }

        certify(&division.rounds, number, roster_size)?;

        if division.total_rounds as usize != division.rounds.len() {
            return Err(ScheduleError::RoundCountMismatch {
                division: number,
                recorded: division.total_rounds,
                actual: division.rounds.len(),
            });
        }
    }

    if let Some(id) = audit_identifiers(&document.divisions).into_iter().next() {
        return Err(ScheduleError::DuplicateFixtureId { id });
    }

    let computed = schedule_digest(&document.divisions);
    if computed != document.digest {
        return Err(ScheduleError::DigestMismatch { recorded: document.digest.clone(), computed });
    }

    Ok(())
}

fn verify_round(
    document: &SeasonDocument,
    division_number: u32,
    expected_number: u32,
    round: &Round,
    roster_size: usize,
) -> Result<()> {
    if round.round_number != expected_number {
        return Err(ScheduleError::RoundNumbering {
            division: division_number,
            expected: expected_number,
            found: round.round_number,
        });
    }

    if round.fights.len() != roster_size / 2 {
        return Err(ScheduleError::RoundSizeMismatch {
            division: division_number,
            round: expected_number,
            expected: roster_size / 2,
            actual: round.fights.len(),
        });
    }

    let mut seen = HashSet::with_capacity(roster_size);
    for (index, fixture) in round.fights.iter().enumerate() {
        for fighter in [fixture.fighter1(), fixture.fighter2()] {
            if !seen.insert(fighter) {
                return Err(ScheduleError::CompetitorTwiceInRound {
                    division: division_number,
                    round: expected_number,
                    competitor: fighter.clone(),
                });
            }
        }

        let expected = FixtureId::new(
            document.competition_code.clone(),
            document.season_number,
            division_number,
            expected_number,
            index as u32 + 1,
        );
        if fixture.id() != &expected {
            return Err(ScheduleError::MislabelledFixture { expected, found: fixture.id().clone() });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompetitorId, Fixture};

    fn division(number: u32, size: usize) -> DivisionConfig {
        DivisionConfig {
            division_number: number,
            name: None,
            roster: (0..size).map(|i| CompetitorId::new(format!("d{number}_f{i}"))).collect(),
        }
    }

    fn config(divisions: Vec<DivisionConfig>) -> SeasonConfig {
        SeasonConfig {
            competition_code: "IFC".to_string(),
            season_number: 3,
            draw_seed: None,
            divisions,
        }
    }

    #[test]
    fn test_assembles_all_divisions_in_order() {
        let doc = assemble_season(&config(vec![division(2, 6), division(1, 4)])).unwrap();

        assert_eq!(doc.schema_version, SCHEMA_VERSION);
        assert_eq!(doc.divisions.len(), 2);
        assert_eq!(doc.divisions[0].division_number, 2);
        assert_eq!(doc.divisions[0].total_rounds, 5);
        assert_eq!(doc.divisions[0].current_round, 0);
        assert_eq!(doc.divisions[0].name, "Division 2");
        assert_eq!(doc.divisions[1].total_rounds, 3);
        assert_eq!(doc.fixture_count(), 15 + 6);
    }

    #[test]
    fn test_one_bad_division_aborts_season() {
        let err = assemble_season(&config(vec![division(1, 4), division(2, 5)])).unwrap_err();
        assert_eq!(err, ScheduleError::OddRosterSize { division: 2, size: 5 });
    }

    #[test]
    fn test_rejects_empty_and_duplicate_divisions() {
        assert_eq!(assemble_season(&config(vec![])).unwrap_err(), ScheduleError::NoDivisions);
        assert_eq!(
            assemble_season(&config(vec![division(1, 4), division(1, 2)])).unwrap_err(),
            ScheduleError::DuplicateDivision { division: 1 }
        );
    }

    #[test]
    fn test_missing_code_aborts_season() {
        let mut cfg = config(vec![division(1, 4)]);
        cfg.competition_code.clear();
        assert_eq!(assemble_season(&cfg).unwrap_err(), ScheduleError::MissingCompetitionCode);
    }

    #[test]
    fn test_same_roster_size_never_collides_across_divisions() {
        let doc = assemble_season(&config(vec![division(1, 8), division(2, 8)])).unwrap();
        assert!(audit_identifiers(&doc.divisions).is_empty());

        let d1: HashSet<String> =
            doc.divisions[0].fixtures().map(|f| f.id().to_string()).collect();
        let d2: HashSet<String> =
            doc.divisions[1].fixtures().map(|f| f.id().to_string()).collect();
        assert!(d1.is_disjoint(&d2));
    }

    #[test]
    fn test_seeded_draw_is_reproducible() {
        let mut cfg = config(vec![division(1, 10), division(2, 6)]);
        cfg.draw_seed = Some(2024);

        let first = assemble_season(&cfg).unwrap();
        let second = assemble_season(&cfg).unwrap();
        assert_eq!(first.digest, second.digest);
        assert_eq!(first, second);

        cfg.draw_seed = None;
        let undrawn = assemble_season(&cfg).unwrap();
        assert_ne!(first.digest, undrawn.digest);
    }

    #[test]
    fn test_verify_accepts_assembled_season() {
        let doc = assemble_season(&config(vec![division(1, 4), division(2, 12)])).unwrap();
        assert_eq!(verify_season(&doc), Ok(()));
    }

    fn reseal(mut doc: SeasonDocument) -> SeasonDocument {
        doc.digest = schedule_digest(&doc.divisions);
        doc
    }

    fn fixture_id(round: u32, index: u32) -> FixtureId {
        FixtureId::new(CompetitionCode::parse("IFC").unwrap(), 3, 1, round, index)
    }

    #[test]
    fn test_verify_detects_repeated_pairing() {
        let mut doc = assemble_season(&config(vec![division(1, 4)])).unwrap();
        let first_round = doc.divisions[0].rounds[0].fights.clone();
        doc.divisions[0].rounds[1].fights = first_round
            .iter()
            .enumerate()
            .map(|(i, f)| {
                Fixture::scheduled(fixture_id(2, i as u32 + 1), f.fighter1().clone(), f.fighter2().clone())
            })
            .collect();

        let err = verify_season(&reseal(doc)).unwrap_err();
        assert_eq!(err.kind(), "DuplicateFixture");
    }

    #[test]
    fn test_verify_rejects_misshapen_rounds() {
        let mut doc = assemble_season(&config(vec![division(1, 4)])).unwrap();
        let rounds = &mut doc.divisions[0].rounds;
        let moved: Vec<Fixture> = rounds.iter_mut().skip(1).flat_map(|r| r.fights.drain(..)).collect();
        rounds[0].fights.extend(moved);

        assert_eq!(
            verify_season(&reseal(doc)),
            Err(ScheduleError::RoundSizeMismatch { division: 1, round: 1, expected: 2, actual: 6 })
        );
    }

    #[test]
    fn test_verify_rejects_competitor_twice_in_round() {
        let mut doc = assemble_season(&config(vec![division(1, 4)])).unwrap();
        doc.divisions[0].rounds[0].fights[1] =
            Fixture::scheduled(fixture_id(1, 2), "d1_f0".into(), "d1_f2".into());

        let err = verify_season(&reseal(doc)).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::CompetitorTwiceInRound { division: 1, round: 1, competitor: "d1_f0".into() }
        );
        assert!(err.is_defect());
    }

    #[test]
    fn test_verify_rejects_mislabelled_fixture() {
        let mut doc = assemble_season(&config(vec![division(1, 4)])).unwrap();
        let original = doc.divisions[0].rounds[0].fights[0].clone();
        let wrong: FixtureId = "IFC-S9-D7-R42-F9".parse().unwrap();
        doc.divisions[0].rounds[0].fights[0] =
            Fixture::scheduled(wrong.clone(), original.fighter1().clone(), original.fighter2().clone());

        assert_eq!(
            verify_season(&reseal(doc)),
            Err(ScheduleError::MislabelledFixture { expected: fixture_id(1, 1), found: wrong })
        );
    }

    #[test]
    fn test_verify_rejects_empty_division() {
        let mut doc = assemble_season(&config(vec![division(1, 4)])).unwrap();
        doc.divisions[0].rounds.clear();
        doc.divisions[0].total_rounds = 0;

        assert_eq!(
            verify_season(&reseal(doc)),
            Err(ScheduleError::RosterTooSmall { division: 1, size: 0 })
        );
    }

    #[test]
    fn test_verify_rejects_wrong_round_total() {
        let mut doc = assemble_season(&config(vec![division(1, 4)])).unwrap();
        doc.divisions[0].total_rounds = 4;

        assert_eq!(
            verify_season(&doc),
            Err(ScheduleError::RoundCountMismatch { division: 1, recorded: 4, actual: 3 })
        );
    }

    #[test]
    fn test_first_failing_division_is_reported() {
        let cfg = config(vec![division(1, 4), division(2, 5), division(3, 3), division(4, 7)]);
        for _ in 0..20 {
            assert_eq!(
                assemble_season(&cfg).unwrap_err(),
                ScheduleError::OddRosterSize { division: 2, size: 5 }
            );
        }
    }

    #[test]
    fn test_verify_detects_digest_drift() {
        let mut doc = assemble_season(&config(vec![division(1, 4)])).unwrap();
        doc.digest = "0".repeat(64);
        assert!(matches!(verify_season(&doc), Err(ScheduleError::DigestMismatch { .. })));
    }
}
