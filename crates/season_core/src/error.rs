use thiserror::Error;

use crate::models::{CompetitorId, FixtureId};

/// Failures raised while generating, auditing or assembling a season.
///
/// None of these are transient. Kinds reported by `is_defect` mean a
/// schedule broke the generator's invariants; the rest are caller
/// configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Division {division} has an odd roster size: {size}")]
    OddRosterSize { division: u32, size: usize },

    #[error("Division {division} roster is too small: {size} (need at least 2)")]
    RosterTooSmall { division: u32, size: usize },

    #[error("Division {division} lists competitor {competitor} more than once")]
    DuplicateCompetitor { division: u32, competitor: CompetitorId },

    #[error("Competition code is missing")]
    MissingCompetitionCode,

    #[error("Invalid competition code: {code:?}")]
    InvalidCompetitionCode { code: String },

    #[error("Division {division} contains {fighter1} vs {fighter2} more than once")]
    DuplicateFixture { division: u32, fighter1: CompetitorId, fighter2: CompetitorId },

    #[error("Division {division} fixture count mismatch: expected {expected}, found {actual}")]
    FixtureCountMismatch { division: u32, expected: usize, actual: usize },

    #[error("Fixture identifier {id} is used more than once in the season")]
    DuplicateFixtureId { id: FixtureId },

    #[error("Division {division} is configured more than once")]
    DuplicateDivision { division: u32 },

    #[error("Season has no divisions")]
    NoDivisions,

    #[error("Division {division} round {round} has {actual} fixtures, expected {expected}")]
    RoundSizeMismatch { division: u32, round: u32, expected: usize, actual: usize },

    #[error("Division {division} round {round} schedules {competitor} more than once")]
    CompetitorTwiceInRound { division: u32, round: u32, competitor: CompetitorId },

    #[error("Division {division} round at position {expected} is numbered {found}")]
    RoundNumbering { division: u32, expected: u32, found: u32 },

    #[error("Division {division} records {recorded} total rounds but holds {actual}")]
    RoundCountMismatch { division: u32, recorded: u32, actual: usize },

    #[error("Fixture {found} is stored where {expected} belongs")]
    MislabelledFixture { expected: FixtureId, found: FixtureId },

    #[error("Schedule digest mismatch: recorded {recorded}, computed {computed}")]
    DigestMismatch { recorded: String, computed: String },
}

impl ScheduleError {
    /// Stable kind name, used on the JSON boundary.
    pub fn kind(&self) -> &'static str {
        match self {
            ScheduleError::OddRosterSize { .. } => "OddRosterSize",
            ScheduleError::RosterTooSmall { .. } => "RosterTooSmall",
            ScheduleError::DuplicateCompetitor { .. } => "DuplicateCompetitor",
            ScheduleError::MissingCompetitionCode => "MissingCompetitionCode",
            ScheduleError::InvalidCompetitionCode { .. } => "InvalidCompetitionCode",
            ScheduleError::DuplicateFixture { .. } => "DuplicateFixture",
            ScheduleError::FixtureCountMismatch { .. } => "FixtureCountMismatch",
            ScheduleError::DuplicateFixtureId { .. } => "DuplicateFixtureId",
            ScheduleError::DuplicateDivision { .. } => "DuplicateDivision",
            ScheduleError::NoDivisions => "NoDivisions",
            ScheduleError::RoundSizeMismatch { .. } => "RoundSizeMismatch",
            ScheduleError::CompetitorTwiceInRound { .. } => "CompetitorTwiceInRound",
            ScheduleError::RoundNumbering { .. } => "RoundNumbering",
            ScheduleError::RoundCountMismatch { .. } => "RoundCountMismatch",
            ScheduleError::MislabelledFixture { .. } => "MislabelledFixture",
            ScheduleError::DigestMismatch { .. } => "DigestMismatch",
        }
    }

    /// True when the error signals a scheduler defect rather than bad input.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            ScheduleError::DuplicateFixture { .. }
                | ScheduleError::FixtureCountMismatch { .. }
                | ScheduleError::DuplicateFixtureId { .. }
                | ScheduleError::RoundSizeMismatch { .. }
                | ScheduleError::CompetitorTwiceInRound { .. }
                | ScheduleError::RoundNumbering { .. }
                | ScheduleError::RoundCountMismatch { .. }
                | ScheduleError::MislabelledFixture { .. }
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureIdError {
    #[error("Malformed fixture identifier: {0:?}")]
    Malformed(String),

    #[error("Fixture identifier {id:?} has an invalid {part} component")]
    InvalidComponent { id: String, part: &'static str },
}

/// Wire records that describe a state the fixture model cannot hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureShapeError {
    #[error("Fixture {0} pairs a competitor with itself")]
    SelfPairing(String),

    #[error("Scheduled fixture {0} carries result fields")]
    ResultOnScheduled(String),

    #[error("Completed fixture {0} has no winner")]
    MissingWinner(String),

    #[error("Completed fixture {0} has no date")]
    MissingDate(String),

    #[error("Fixture {id} names winner {winner} who is not one of its fighters")]
    WinnerNotInFixture { id: String, winner: String },
}

/// Failures when recording a result against an existing season document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    #[error("Unknown fixture: {0}")]
    UnknownFixture(FixtureId),

    #[error("Fixture {0} already has a result")]
    AlreadyCompleted(FixtureId),

    #[error("Winner {winner} did not take part in fixture {id}")]
    WinnerNotInFixture { id: FixtureId, winner: CompetitorId },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: {path}")]
    UnsupportedFormat { path: String },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
