//! # season_core - Round-Robin Season Scheduler
//!
//! Builds the complete fixture list of a league season from per-division
//! rosters, using the circle method, and certifies its own output before the
//! season document is handed to storage.
//!
//! ## Features
//! - Single round-robin per division: `n - 1` rounds of `n / 2` fixtures
//! - Deterministic fixture identifiers (`IFC-S3-D1-R2-F1`) that parse back
//! - Duplicate-pairing audit and fixture-count cross-check per division
//! - All-or-nothing season assembly, optional seeded roster draw
//! - JSON API for the season-creation workflow

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod schedule;

pub use api::{create_season, create_season_json, ApiError, SeasonRequest, SeasonResponse};
pub use config::{DivisionConfig, SeasonConfig};
pub use error::{ConfigError, FixtureError, FixtureIdError, Result, ScheduleError};
pub use models::{
    CompetitionCode, CompetitorId, DivisionSchedule, FightResult, FightStatus, FighterStat,
    Fixture, FixtureId, Round, SeasonDocument,
};
pub use schedule::{assemble_season, audit, generate, verify_season, Violation};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
