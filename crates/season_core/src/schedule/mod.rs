// Round-robin season scheduling
// generator -> audit -> assembly, no I/O anywhere below this module

pub mod assembly;
pub mod audit;
pub mod digest;
pub mod draw;
pub mod generator;


pub use assembly::{assemble_season, verify_season};
pub use audit::{
    audit, audit_identifiers, certify, expected_fixture_count, fixture_count, Violation,
};
pub use digest::schedule_digest;
pub use draw::draw_roster;
pub use generator::{generate, generate_with_code, validate_roster};
