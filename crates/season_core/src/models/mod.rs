pub mod competitor;
pub mod fixture;
pub mod fixture_id;
pub mod round;
pub mod season;

pub use competitor::{CompetitionCode, CompetitorId, MAX_CODE_LEN};
pub use fixture::{FightResult, FightStatus, FighterStat, Fixture};
pub use fixture_id::FixtureId;
pub use round::Round;
pub use season::{DivisionSchedule, SeasonDocument};
