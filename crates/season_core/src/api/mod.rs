pub mod season_json;

pub use season_json::{
    create_season, create_season_json, ApiError, ErrorPayload, SeasonRequest, SeasonResponse,
};
