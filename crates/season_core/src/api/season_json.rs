// Season creation JSON API
// Entry point used by the season-creation workflow; schedule failures are
// reported inside the response, malformed requests are errors.
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::config::SeasonConfig;
use crate::models::SeasonDocument;
use crate::schedule::assemble_season;
use crate::SCHEMA_VERSION;

/// Season creation request
#[derive(Debug, Deserialize)]
pub struct SeasonRequest {
    pub schema_version: u8,
    pub season: SeasonConfig,
}

/// Season creation response
#[derive(Debug, Serialize)]
pub struct SeasonResponse {
    pub schema_version: u8,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<SeasonDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// `ScheduleError` kind, e.g. "OddRosterSize"
    pub kind: String,
    pub message: String,
    pub defect: bool,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn create_season(request: SeasonRequest) -> Result<SeasonResponse, ApiError> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(ApiError::UnsupportedSchema {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    info!(
        code = %request.season.competition_code,
        season = request.season.season_number,
        "processing season creation request"
    );

    let response = match assemble_season(&request.season) {
        Ok(document) => SeasonResponse {
            schema_version: SCHEMA_VERSION,
            success: true,
            season: Some(document),
            error: None,
        },
        Err(err) => SeasonResponse {
            schema_version: SCHEMA_VERSION,
            success: false,
            season: None,
            error: Some(ErrorPayload {
                kind: err.kind().to_string(),
                message: err.to_string(),
                defect: err.is_defect(),
            }),
        },
    };

    Ok(response)
}

/// JSON in, JSON out.
pub fn create_season_json(request_json: &str) -> Result<String, ApiError> {
    let request: SeasonRequest = serde_json::from_str(request_json)?;
    let response = create_season(request)?;
    Ok(serde_json::to_string(&response)?)
}
