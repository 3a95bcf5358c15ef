//! Season configuration
//!
//! Supplied by the season-creation workflow, either as YAML or JSON:
//!
//! ```yaml
//! competition_code: IFC
//! season_number: 3
//! draw_seed: 42        # optional
//! divisions:
//!   - division_number: 1
//!     name: Heavyweight
//!     roster: [fighter_a, fighter_b, fighter_c, fighter_d]
//! ```
//!
//! Nothing is validated at load time; rosters and codes are checked by the
//! scheduler so that every rejection carries a `ScheduleError` kind.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::CompetitorId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonConfig {
    #[serde(default)]
    pub competition_code: String,
    pub season_number: u32,
    /// Shuffle each roster with a seeded RNG before scheduling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_seed: Option<u64>,
    pub divisions: Vec<DivisionConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionConfig {
    pub division_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub roster: Vec<CompetitorId>,
}

impl DivisionConfig {
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| format!("Division {}", self.division_number))
    }
}

impl SeasonConfig {
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Loads a config file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let extension = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&fs::read_to_string(path)?),
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?),
            _ => Err(ConfigError::UnsupportedFormat { path: path.display().to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YAML: &str = r#"
competition_code: IFC
season_number: 3
divisions:
  - division_number: 1
    name: Heavyweight
    roster: [a, b, c, d]
  - division_number: 2
    roster: [e, f]
"#;

    #[test]
    fn test_yaml_config_parses() {
        let config = SeasonConfig::from_yaml_str(YAML).unwrap();
        assert_eq!(config.competition_code, "IFC");
        assert_eq!(config.season_number, 3);
        assert_eq!(config.draw_seed, None);
        assert_eq!(config.divisions.len(), 2);
        assert_eq!(config.divisions[0].roster[3], CompetitorId::from("d"));
        assert_eq!(config.divisions[0].display_name(), "Heavyweight");
        assert_eq!(config.divisions[1].display_name(), "Division 2");
    }

    #[test]
    fn test_missing_code_defaults_to_empty() {
        let config = SeasonConfig::from_json_str(
            r#"{"season_number": 1, "divisions": [{"division_number": 1, "roster": ["a", "b"]}]}"#,
        )
        .unwrap();
        assert!(config.competition_code.is_empty());
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("season.yml");
        fs::File::create(&yaml_path).unwrap().write_all(YAML.as_bytes()).unwrap();
        let from_yaml = SeasonConfig::load(&yaml_path).unwrap();

        let json_path = dir.path().join("season.json");
        fs::write(&json_path, serde_json::to_string(&from_yaml).unwrap()).unwrap();
        let from_json = SeasonConfig::load(&json_path).unwrap();

        assert_eq!(from_yaml, from_json);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("season.toml");
        fs::write(&path, "season_number = 1").unwrap();
        assert!(matches!(SeasonConfig::load(&path), Err(ConfigError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_sample_config_assembles() {
        let raw = include_str!("../../../data/seasons/sample.yaml");
        let config = SeasonConfig::from_yaml_str(raw).unwrap();
        assert_eq!(config.draw_seed, Some(20240901));

        let doc = crate::assemble_season(&config).unwrap();
        assert_eq!(doc.fixture_count(), 15 + 6);
        assert_eq!(doc.divisions[1].name, "Middleweight");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        assert!(matches!(SeasonConfig::load(&path), Err(ConfigError::Io(_))));
    }
}
