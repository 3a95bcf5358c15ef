//! Season CLI library
//!
//! Config file -> season document JSON, and re-verification of stored
//! season documents. `main.rs` only parses arguments and prints.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use season_core::{assemble_season, verify_season, FixtureId, SeasonConfig, SeasonDocument};
use tracing::info;

/// Summary printed after a season is written.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonSummary {
    pub competition_code: String,
    pub season_number: u32,
    pub divisions: Vec<(u32, String, u32, usize)>,
    pub fixtures: usize,
    pub digest: String,
}

impl SeasonSummary {
    pub fn from_document(doc: &SeasonDocument) -> Self {
        Self {
            competition_code: doc.competition_code.to_string(),
            season_number: doc.season_number,
            divisions: doc
                .divisions
                .iter()
                .map(|d| (d.division_number, d.name.clone(), d.total_rounds, d.fixture_count()))
                .collect(),
            fixtures: doc.fixture_count(),
            digest: doc.digest.clone(),
        }
    }
}

/// Builds a season from `config_path` and writes it to `out_path`.
pub fn generate_season(config_path: &Path, out_path: &Path, pretty: bool) -> Result<SeasonSummary> {
    let config = SeasonConfig::load(config_path)
        .with_context(|| format!("Failed to load season config: {}", config_path.display()))?;

    let document = assemble_season(&config).with_context(|| {
        format!(
            "Season {} of {:?} rejected",
            config.season_number, config.competition_code
        )
    })?;

    let json = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };

    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(out_path, json)
        .with_context(|| format!("Failed to write season document: {}", out_path.display()))?;

    info!(path = %out_path.display(), fixtures = document.fixture_count(), "season written");
    Ok(SeasonSummary::from_document(&document))
}

/// Loads a stored season document and re-runs every certification check.
pub fn verify_season_file(season_path: &Path) -> Result<SeasonSummary> {
    let raw = fs::read_to_string(season_path)
        .with_context(|| format!("Failed to read season document: {}", season_path.display()))?;
    let document: SeasonDocument = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse season document: {}", season_path.display()))?;

    verify_season(&document)
        .with_context(|| format!("Season document failed verification: {}", season_path.display()))?;

    Ok(SeasonSummary::from_document(&document))
}

/// Parses a fixture identifier into its components.
pub fn inspect_fixture_id(raw: &str) -> Result<FixtureId> {
    raw.parse::<FixtureId>().with_context(|| format!("Not a fixture identifier: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
competition_code: IFC
season_number: 3
divisions:
  - division_number: 1
    name: Heavyweight
    roster: [a, b, c, d]
  - division_number: 2
    roster: [e, f, g, h, i, j]
"#;

    #[test]
    fn test_generate_then_verify() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("season.yaml");
        let out = dir.path().join("out").join("season.json");
        fs::write(&config, CONFIG).unwrap();

        let summary = generate_season(&config, &out, true).unwrap();
        assert_eq!(summary.competition_code, "IFC");
        assert_eq!(summary.fixtures, 6 + 15);
        assert_eq!(summary.divisions[0], (1, "Heavyweight".to_string(), 3, 6));

        let verified = verify_season_file(&out).unwrap();
        assert_eq!(verified, summary);
    }

    #[test]
    fn test_generate_rejects_odd_roster() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("season.yaml");
        let out = dir.path().join("season.json");
        fs::write(&config, CONFIG.replace("[a, b, c, d]", "[a, b, c]")).unwrap();

        let err = generate_season(&config, &out, false).unwrap_err();
        assert!(format!("{err:#}").contains("odd roster size"));
        assert!(!out.exists(), "no partial season may be written");
    }

    #[test]
    fn test_verify_rejects_tampered_document() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("season.yaml");
        let out = dir.path().join("season.json");
        fs::write(&config, CONFIG).unwrap();
        generate_season(&config, &out, false).unwrap();

        let tampered = fs::read_to_string(&out).unwrap().replacen("\"fighter1\":\"a\"", "\"fighter1\":\"b\"", 1);
        fs::write(&out, tampered).unwrap();

        assert!(verify_season_file(&out).is_err());
    }

    #[test]
    fn test_inspect_fixture_id() {
        let id = inspect_fixture_id("IFC-S3-D2-R5-F1").unwrap();
        assert_eq!((id.season, id.division, id.round, id.index), (3, 2, 5, 1));
        assert!(inspect_fixture_id("IFC-3-2-5-1").is_err());
    }
}
