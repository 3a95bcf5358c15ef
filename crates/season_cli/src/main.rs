//! Season CLI
//!
//! Season config (YAML/JSON) → certified season document JSON
//! Stored season document → re-verification

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "season_cli")]
#[command(about = "Generate and verify round-robin season schedules", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Build a season document from a config file
    Generate {
        /// Season config path (.yaml, .yml or .json)
        #[arg(long)]
        config: PathBuf,

        /// Output season document path
        #[arg(long)]
        out: PathBuf,

        /// Pretty-print the output JSON
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Re-run the audit on a stored season document
    Verify {
        /// Season document path
        #[arg(long)]
        season: PathBuf,
    },

    /// Break a fixture identifier into its parts
    Inspect {
        /// Fixture identifier, e.g. IFC-S3-D1-R1-F2
        fixture_id: String,
    },
}

#[cfg(feature = "cli")]
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate { config, out, pretty } => {
            println!("Building season...");
            println!("   Config: {}", config.display());
            println!("   Output: {}", out.display());

            let summary = season_cli::generate_season(&config, &out, pretty)?;
            print_summary(&summary);
        }

        Commands::Verify { season } => {
            println!("Verifying season document...");
            println!("   Input: {}", season.display());

            let summary = season_cli::verify_season_file(&season)?;
            print_summary(&summary);
            println!("\nSeason verification passed");
        }

        Commands::Inspect { fixture_id } => {
            let id = season_cli::inspect_fixture_id(&fixture_id)?;
            println!("   Competition: {}", id.code);
            println!("   Season:      {}", id.season);
            println!("   Division:    {}", id.division);
            println!("   Round:       {}", id.round);
            println!("   Fixture:     {}", id.index);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_summary(summary: &season_cli::SeasonSummary) {
    println!("\nSeason {} S{}", summary.competition_code, summary.season_number);
    for (number, name, rounds, fixtures) in &summary.divisions {
        println!("   D{:<3} {:<24} {:>3} rounds {:>5} fixtures", number, name, rounds, fixtures);
    }
    println!("   Total fixtures: {}", summary.fixtures);
    println!("   Digest:         {}", summary.digest);
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("season_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
