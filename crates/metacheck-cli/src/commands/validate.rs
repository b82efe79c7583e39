//! Snapshot validation command

use clap::{Args, ValueEnum};
use metacheck_core::model::params::DEFAULT_MAX_UNKNOWN_RATIO;
use metacheck_core::ValidationParams;
use metacheck_engine::run_validation;
use metacheck_store::db::open_read_only;

use super::resolve_target;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Snapshot location; falls back to DATABASE_URL
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Expected number of top-ranked players in the snapshot
    #[arg(long)]
    pub top_n: Option<u64>,

    /// Highest tolerated share of Unknown deck-type observations
    #[arg(long, default_value_t = DEFAULT_MAX_UNKNOWN_RATIO)]
    pub max_unknown_ratio: f64,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Returns the process exit code: 0 when every check passed
pub fn execute(args: ValidateArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let params = ValidationParams {
        expected_players: args.top_n,
        max_unknown_ratio: args.max_unknown_ratio,
    };
    params.validate()?;

    let target = resolve_target(args.database_url)?;
    let conn = open_read_only(&target)?;
    let report = run_validation(&conn, &params)?;

    match args.format {
        ReportFormat::Text => print!("{}", report.render_text()),
        ReportFormat::Json => println!("{}", report.render_json()?),
    }

    Ok(report.exit_code())
}
