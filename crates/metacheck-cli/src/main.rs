//! metacheck CLI
//!
//! Command-line interface for validating ETL snapshots

use clap::{Parser, Subcommand, ValueEnum};
use metacheck_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "metacheck")]
#[command(about = "metacheck - Post-ETL snapshot invariant validation", long_about = None)]
struct Cli {
    /// Diagnostic log format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Human)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Human,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the invariant catalog against a snapshot
    Validate(commands::validate::ValidateArgs),
    /// Schema operations
    Schema(commands::schema::SchemaArgs),
}

fn main() {
    // Must precede parsing so `DATABASE_URL` from .env reaches clap's env fallback
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Human => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = match cli.command {
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Schema(args) => commands::schema::execute(args).map(|()| 0),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
