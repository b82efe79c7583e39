//! Schema provisioning command

use clap::{Args, Subcommand};
use metacheck_engine::apply_schema;
use metacheck_store::db::open;

use super::resolve_target;

#[derive(Debug, Args)]
pub struct SchemaArgs {
    #[command(subcommand)]
    pub command: SchemaCommand,
}

#[derive(Debug, Subcommand)]
pub enum SchemaCommand {
    /// Create the snapshot tables if missing
    Apply(ApplyArgs),
}

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Snapshot location; falls back to DATABASE_URL
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

pub fn execute(args: SchemaArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        SchemaCommand::Apply(apply_args) => execute_apply(apply_args),
    }
}

fn execute_apply(args: ApplyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let target = resolve_target(args.database_url)?;
    let mut conn = open(&target)?;
    let tables = apply_schema(&mut conn)?;

    println!("Schema ready: {} tables", tables.len());
    Ok(())
}
