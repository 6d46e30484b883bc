use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use flow_density::{AppError, Config, Snapshot, setup_environment, utils::time};
use serde::Serialize;
use shared::Weekday;

/// Booking density of loading zones
#[derive(Debug, Parser)]
#[command(name = "flow-density", version, about)]
struct Cli {
    /// IANA timezone of the local hour buckets
    #[arg(long, global = true, env = "FLOW_TIMEZONE")]
    timezone: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Hour-bucketed slots of one zone for a weekday
    Grid {
        #[arg(long)]
        snapshot: PathBuf,
        #[arg(long)]
        zone: String,
        #[arg(long)]
        weekday: Weekday,
    },
    /// Hourly density rows over the shared time range
    Density {
        #[arg(long)]
        snapshot: PathBuf,
        /// Zones to include, all zones with a booking status when omitted
        #[arg(long = "zone")]
        zones: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let config = setup_environment();
    let cli = Cli::parse();

    if let Err(e) = run(&config, cli) {
        match e.downcast_ref::<AppError>() {
            Some(app) => tracing::error!(
                code = %app.code,
                category = app.code.category().name(),
                "{}",
                app.message
            ),
            None => tracing::error!("{:#}", e),
        }
        return Err(e);
    }
    Ok(())
}

fn run(config: &Config, cli: Cli) -> anyhow::Result<()> {
    config.validate()?;
    let tz = match cli.timezone.as_deref() {
        Some(name) => time::parse_timezone(name)?,
        None => config.timezone()?,
    };
    tracing::debug!(timezone = %tz, environment = %config.environment, "Resolved configuration");

    match cli.command {
        Command::Grid {
            snapshot,
            zone,
            weekday,
        } => {
            let snapshot = Snapshot::load(&snapshot)
                .with_context(|| format!("loading {}", snapshot.display()))?;
            let grid = snapshot.day_grid(&zone, weekday, tz)?;
            tracing::info!(zone_id = %zone, %weekday, hours = grid.len(), "Built day grid");
            print_json(&grid)?;
        }
        Command::Density { snapshot, zones } => {
            let snapshot = Snapshot::load(&snapshot)
                .with_context(|| format!("loading {}", snapshot.display()))?;
            let board = snapshot.density_board(&zones, tz)?;
            tracing::info!(rows = board.rows.len(), "Built density board");
            print_json(&board)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
