use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fleet_data::{FleetRepository, InMemoryFleet};
use navigation::NavigationController;
use shared::ViewId;
use tokio::runtime::Handle;
use tracing_subscriber::EnvFilter;

mod config;
mod runner;
mod script;

#[derive(Parser, Debug)]
struct Cli {
    /// Settings file; defaults to ./nav_console.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    latency_ms: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a navigation script against the seeded fleet. Without a path,
    /// the configured `initial_script` is used.
    Replay { script: Option<PathBuf> },
    /// List every view identifier.
    Views,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = config::load_settings(cli.config.as_deref())?;
    if let Some(latency_ms) = cli.latency_ms {
        settings.simulated_latency_ms = latency_ms;
    }

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| settings.log_filter.clone());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Views => {
            for view in ViewId::ALL {
                println!("{view}");
            }
        }
        Command::Replay { script } => {
            let script = script
                .or_else(|| settings.initial_script.clone())
                .context("no script given and no initial_script configured")?;
            let raw = fs::read_to_string(&script)
                .with_context(|| format!("failed to read script '{}'", script.display()))?;
            let commands = script::parse_script(&raw)?;

            let fleet = Arc::new(InMemoryFleet::seeded(settings.latency()));
            let repository: Arc<dyn FleetRepository> = fleet.clone();
            let mut controller = NavigationController::new(repository, Handle::current());

            let printed = runner::run(&mut controller, &fleet, commands).await?;
            for summary in &printed {
                println!("{}", serde_json::to_string_pretty(summary)?);
            }
            controller.settle().await;
            tracing::info!(
                view = %controller.current_view(),
                depth = controller.stack_depth(),
                "replay finished"
            );
        }
    }

    Ok(())
}
