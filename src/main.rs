mod actions;
mod api;
mod config;
mod consts;
mod dashboard;
mod error;
mod format;
mod logging;
mod page;
mod pretty;
mod render;
mod session;
mod timing;

use crate::actions::ExportTarget;
use crate::config::{Config, get_config_path};
use crate::consts::dashboard_consts::API_URL_ENV;
use crate::error::DashboardError;
use crate::pretty::{print_cmd_error, print_cmd_info};
use crate::session::{run_export, run_snapshot, run_watch_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Path to the config file (default: ~/.bot-dashboard/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL of the bot's web interface. Overrides the config file and DASHBOARD_API_URL.
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Log at debug level or finer, whatever RUST_LOG says
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the dashboard, keeping the HTML snapshot current. Reads commands from stdin.
    Watch {
        /// Snapshot path, overriding the config file
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Load the data once and write the HTML snapshot
    Snapshot {
        /// Snapshot path, overriding the config file
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Load the data once and export it as JSON
    Export {
        /// What to export: dashboard, videos or users
        target: ExportTarget,

        /// Export directory, overriding the config file
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
    /// Write the effective configuration to the config file
    InitConfig,
}

fn load_config(args: &Args) -> Result<(Config, PathBuf), DashboardError> {
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => get_config_path()?,
    };
    let config = Config::load_or_default(&config_path)?
        .with_api_url(std::env::var(API_URL_ENV).ok())
        .with_api_url(args.api_url.clone());
    log::debug!("Loaded config from {}", config_path.display());
    Ok((config, config_path))
}

async fn run(args: Args) -> Result<(), DashboardError> {
    let (mut config, config_path) = load_config(&args)?;

    match args.command {
        Command::Watch { output } => {
            if let Some(output) = output {
                config.snapshot_path = output;
            }
            run_watch_mode(setup_session(&config)?).await
        }
        Command::Snapshot { output } => {
            if let Some(output) = output {
                config.snapshot_path = output;
            }
            run_snapshot(setup_session(&config)?).await.map(|_| ())
        }
        Command::Export { target, dir } => {
            if let Some(dir) = dir {
                config.export_dir = dir;
            }
            run_export(setup_session(&config)?, target).await.map(|_| ())
        }
        Command::InitConfig => {
            config.save(&config_path)?;
            print_cmd_info!("Config saved", "{}", config_path.display());
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    if let Err(e) = run(args).await {
        print_cmd_error!("Dashboard command failed", "{}", e);
        return Err(e.into());
    }
    Ok(())
}
