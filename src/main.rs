use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use parlor_chess::config::EngineConfig;
use parlor_chess::console::console_top::run_stdio_loop;

/// Play chess against yourself in the terminal, with move suggestions.
#[derive(Debug, Parser)]
#[command(name = "parlor_chess", version, about)]
struct Args {
    /// JSON engine configuration; defaults apply when omitted.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => match EngineConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                error!(path = %path.display(), %err, "could not load config");
                eprintln!("parlor_chess: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };
    info!(?config, "starting console");

    match run_stdio_loop(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "console loop failed");
            ExitCode::FAILURE
        }
    }
}
