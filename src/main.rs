use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use cookielog_core::config::Config;

#[derive(Parser)]
#[command(
    name = "cookielog",
    version,
    about = "Find the most active cookie for a given day in a cookie log"
)]
struct Cli {
    /// Cookie log to analyse (CSV with a `cookie,timestamp` header).
    #[arg(short, long, value_name = "PATH")]
    file: PathBuf,

    /// Day to report on, e.g. 2018-12-09.
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    date: String,

    /// Read settings from this file instead of ~/.config/cookielog/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Raise diagnostic verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // An explicit --config must load; the implicit user file may not.
    let (config, ignored) = match &cli.config {
        Some(path) => match Config::load_from(path) {
            Ok(config) => (config, None),
            Err(err) => {
                eprintln!("{}", cookielog::describe(&err));
                return ExitCode::from(cookielog::exit_code(&err));
            }
        },
        None => match Config::load() {
            Ok(config) => (config, None),
            Err(err) => (Config::defaults(), Some(err)),
        },
    };

    if let Err(err) = init_tracing(&config, cli.verbose) {
        eprintln!("Runtime Error: {err:#}");
        return ExitCode::FAILURE;
    }
    if let Some(err) = ignored {
        tracing::warn!(error = %err, "ignoring user config, using built-in defaults");
    }

    let args = cookielog::Args {
        file: cli.file,
        date: cli.date,
    };
    match cookielog::run(&args, std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("{}", cookielog::describe(&err));
            ExitCode::from(cookielog::exit_code(&err))
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `-v`, which wins over
/// the configured level.
fn init_tracing(config: &Config, verbose: u8) -> anyhow::Result<()> {
    let fallback = match verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(fallback))?;

    match &config.logging.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open diagnostics file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_env_filter(filter)
                .init();
        }
    }
    Ok(())
}
