use anyhow::{Context, Result};
use clap::Parser;
use listfold::config::{Config, ConfigOverrides};
use listfold::halving;
use listfold::report::{OutputFormat, ReportFormatter};
use listfold::ListFoldError;
use std::path::PathBuf;
use tracing::{debug, error, trace};

/// Build a series of sequentially halved quantities with a left fold
#[derive(Parser)]
#[command(name = "listfold", version)]
#[command(about = "Fold over a step sequence to build sequentially halved quantities", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Quantity at step zero (default: 1000)
    #[arg(long, allow_negative_numbers = true)]
    initial: Option<f64>,

    /// Number of halving iterations (default: 10)
    #[arg(short = 'n', long)]
    steps: Option<u32>,

    /// Value each quantity is divided by (default: 2)
    #[arg(long, allow_negative_numbers = true)]
    divisor: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        let exit_code = e
            .downcast_ref::<ListFoldError>()
            .map(ListFoldError::exit_code)
            .unwrap_or(1);
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match load_config(cli) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(cli.verbose, "info");
            return Err(e);
        }
    };
    init_tracing(cli.verbose, config.log_level());

    debug!("listfold started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let report = halving::run(&config.halving)?;
    print!("{}", ReportFormatter::new(cli.format).format(&report));
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::new(),
    };
    config.merge_env_vars();
    config.apply_overrides(&ConfigOverrides {
        initial_quantity: cli.initial,
        steps: cli.steps,
        divisor: cli.divisor,
    });
    Ok(config)
}

fn init_tracing(verbose: u8, configured_level: &str) {
    let log_level = match verbose {
        0 => configured_level,
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2) // Show target module for -vv and above
        .with_line_number(verbose >= 2)
        .init();
}
