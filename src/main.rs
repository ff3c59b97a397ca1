//! PARLAY — American/decimal odds conversion and parlay pricing
//!
//! Entry point. Loads configuration, initialises structured logging,
//! then either prices a parlay in one shot or runs the interactive slip.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, info};

use parlay::cli::{self, CalcArgs, Cli, Commands, ConvertArgs};
use parlay::config::AppConfig;
use parlay::slip::BetSlip;

fn main() -> Result<ExitCode> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let args = Cli::parse();
    let cfg = AppConfig::load_or_default(&args.config)?;

    init_logging(&cfg, args.json_logs);
    debug!(
        config = %args.config.display(),
        found = args.config.exists(),
        "Configuration loaded"
    );

    match args.command {
        Some(Commands::Calc(calc)) => run_calc(&cfg, calc),
        Some(Commands::Convert(convert)) => run_convert(convert),
        Some(Commands::Slip) | None => run_slip(&cfg),
    }
}

/// Price a parlay from command-line arguments.
fn run_calc(cfg: &AppConfig, args: CalcArgs) -> Result<ExitCode> {
    let ok = cli::commands::calc(
        &args,
        &cfg.display.currency_symbol,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )?;
    Ok(exit_code(ok))
}

/// Print the American quote for a decimal price.
fn run_convert(args: ConvertArgs) -> Result<ExitCode> {
    let ok = cli::commands::convert(&args, &mut std::io::stdout(), &mut std::io::stderr())?;
    Ok(exit_code(ok))
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Interactive slip on stdin/stdout.
fn run_slip(cfg: &AppConfig) -> Result<ExitCode> {
    let mut slip = BetSlip::new(&cfg.slip);
    info!(max_rows = slip.max_rows(), "Starting interactive slip");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    cli::repl::run(&mut slip, stdin.lock(), &mut stdout, &cfg.display.currency_symbol)?;

    Ok(ExitCode::SUCCESS)
}

/// Initialise the `tracing` subscriber. Logs go to stderr so they never mix
/// with results on stdout.
fn init_logging(cfg: &AppConfig, json_flag: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.filter));

    let json_logging =
        json_flag || cfg.logging.json || std::env::var("PARLAY_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
