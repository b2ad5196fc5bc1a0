use std::{io, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use profit_core::SellRate;
use tracing::debug;

use profit_cli::{app, config::AppConfig, interactive, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Partnership profit calculator.
///
/// Splits the profit on a partner's turnover between the first and second
/// half of the year, based on the spread between the sell rate and the
/// fixed 0.3% buy rate. Starts an interactive session when no command is
/// given.
#[derive(Debug, Parser)]
#[command(name = "profit-calculator")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML configuration file with default inputs and logging settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter (e.g. `debug` or `warn,profit_core=trace`); RUST_LOG wins
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append log records to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the profit breakdown once
    Compute {
        /// Partner turnover; an invalid or negative value keeps the default
        #[arg(short, long, allow_hyphen_values = true)]
        turnover: Option<String>,

        /// Sell rate in percent, 0.4 to 5.0 in steps of 0.1
        #[arg(short, long)]
        sell_rate: Option<SellRate>,
    },

    /// Read commands from stdin and re-render after every change
    Interactive,

    /// Tabulate profit across sell rate slider positions
    Sweep {
        /// Partner turnover; an invalid or negative value keeps the default
        #[arg(short, long, allow_hyphen_values = true)]
        turnover: Option<String>,

        /// First sell rate in the table
        #[arg(long, default_value = "0.4")]
        from: SellRate,

        /// Last sell rate in the table
        #[arg(long, default_value = "5.0")]
        to: SellRate,
    },

    /// Evaluate a CSV file of `turnover,sell_rate` scenarios
    Batch {
        /// Path to the scenario CSV
        #[arg(short, long)]
        file: PathBuf,

        /// Where to write the results (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    let log_file = cli.log_file.as_deref().or(config.logging.file.as_deref());
    logging::init_logging(level, log_file)?;

    debug!(?config, "configuration loaded");
    let mut session = config.session().context("Invalid configuration")?;

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Compute {
            turnover,
            sell_rate,
        } => app::run_compute(&mut session, turnover.as_deref(), sell_rate, io::stdout().lock()),
        Command::Interactive => {
            interactive::run(&mut session, io::stdin().lock(), io::stdout().lock())
                .context("Interactive session failed")
        }
        Command::Sweep { turnover, from, to } => {
            app::run_sweep(&mut session, turnover.as_deref(), from, to, io::stdout().lock())
        }
        Command::Batch { file, output } => {
            app::run_batch(&file, output.as_deref()).map(|_| ())
        }
    }
}
