//! Command handlers shared by the binary and the integration tests.

use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

use anyhow::{Context, Result};
use profit_core::{CalculatorSession, SellRate, TurnoverInput, format::format_currency};
use tracing::{info, warn};

use crate::{
    batch,
    render::{Report, SweepTable},
};

/// Offers a command-line turnover to the session. An unusable value keeps
/// the session's current turnover and is reported as a warning.
pub fn apply_turnover(
    session: &mut CalculatorSession,
    candidate: Option<&str>,
) {
    let Some(candidate) = candidate else {
        return;
    };

    if let TurnoverInput::Ignored(reason) = session.input_turnover(candidate) {
        warn!(
            %reason,
            kept = %format_currency(session.turnover().value()),
            "turnover ignored"
        );
    }
}

/// Prints a single report.
pub fn run_compute<W: Write>(
    session: &mut CalculatorSession,
    turnover: Option<&str>,
    sell_rate: Option<SellRate>,
    mut output: W,
) -> Result<()> {
    apply_turnover(session, turnover);
    if let Some(sell_rate) = sell_rate {
        session.set_sell_rate(sell_rate);
    }

    write!(output, "{}", Report(&session.snapshot()))?;
    Ok(())
}

/// Prints the profit table for every slider step in `from..=to`.
pub fn run_sweep<W: Write>(
    session: &mut CalculatorSession,
    turnover: Option<&str>,
    from: SellRate,
    to: SellRate,
    mut output: W,
) -> Result<()> {
    if from > to {
        anyhow::bail!("sweep start {from}% is above sweep end {to}%");
    }
    apply_turnover(session, turnover);

    let table = SweepTable {
        turnover: session.turnover(),
        from,
        to,
    };
    write!(output, "{table}")?;
    Ok(())
}

/// Evaluates a scenario CSV into `output` (stdout when `None`).
/// Returns the number of scenarios written.
pub fn run_batch(
    file: &Path,
    output: Option<&Path>,
) -> Result<usize> {
    let input = File::open(file).with_context(|| format!("Failed to open: {}", file.display()))?;
    let scenarios = batch::load_scenarios(BufReader::new(input))
        .with_context(|| format!("Failed to parse CSV: {}", file.display()))?;

    let written = match output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            batch::write_results(out, &scenarios)
        }
        None => batch::write_results(std::io::stdout().lock(), &scenarios),
    };
    written.context("Failed to write results")?;

    info!(count = scenarios.len(), source = %file.display(), "batch evaluated");
    Ok(scenarios.len())
}
