//! Line-driven calculator session.
//!
//! Each input line is one event. Commands that change an input re-render the
//! whole report before the next line is read.

use std::io::{self, BufRead, Write};

use profit_core::{CalculatorSession, TurnoverInput, format::format_currency};
use rust_decimal::Decimal;
use tracing::debug;

use crate::render::Report;

const HELP: &str = "\
Commands:
  turnover <amount>   set the turnover (alias: t)
  sell <rate>         move the sell rate slider (alias: s)
  + / -               move the sell rate one step up / down
  reset               restore the starting inputs
  show                print the current breakdown
  help                print this help
  quit                leave (alias: exit)
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Turnover(String),
    Sell(String),
    Step(i32),
    Reset,
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(word, rest)| (word, rest.trim()))
            .unwrap_or((line, ""));

        match word.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "turnover" | "t" => Self::Turnover(rest.to_string()),
            "sell" | "s" => Self::Sell(rest.to_string()),
            "+" => Self::Step(1),
            "-" => Self::Step(-1),
            "reset" => Self::Reset,
            "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(word.to_string()),
        }
    }
}

/// Runs the session until `quit` or end of input.
pub fn run<R, W>(
    session: &mut CalculatorSession,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Type `help` for commands.")?;
    render(session, &mut output)?;

    for line in input.lines() {
        let command = Command::parse(&line?);
        debug!(?command, "session command");

        let changed = match command {
            Command::Turnover(candidate) => match session.input_turnover(&candidate) {
                TurnoverInput::Accepted(_) => true,
                TurnoverInput::Ignored(reason) => {
                    writeln!(
                        output,
                        "Ignored: {reason}. Turnover stays at {}.",
                        format_currency(session.turnover().value())
                    )?;
                    false
                }
            },
            Command::Sell(raw) => match parse_rate(&raw) {
                Some(rate) => {
                    session.slide_sell_rate(rate);
                    true
                }
                None => {
                    writeln!(output, "Ignored: sell rate '{raw}' is not a number.")?;
                    false
                }
            },
            Command::Step(steps) => {
                session.step_sell_rate(steps);
                true
            }
            Command::Reset => {
                session.reset();
                true
            }
            Command::Show => true,
            Command::Help => {
                write!(output, "{HELP}")?;
                false
            }
            Command::Quit => break,
            Command::Empty => false,
            Command::Unknown(word) => {
                writeln!(output, "Unknown command '{word}'. Type `help` for commands.")?;
                false
            }
        };

        if changed {
            render(session, &mut output)?;
        }
    }

    output.flush()
}

fn render<W: Write>(
    session: &CalculatorSession,
    output: &mut W,
) -> io::Result<()> {
    let snapshot = session.snapshot();
    debug!(
        turnover = %snapshot.turnover,
        sell_rate = %snapshot.sell_rate,
        yearly = %snapshot.breakdown.yearly_profit(),
        "recomputed"
    );
    writeln!(output)?;
    write!(output, "{}", Report(&snapshot))?;
    writeln!(output)
}

fn parse_rate(raw: &str) -> Option<Decimal> {
    raw.trim().trim_end_matches('%').parse().ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_recognises_aliases() {
        assert_eq!(Command::parse("t 5000"), Command::Turnover("5000".to_string()));
        assert_eq!(Command::parse("  SELL  1.5 "), Command::Sell("1.5".to_string()));
        assert_eq!(Command::parse("+"), Command::Step(1));
        assert_eq!(Command::parse("-"), Command::Step(-1));
        assert_eq!(Command::parse("exit"), Command::Quit);
    }

    #[test]
    fn parse_keeps_turnover_text_verbatim() {
        assert_eq!(Command::parse("turnover -50"), Command::Turnover("-50".to_string()));
        assert_eq!(
            Command::parse("turnover 1,000"),
            Command::Turnover("1,000".to_string())
        );
    }

    #[test]
    fn parse_handles_blank_and_unknown_lines() {
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("jump 3"), Command::Unknown("jump".to_string()));
    }

    #[test]
    fn parse_rate_accepts_percent_suffix() {
        assert_eq!(parse_rate("2.5%"), Some(Decimal::new(25, 1)));
        assert_eq!(parse_rate("fast"), None);
    }
}
