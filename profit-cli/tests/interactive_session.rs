//! Drives the line-based session end to end through in-memory streams.

use std::io::Cursor;

use pretty_assertions::assert_eq;
use profit_cli::interactive;
use profit_core::CalculatorSession;
use rust_decimal_macros::dec;

fn run_script(script: &str) -> (CalculatorSession, String) {
    let mut session = CalculatorSession::default();
    let mut out = Vec::new();

    interactive::run(&mut session, Cursor::new(script), &mut out).unwrap();

    (session, String::from_utf8(out).unwrap())
}

fn yearly_lines(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| line.starts_with("Total yearly profit"))
        .collect()
}

#[test]
fn initial_render_shows_defaults() {
    let (_, output) = run_script("");

    assert!(output.starts_with("Type `help` for commands."));
    assert_eq!(yearly_lines(&output), vec!["Total yearly profit     $315.00"]);
}

#[test]
fn every_change_re_renders() {
    let (session, output) = run_script("turnover 200000\nsell 2.3\n+\n");

    assert_eq!(session.turnover().value(), dec!(200000));
    assert_eq!(session.sell_rate().value(), dec!(2.4));
    assert_eq!(
        yearly_lines(&output),
        vec![
            "Total yearly profit     $315.00",
            "Total yearly profit     $630.00",
            "Total yearly profit     $1,800.00",
            "Total yearly profit     $1,890.00",
        ]
    );
}

#[test]
fn negative_turnover_is_ignored_without_re_render() {
    let (session, output) = run_script("turnover -50\n");

    assert_eq!(session.turnover().value(), dec!(100000));
    assert!(output.contains("Ignored: turnover must not be negative, got -50. Turnover stays at $100,000.00."));
    assert_eq!(yearly_lines(&output).len(), 1);
}

#[test]
fn slider_input_is_clamped_and_snapped() {
    let (session, output) = run_script("s 9\n");

    assert_eq!(session.sell_rate().value(), dec!(5.0));
    assert!(output.contains("Sell rate               5.0%"));
    assert!(output.contains("Rate difference         4.7%"));
}

#[test]
fn quit_stops_reading() {
    let (session, _) = run_script("t 0\nquit\nt 500\n");

    assert_eq!(session.turnover().value(), dec!(0));
}

#[test]
fn reset_restores_defaults() {
    let (session, output) = run_script("t 5\ns 3\nreset\n");

    assert_eq!(session, CalculatorSession::default());
    assert_eq!(yearly_lines(&output).last(), Some(&"Total yearly profit     $315.00"));
}

#[test]
fn unknown_and_help_commands_do_not_re_render() {
    let (_, output) = run_script("dance\nhelp\n\n");

    assert!(output.contains("Unknown command 'dance'."));
    assert!(output.contains("Commands:"));
    assert_eq!(yearly_lines(&output).len(), 1);
}
