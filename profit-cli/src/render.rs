//! Text rendering of calculator output.

use std::fmt;

use profit_core::{
    BUY_RATE, ProfitSnapshot, SellRate, Turnover,
    calculations::{FIRST_HALF_SHARE, SECOND_HALF_SHARE, compute_for, rate_difference},
    format::{format_currency, format_percentage, format_rate},
};
use rust_decimal::Decimal;

const LABEL_WIDTH: usize = 24;

/// The full calculator view for one snapshot.
pub struct Report<'a>(pub &'a ProfitSnapshot);

impl fmt::Display for Report<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let snapshot = self.0;
        let breakdown = &snapshot.breakdown;
        let turnover = format_currency(snapshot.turnover.value());
        let spread = format_rate(snapshot.rate_difference, 2);

        writeln!(f, "Partnership Profit Calculator")?;
        writeln!(f, "{:<LABEL_WIDTH$}{turnover}", "Turnover")?;
        writeln!(
            f,
            "{:<LABEL_WIDTH$}{}",
            "Sell rate",
            format_percentage(snapshot.sell_rate.value())
        )?;
        writeln!(
            f,
            "{:<LABEL_WIDTH$}{}",
            "Buy rate (fixed)",
            format_percentage(snapshot.buy_rate)
        )?;
        writeln!(
            f,
            "{:<LABEL_WIDTH$}{}",
            "Rate difference",
            format_percentage(snapshot.rate_difference)
        )?;
        writeln!(f)?;
        writeln!(f, "Profit breakdown")?;

        let first_share = share_label(FIRST_HALF_SHARE);
        writeln!(
            f,
            "{:<LABEL_WIDTH$}{}",
            format!("First 6 months ({first_share}%)"),
            format_currency(breakdown.first_half_profit())
        )?;
        writeln!(f, "  {first_share}% × {turnover} × {spread}")?;

        let second_share = share_label(SECOND_HALF_SHARE);
        writeln!(
            f,
            "{:<LABEL_WIDTH$}{}",
            format!("Second 6 months ({second_share}%)"),
            format_currency(breakdown.second_half_profit())
        )?;
        writeln!(f, "  {second_share}% × {turnover} × {spread}")?;

        writeln!(
            f,
            "{:<LABEL_WIDTH$}{}",
            "Total yearly profit",
            format_currency(breakdown.yearly_profit())
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "First 6 months: {first_share}% of (turnover × rate difference) | \
             Second 6 months: {second_share}% of (turnover × rate difference)"
        )
    }
}

/// Profit at every slider position in `from..=to` for one turnover.
pub struct SweepTable {
    pub turnover: Turnover,
    pub from: SellRate,
    pub to: SellRate,
}

impl fmt::Display for SweepTable {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Turnover {}", format_currency(self.turnover.value()))?;
        writeln!(
            f,
            "{:>9}  {:>9}  {:>16}  {:>16}  {:>16}",
            "Sell rate", "Spread", "First 6 months", "Second 6 months", "Yearly"
        )?;

        for rate in SellRate::range(self.from, self.to) {
            let breakdown = compute_for(self.turnover, rate);
            writeln!(
                f,
                "{:>9}  {:>9}  {:>16}  {:>16}  {:>16}",
                format_percentage(rate.value()),
                format_percentage(rate_difference(rate.value(), BUY_RATE)),
                format_currency(breakdown.first_half_profit()),
                format_currency(breakdown.second_half_profit()),
                format_currency(breakdown.yearly_profit()),
            )?;
        }
        Ok(())
    }
}

fn share_label(share: Decimal) -> Decimal {
    (share * Decimal::ONE_HUNDRED).normalize()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use profit_core::CalculatorSession;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn report_shows_default_breakdown() {
        let snapshot = CalculatorSession::default().snapshot();

        let text = Report(&snapshot).to_string();

        let expected = "\
Partnership Profit Calculator
Turnover                $100,000.00
Sell rate               1.0%
Buy rate (fixed)        0.3%
Rate difference         0.7%

Profit breakdown
First 6 months (30%)    $210.00
  30% × $100,000.00 × 0.70%
Second 6 months (15%)   $105.00
  15% × $100,000.00 × 0.70%
Total yearly profit     $315.00

First 6 months: 30% of (turnover × rate difference) | Second 6 months: 15% of (turnover × rate difference)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn sweep_lists_each_step_in_range() {
        let table = SweepTable {
            turnover: Turnover::new(dec!(100000)).unwrap(),
            from: SellRate::new(dec!(0.9)).unwrap(),
            to: SellRate::new(dec!(1.1)).unwrap(),
        };

        let text = table.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Turnover $100,000.00");
        assert!(lines[2].starts_with("     0.9%"));
        assert!(lines[3].contains("$315.00"));
        assert!(lines[4].trim_start().starts_with("1.1%"));
    }

    #[test]
    fn share_label_is_whole_percent() {
        assert_eq!(share_label(FIRST_HALF_SHARE).to_string(), "30");
        assert_eq!(share_label(SECOND_HALF_SHARE).to_string(), "15");
    }
}
