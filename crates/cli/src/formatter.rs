#![allow(clippy::format_push_string)]

use stratbet_engine::BacktestResult;

pub struct ResultFormatter;

impl ResultFormatter {
    #[must_use]
    pub fn format(name: &str, result: &BacktestResult) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════\n");
        output.push_str(&format!("  BACKTEST RESULTS — {name}\n"));
        output.push_str("═══════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("Bets\n");
        output.push_str("───────────────────────────────────────────────────────\n");
        output.push_str(&format!("Total Bets:            {}\n", result.total_bets));
        output.push_str(&format!("Wins:                  {}\n", result.wins));
        output.push_str(&format!("Losses:                {}\n", result.losses));
        output.push_str(&format!("Voids:                 {}\n", result.voids));
        output.push_str(&format!(
            "Hit Rate:              {:.1}%\n",
            result.hit_rate * 100.0
        ));
        output.push_str(&format!("Average Odds:          {:.2}\n", result.avg_odds));
        output.push('\n');

        output.push_str("Performance\n");
        output.push_str("───────────────────────────────────────────────────────\n");
        output.push_str(&format!("Total Staked:          {:.2}\n", result.total_staked));
        output.push_str(&format!("Total Profit:          {:.2}\n", result.total_profit));
        output.push_str(&format!("ROI:                   {:.2}%\n", result.roi));
        output.push_str(&format!("Max Drawdown:          {:.2}\n", result.max_drawdown));
        output.push_str(&format!(
            "Max Losing Streak:     {}\n",
            result.max_consecutive_losses
        ));

        if let Some(last) = result.equity_curve.last() {
            output.push('\n');
            output.push_str("Equity Curve (tail)\n");
            output.push_str("───────────────────────────────────────────────────────\n");
            let tail = result.equity_curve.len().saturating_sub(5);
            for point in &result.equity_curve[tail..] {
                output.push_str(&format!(
                    "{}            {:.2}\n",
                    point.date, point.cumulative_profit
                ));
            }
            output.push_str(&format!(
                "Final cumulative:      {:.2}\n",
                last.cumulative_profit
            ));
        }

        output
    }
}
