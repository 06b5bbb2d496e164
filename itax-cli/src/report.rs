//! Text rendering for CLI output.

use itax_core::TaxCalculator;

use crate::batch::BatchEntry;

/// Renders a computed calculator: the full slab report, or only the net
/// amount when `summary` is set.
pub fn render(
    calculator: &TaxCalculator,
    summary: bool,
) -> String {
    match calculator.result() {
        Some(result) if summary => format!("Net Tax Payable: {:.2}\n", result.net_tax),
        _ => calculator.format_breakdown(),
    }
}

/// Renders a batch row, prefixed with its row number.
pub fn render_entry(
    entry: &BatchEntry,
    summary: bool,
) -> String {
    match &entry.outcome {
        Ok(calculator) => format!("# row {}\n{}", entry.row, render(calculator, summary)),
        Err(error) => format!("# row {}: {error}\n", entry.row),
    }
}
