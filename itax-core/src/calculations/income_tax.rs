//! Slab-wise income tax for an individual taxpayer.
//!
//! Income is taxed progressively: each slab the income passes through is
//! taxed in full at its marginal rate, and the slab the income ends in is
//! taxed only up to the income itself. A flat education cess is then added
//! on top of the slab tax.
//!
//! # Example
//!
//! ```
//! use itax_core::{InputRecord, TaxCalculator};
//!
//! let record: InputRecord = [("sex", "m"), ("age", "35"), ("gross_income", "800000")]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v.to_string()))
//!     .collect();
//!
//! let mut calculator = TaxCalculator::from_record(Some(&record)).unwrap();
//! assert_eq!(calculator.compute_tax(), "96820.00");
//!
//! let report = calculator.format_breakdown();
//! assert!(report.ends_with("Net Tax Payable: 96820.00\n"));
//! ```

use std::fmt;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::round_half_up;
use crate::{
    BracketTable, BreakdownRow, EDUCATION_CESS_RATE, InputRecord, TaxCategory, TaxInput,
    TaxResult, ValidationError,
};

/// Computes slab tax, cess and net tax for `gross_income` against `table`.
pub fn calculate_tax(
    table: &BracketTable,
    gross_income: Decimal,
) -> TaxResult {
    let mut breakdown = Vec::new();
    let mut total_tax = Decimal::ZERO;

    for row in table.rows() {
        if gross_income < row.min_income {
            break;
        }

        let filled = row.is_filled_by(gross_income);
        let max_income = match row.max_income {
            Some(max) if filled => max,
            _ => gross_income,
        };
        let tax = (max_income - row.min_income) * row.tax_rate;
        debug!(
            min = %row.min_income,
            max = %max_income,
            rate = %row.tax_rate,
            %tax,
            "slab applied"
        );

        total_tax += tax;
        breakdown.push(BreakdownRow {
            min_income: row.min_income,
            max_income,
            tax_rate: row.tax_rate,
            tax,
        });

        if !filled {
            break;
        }
    }

    let education_cess = total_tax * EDUCATION_CESS_RATE;
    let net_tax = round_half_up(total_tax + education_cess);

    TaxResult {
        breakdown,
        total_tax,
        education_cess,
        net_tax,
    }
}

/// Income tax calculator for one validated taxpayer.
///
/// The calculator starts out uncomputed; [`compute_tax`](Self::compute_tax)
/// fills in the result that [`format_breakdown`](Self::format_breakdown)
/// reports on.
#[derive(Debug, Clone)]
pub struct TaxCalculator {
    input: TaxInput,
    category: TaxCategory,
    result: Option<TaxResult>,
}

impl TaxCalculator {
    pub fn new(input: TaxInput) -> Self {
        let category = TaxCategory::select(input.sex(), input.age());
        debug!(
            %category,
            sex = input.sex().as_str(),
            age = input.age(),
            "selected slab table"
        );

        Self {
            input,
            category,
            result: None,
        }
    }

    /// Validates `record` and builds a calculator from it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the record is absent, has the wrong
    /// keys, or carries a value that does not parse.
    pub fn from_record(record: Option<&InputRecord>) -> Result<Self, ValidationError> {
        TaxInput::from_record(record).map(Self::new)
    }

    /// Computes the tax and returns the net amount payable with two decimals.
    pub fn compute_tax(&mut self) -> String {
        let table = BracketTable::for_category(self.category);
        let result = calculate_tax(table, self.input.gross_income());
        let net_tax = format!("{:.2}", result.net_tax);

        self.result = Some(result);
        net_tax
    }

    /// Renders the slab-wise report.
    ///
    /// Returns an empty string until [`compute_tax`](Self::compute_tax) has
    /// run.
    pub fn format_breakdown(&self) -> String {
        match &self.result {
            Some(result) => result.to_string(),
            None => {
                warn!("breakdown requested before tax was computed");
                String::new()
            }
        }
    }

    pub fn input(&self) -> &TaxInput {
        &self.input
    }

    pub fn category(&self) -> TaxCategory {
        self.category
    }

    /// The last computed result, if any.
    pub fn result(&self) -> Option<&TaxResult> {
        self.result.as_ref()
    }
}

impl fmt::Display for TaxCalculator {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match &self.result {
            Some(result) => fmt::Display::fmt(result, f),
            None => Ok(()),
        }
    }
}
