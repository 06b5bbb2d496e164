use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{percent, round_half_up};

/// Education cess levied on the total slab tax.
pub const EDUCATION_CESS_RATE: Decimal = dec!(0.03);

/// Tax attributed to one slab.
///
/// `max_income` is the effective upper bound: the slab's own ceiling when the
/// income fills it, otherwise the gross income itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub min_income: Decimal,
    pub max_income: Decimal,
    pub tax_rate: Decimal,
    pub tax: Decimal,
}

impl BreakdownRow {
    /// The nil-rate bottom slab is always reported; other slabs only when
    /// they carry tax.
    pub fn is_reported(&self) -> bool {
        !self.tax.is_zero() || self.min_income.is_zero()
    }
}

/// Outcome of a slab computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub breakdown: Vec<BreakdownRow>,
    pub total_tax: Decimal,
    pub education_cess: Decimal,
    /// Total tax plus cess, rounded half-up to two places.
    pub net_tax: Decimal,
}

impl fmt::Display for TaxResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for row in self.breakdown.iter().filter(|row| row.is_reported()) {
            writeln!(
                f,
                "Tax on Income between {} - {} @ {:.2}% : {:.2}",
                row.min_income,
                row.max_income,
                percent(row.tax_rate),
                round_half_up(row.tax)
            )?;
        }

        writeln!(f, "Total Tax: {:.2}", round_half_up(self.total_tax))?;
        writeln!(
            f,
            "Education Cess @ {:.2}% of Total Tax: {:.2}",
            percent(EDUCATION_CESS_RATE),
            round_half_up(self.education_cess)
        )?;
        writeln!(f, "Net Tax Payable: {:.2}", self.net_tax)
    }
}
