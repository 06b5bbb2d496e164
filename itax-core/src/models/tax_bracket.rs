use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One income slab taxed at a single marginal rate.
///
/// `max_income` is `None` for the unbounded top slab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketRow {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}

impl BracketRow {
    pub fn new(
        min_income: Decimal,
        max_income: Option<Decimal>,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            min_income,
            max_income,
            tax_rate,
        }
    }

    /// Returns true when `income` fills this slab completely.
    pub fn is_filled_by(
        &self,
        income: Decimal,
    ) -> bool {
        self.max_income.is_some_and(|max| income >= max)
    }
}
