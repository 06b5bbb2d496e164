//! Income tax slabs for assessment year 2010-11.
//!
//! | Category | Slab 1 | Slab 2 | Slab 3 | Slab 4 |
//! |----------|--------|--------|--------|--------|
//! | male   | 0 – 1,60,000 @ 0% | 1,60,000 – 5,00,000 @ 10% | 5,00,000 – 8,00,000 @ 20% | 8,00,000+ @ 30% |
//! | female | 0 – 1,90,000 @ 0% | 1,90,000 – 5,00,000 @ 10% | 5,00,000 – 8,00,000 @ 20% | 8,00,000+ @ 30% |
//! | senior | 0 – 2,40,000 @ 0% | 2,40,000 – 5,00,000 @ 10% | 5,00,000 – 8,00,000 @ 20% | 8,00,000+ @ 30% |

use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{BracketRow, TaxCategory};

pub const ASSESSMENT_YEAR: &str = "2010-11";

static MALE: LazyLock<BracketTable> = LazyLock::new(|| BracketTable::with_exemption(dec!(160000)));
static FEMALE: LazyLock<BracketTable> =
    LazyLock::new(|| BracketTable::with_exemption(dec!(190000)));
static SENIOR: LazyLock<BracketTable> =
    LazyLock::new(|| BracketTable::with_exemption(dec!(240000)));

/// Ordered slabs for one [`TaxCategory`].
///
/// Rows are contiguous, sorted by `min_income`, and only the last row is
/// unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketTable {
    rows: Vec<BracketRow>,
}

impl BracketTable {
    /// Returns the fixed table for `category`.
    pub fn for_category(category: TaxCategory) -> &'static BracketTable {
        match category {
            TaxCategory::Male => &*MALE,
            TaxCategory::Female => &*FEMALE,
            TaxCategory::Senior => &*SENIOR,
        }
    }

    pub fn rows(&self) -> &[BracketRow] {
        &self.rows
    }

    // The categories differ only in the width of the nil-rate slab.
    fn with_exemption(exemption_limit: Decimal) -> Self {
        Self {
            rows: vec![
                BracketRow::new(Decimal::ZERO, Some(exemption_limit), dec!(0)),
                BracketRow::new(exemption_limit, Some(dec!(500000)), dec!(0.10)),
                BracketRow::new(dec!(500000), Some(dec!(800000)), dec!(0.20)),
                BracketRow::new(dec!(800000), None, dec!(0.30)),
            ],
        }
    }
}
