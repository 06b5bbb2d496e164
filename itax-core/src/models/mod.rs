mod bracket_table;
mod tax_bracket;
mod tax_category;
mod tax_input;
mod tax_result;

pub use bracket_table::{ASSESSMENT_YEAR, BracketTable};
pub use tax_bracket::BracketRow;
pub use tax_category::{SENIOR_CITIZEN_AGE, Sex, TaxCategory};
pub use tax_input::{InputRecord, TaxInput, ValidationError};
pub use tax_result::{BreakdownRow, EDUCATION_CESS_RATE, TaxResult};
