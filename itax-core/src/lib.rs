pub mod calculations;
pub mod models;

pub use calculations::{TaxCalculator, calculate_tax};
pub use models::*;
