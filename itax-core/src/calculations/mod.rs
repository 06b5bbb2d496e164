//! Income tax calculation for individual taxpayers.
//!
//! This module provides the slab computation and the calculator that wraps
//! it, along with shared decimal helpers.

pub mod common;
pub mod income_tax;

pub use income_tax::{TaxCalculator, calculate_tax};
