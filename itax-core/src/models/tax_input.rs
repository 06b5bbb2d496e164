use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use super::Sex;

/// Untyped input as it arrives from a caller: field name to raw value.
pub type InputRecord = BTreeMap<String, String>;

const SEX: &str = "sex";
const AGE: &str = "age";
const GROSS_INCOME: &str = "gross_income";

const REQUIRED_KEYS: [&str; 3] = [SEX, AGE, GROSS_INCOME];

/// Reasons an input record is rejected.
///
/// The display text of each variant is the message shown to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// No record was supplied at all.
    #[error("Missing input parameters.")]
    MissingInput,

    /// A required key is absent from the record.
    #[error("Missing key {0}.")]
    MissingKey(&'static str),

    /// The record carries keys beyond `sex`, `age` and `gross_income`.
    #[error("Invalid number of keys found in the input hash.")]
    InvalidKeyCount(usize),

    /// A key is present but its value does not parse.
    #[error("Invalid value for key {0}.")]
    InvalidValue(&'static str),
}

/// Validated taxpayer details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxInput {
    sex: Sex,
    age: u32,
    gross_income: Decimal,
}

impl TaxInput {
    /// Builds an input from already-typed values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] if `gross_income` is negative.
    pub fn new(
        sex: Sex,
        age: u32,
        gross_income: Decimal,
    ) -> Result<Self, ValidationError> {
        if gross_income < Decimal::ZERO {
            return Err(ValidationError::InvalidValue(GROSS_INCOME));
        }

        Ok(Self {
            sex,
            age,
            gross_income,
        })
    }

    /// Validates a raw record and converts it into a [`TaxInput`].
    ///
    /// Checks run in a fixed order: the record must be present, every
    /// required key must exist, no other key may exist, and finally each
    /// value must parse.
    ///
    /// # Example
    ///
    /// ```
    /// use itax_core::{InputRecord, TaxInput, ValidationError};
    ///
    /// let mut record = InputRecord::new();
    /// record.insert("age".into(), "35".into());
    /// record.insert("gross_income".into(), "800000".into());
    ///
    /// assert_eq!(
    ///     TaxInput::from_record(Some(&record)),
    ///     Err(ValidationError::MissingKey("sex"))
    /// );
    ///
    /// record.insert("sex".into(), "m".into());
    /// assert!(TaxInput::from_record(Some(&record)).is_ok());
    /// ```
    pub fn from_record(record: Option<&InputRecord>) -> Result<Self, ValidationError> {
        let record = record.ok_or(ValidationError::MissingInput)?;

        let [sex, age, gross_income] = REQUIRED_KEYS.map(|key| record.get(key));
        let sex = sex.ok_or(ValidationError::MissingKey(SEX))?;
        let age = age.ok_or(ValidationError::MissingKey(AGE))?;
        let gross_income = gross_income.ok_or(ValidationError::MissingKey(GROSS_INCOME))?;

        if record.len() != REQUIRED_KEYS.len() {
            return Err(ValidationError::InvalidKeyCount(record.len()));
        }

        let sex = Sex::parse(sex).ok_or(ValidationError::InvalidValue(SEX))?;
        let age = parse_age(age).ok_or(ValidationError::InvalidValue(AGE))?;
        let gross_income =
            parse_income(gross_income).ok_or(ValidationError::InvalidValue(GROSS_INCOME))?;

        Self::new(sex, age, gross_income)
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gross_income(&self) -> Decimal {
        self.gross_income
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Accepts plain digits only: no sign, no fraction, no surrounding space.
///
/// Ages are bounded by `u32`; a longer digit string is rejected as invalid.
fn parse_age(value: &str) -> Option<u32> {
    if !is_digits(value) {
        return None;
    }
    value.parse().ok()
}

/// Accepts `digits` or `digits.digits`.
fn parse_income(value: &str) -> Option<Decimal> {
    let well_formed = match value.split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => is_digits(value),
    };
    if !well_formed {
        return None;
    }
    Decimal::from_str(value).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn record(pairs: &[(&str, &str)]) -> InputRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid_record() -> InputRecord {
        record(&[("sex", "m"), ("age", "35"), ("gross_income", "800000")])
    }

    // =========================================================================
    // from_record: shape checks
    // =========================================================================

    #[test]
    fn from_record_rejects_missing_record() {
        let err = TaxInput::from_record(None).unwrap_err();

        assert_eq!(err, ValidationError::MissingInput);
        assert_eq!(err.to_string(), "Missing input parameters.");
    }

    #[test]
    fn from_record_rejects_empty_record() {
        let err = TaxInput::from_record(Some(&InputRecord::new())).unwrap_err();

        assert_eq!(err, ValidationError::MissingKey("sex"));
    }

    #[test]
    fn from_record_reports_missing_sex() {
        let input = record(&[("age", "35"), ("gross_income", "800000")]);

        let err = TaxInput::from_record(Some(&input)).unwrap_err();

        assert_eq!(err.to_string(), "Missing key sex.");
    }

    #[test]
    fn from_record_reports_missing_age_and_income() {
        let no_age = record(&[("sex", "m"), ("gross_income", "800000")]);
        let no_income = record(&[("sex", "m"), ("age", "35")]);

        assert_eq!(
            TaxInput::from_record(Some(&no_age)).unwrap_err().to_string(),
            "Missing key age."
        );
        assert_eq!(
            TaxInput::from_record(Some(&no_income))
                .unwrap_err()
                .to_string(),
            "Missing key gross_income."
        );
    }

    #[test]
    fn from_record_reports_missing_key_before_key_count() {
        // Three keys, but one of them is not a required key.
        let input = record(&[("sex", "m"), ("age", "35"), ("income", "800000")]);

        let err = TaxInput::from_record(Some(&input)).unwrap_err();

        assert_eq!(err, ValidationError::MissingKey("gross_income"));
    }

    #[test]
    fn from_record_rejects_extra_key() {
        let mut input = valid_record();
        input.insert("city".to_string(), "Pune".to_string());

        let err = TaxInput::from_record(Some(&input)).unwrap_err();

        assert_eq!(err, ValidationError::InvalidKeyCount(4));
        assert_eq!(
            err.to_string(),
            "Invalid number of keys found in the input hash."
        );
    }

    // =========================================================================
    // from_record: value checks
    // =========================================================================

    #[test]
    fn from_record_rejects_unknown_sex() {
        let mut input = valid_record();
        input.insert("sex".to_string(), "s".to_string());

        let err = TaxInput::from_record(Some(&input)).unwrap_err();

        assert_eq!(err.to_string(), "Invalid value for key sex.");
    }

    #[test]
    fn from_record_accepts_upper_case_sex() {
        let mut input = valid_record();
        input.insert("sex".to_string(), "F".to_string());

        let parsed = TaxInput::from_record(Some(&input)).unwrap();

        assert_eq!(parsed.sex(), Sex::Female);
    }

    #[test]
    fn from_record_rejects_non_integer_age() {
        for bad in ["abc", "", "-1", "35.5", "+35", " 35"] {
            let mut input = valid_record();
            input.insert("age".to_string(), bad.to_string());

            let err = TaxInput::from_record(Some(&input)).unwrap_err();

            assert_eq!(err, ValidationError::InvalidValue("age"), "age {bad:?}");
        }
    }

    #[test]
    fn from_record_rejects_age_beyond_u32() {
        let mut input = valid_record();
        input.insert("age".to_string(), "4294967296".to_string());

        let err = TaxInput::from_record(Some(&input)).unwrap_err();

        assert_eq!(err.to_string(), "Invalid value for key age.");
    }

    #[test]
    fn from_record_accepts_largest_u32_age() {
        let mut input = valid_record();
        input.insert("age".to_string(), "4294967295".to_string());

        let parsed = TaxInput::from_record(Some(&input)).unwrap();

        assert_eq!(parsed.age(), u32::MAX);
    }

    #[test]
    fn from_record_rejects_non_numeric_income() {
        for bad in ["abc", "", "-100", "1e5", "100.", ".5", "1,00,000"] {
            let mut input = valid_record();
            input.insert("gross_income".to_string(), bad.to_string());

            let err = TaxInput::from_record(Some(&input)).unwrap_err();

            assert_eq!(
                err.to_string(),
                "Invalid value for key gross_income.",
                "income {bad:?}"
            );
        }
    }

    #[test]
    fn from_record_parses_valid_values() {
        let input = record(&[("sex", "f"), ("age", "67"), ("gross_income", "800000.50")]);

        let parsed = TaxInput::from_record(Some(&input)).unwrap();

        assert_eq!(parsed.sex(), Sex::Female);
        assert_eq!(parsed.age(), 67);
        assert_eq!(parsed.gross_income(), dec!(800000.50));
    }

    #[test]
    fn from_record_accepts_zero_age_and_income() {
        let input = record(&[("sex", "m"), ("age", "0"), ("gross_income", "0")]);

        let parsed = TaxInput::from_record(Some(&input)).unwrap();

        assert_eq!(parsed.age(), 0);
        assert_eq!(parsed.gross_income(), Decimal::ZERO);
    }

    // =========================================================================
    // new
    // =========================================================================

    #[test]
    fn new_rejects_negative_income() {
        let err = TaxInput::new(Sex::Male, 30, dec!(-1)).unwrap_err();

        assert_eq!(err, ValidationError::InvalidValue("gross_income"));
    }

    #[test]
    fn new_accepts_non_negative_income() {
        let input = TaxInput::new(Sex::Male, 30, dec!(0)).unwrap();

        assert_eq!(input.gross_income(), dec!(0));
    }
}
