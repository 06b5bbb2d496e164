//! Single-taxpayer input from command-line flags.

use itax_core::InputRecord;

/// Collects the single-taxpayer flags into a record.
///
/// Flags that were not given are left out so validation reports them by
/// name; no flags at all means no record. `income` is stored under
/// `gross_income`.
pub fn record_from_flags(
    sex: Option<&str>,
    age: Option<&str>,
    income: Option<&str>,
) -> Option<InputRecord> {
    let record: InputRecord = [("sex", sex), ("age", age), ("gross_income", income)]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v.to_string())))
        .collect();

    (!record.is_empty()).then_some(record)
}
