//! CSV entry verification.
//!
//! Decodes entry bytes as comma-separated UTF-8 text (standard quoting,
//! so fields may contain commas and newlines) and checks the parsed rows
//! against the expected fixture content.

use csv::ReaderBuilder;

use crate::Result;
use crate::VerifyError;

/// Expected fixture rows, in order. Field order within a row matters.
const EXPECTED_ROWS: [[&str; 3]; 3] = [
    ["тест1", "тест2", "тест123"],
    ["это", "зеленый", "тест"],
    ["тест2", "тест3", "тест666"],
];

/// Verifies that `data` decodes to exactly the expected CSV rows.
///
/// # Errors
///
/// Returns [`VerifyError::Decode`] if the bytes are not valid CSV (or not
/// valid UTF-8), and [`VerifyError::Mismatch`] on wrong row count or any
/// row whose field sequence deviates from the expected one.
pub fn verify(entry: &str, data: &[u8]) -> Result<()> {
    let mut reader = ReaderBuilder::new().has_headers(false).from_reader(data);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record
            .map_err(|e| VerifyError::decode(entry, format!("invalid CSV content: {e}")))?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    if rows.len() != EXPECTED_ROWS.len() {
        return Err(VerifyError::mismatch(
            entry,
            "row count",
            EXPECTED_ROWS.len().to_string(),
            rows.len().to_string(),
        ));
    }

    for (index, (actual, expected)) in rows.iter().zip(EXPECTED_ROWS).enumerate() {
        let matches = actual.len() == expected.len()
            && actual.iter().map(String::as_str).eq(expected.iter().copied());
        if !matches {
            return Err(VerifyError::mismatch(
                entry,
                format!("row {}", index + 1),
                format!("{expected:?}"),
                format!("{actual:?}"),
            ));
        }
    }

    Ok(())
}
