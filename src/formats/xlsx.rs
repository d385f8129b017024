//! XLSX entry verification.
//!
//! Opens the entry bytes as a spreadsheet workbook and checks the string
//! representation of one fixed cell.

use std::io::Cursor;

use calamine::Reader;
use calamine::Xlsx;

use crate::Result;
use crate::VerifyError;

/// Zero-based sheet index of the cell under test (the third sheet).
const SHEET_INDEX: usize = 2;

/// Zero-based (row, column) of the cell under test.
const CELL_POSITION: (u32, u32) = (2, 1);

/// Expected string representation of the cell.
const EXPECTED_CELL: &str = "Склад";

/// Verifies the fixed workbook cell against the expected value.
///
/// # Errors
///
/// Returns [`VerifyError::Decode`] if the bytes are not a readable XLSX
/// workbook and [`VerifyError::Mismatch`] if the sheet or cell is missing
/// at the expected coordinate, or the cell stringifies to anything other
/// than the expected value.
pub fn verify(entry: &str, data: &[u8]) -> Result<()> {
    let mut workbook = Xlsx::new(Cursor::new(data))
        .map_err(|e| VerifyError::decode(entry, format!("invalid XLSX workbook: {e}")))?;

    let range = workbook
        .worksheet_range_at(SHEET_INDEX)
        .ok_or_else(|| {
            VerifyError::mismatch(entry, coordinate(), EXPECTED_CELL, "<no such sheet>")
        })?
        .map_err(|e| {
            VerifyError::decode(entry, format!("failed to read sheet {SHEET_INDEX}: {e}"))
        })?;

    let cell = range.get_value(CELL_POSITION).ok_or_else(|| {
        VerifyError::mismatch(entry, coordinate(), EXPECTED_CELL, "<no such cell>")
    })?;

    let actual = cell.to_string();
    if actual == EXPECTED_CELL {
        Ok(())
    } else {
        Err(VerifyError::mismatch(
            entry,
            coordinate(),
            EXPECTED_CELL,
            actual,
        ))
    }
}

fn coordinate() -> String {
    format!(
        "cell (sheet {SHEET_INDEX}, row {}, col {})",
        CELL_POSITION.0, CELL_POSITION.1
    )
}
