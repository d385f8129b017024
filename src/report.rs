//! Verification run reporting.

/// Report of a completed archive verification scan.
///
/// Carries scan counters only; content never outlives the per-entry
/// handlers. A report is produced only when every dispatched entry
/// passed its handler — a failing entry aborts the run with an error
/// instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Number of `.csv` entries decoded and verified.
    pub csv_entries: usize,

    /// Number of `.pdf` entries decoded and verified.
    pub pdf_entries: usize,

    /// Number of `.xlsx` entries decoded and verified.
    pub xlsx_entries: usize,

    /// Number of entries skipped (directories and unrecognized extensions).
    pub entries_skipped: usize,
}

impl VerifyReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of entries that were decoded and verified.
    #[must_use]
    pub const fn total_verified(&self) -> usize {
        self.csv_entries + self.pdf_entries + self.xlsx_entries
    }

    /// Returns `true` if at least one entry of every recognized kind was
    /// verified.
    #[must_use]
    pub const fn covers_all_formats(&self) -> bool {
        self.csv_entries > 0 && self.pdf_entries > 0 && self.xlsx_entries > 0
    }
}
