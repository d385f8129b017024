//! Entry classification by filename extension.

/// Recognized entry kinds inside a fixture archive.
///
/// Produced by [`classify_entry`] and matched exhaustively by the
/// dispatch loop. `Other` covers everything the verifier skips:
/// unrecognized extensions, names without an extension separator, and
/// names whose final `.` belongs to a directory component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Delimited text, verified against expected rows.
    Csv,
    /// PDF document, verified by extracted-text containment.
    Pdf,
    /// Spreadsheet workbook, verified by a fixed cell value.
    Xlsx,
    /// Anything else; skipped without error.
    Other,
}

/// Classifies an entry name by its lowercased filename extension.
///
/// The extension is the substring after the final `.` in the name. Names
/// without a `.`, with a trailing `.`, or whose final `.` sits inside a
/// parent directory component classify as [`EntryKind::Other`]. Never
/// panics, for any input.
///
/// # Examples
///
/// ```
/// use verarch::formats::detect::EntryKind;
/// use verarch::formats::detect::classify_entry;
///
/// assert_eq!(classify_entry("data/прайс.CSV"), EntryKind::Csv);
/// assert_eq!(classify_entry("README"), EntryKind::Other);
/// ```
#[must_use]
pub fn classify_entry(name: &str) -> EntryKind {
    match extension(name) {
        Some(ext) => EntryKind::from_extension(&ext),
        None => EntryKind::Other,
    }
}

impl EntryKind {
    /// Maps a lowercase extension token to an entry kind.
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "csv" => Self::Csv,
            "pdf" => Self::Pdf,
            "xlsx" => Self::Xlsx,
            _ => Self::Other,
        }
    }
}

/// Returns the lowercased extension token of an entry name, if it has one.
fn extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() || ext.contains('/') {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
