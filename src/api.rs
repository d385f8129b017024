//! High-level public API for fixture verification.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;

use crate::ArchiveVerifier;
use crate::Result;
use crate::VerifyReport;

/// Verifies every recognized entry of a zip archive read from `reader`.
///
/// Each run consumes the reader once; verifying the same bytes again
/// requires a fresh reader and produces the same result (no state is
/// carried between runs).
///
/// # Errors
///
/// Returns an error if the input is not a well-formed zip archive, if a
/// recognized entry cannot be decoded, or if decoded content does not
/// match the expected fixture values.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use verarch::verify_archive;
///
/// // An empty archive verifies clean with nothing counted.
/// let empty = {
///     let zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
///     zip.finish().unwrap().into_inner()
/// };
/// let report = verify_archive(Cursor::new(empty)).unwrap();
/// assert_eq!(report.total_verified(), 0);
/// ```
pub fn verify_archive<R: Read + Seek>(reader: R) -> Result<VerifyReport> {
    ArchiveVerifier::open(reader)?.verify()
}

/// Opens the archive at `path` and verifies it.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, plus everything
/// [`verify_archive`] can return.
pub fn verify_archive_file<P: AsRef<Path>>(path: P) -> Result<VerifyReport> {
    let file = File::open(path)?;
    verify_archive(BufReader::new(file))
}
