//! Archive traversal and entry dispatch.

use std::io::Read;
use std::io::Seek;

use zip::ZipArchive;

use crate::Result;
use crate::VerifyError;
use crate::VerifyReport;
use crate::formats;
use crate::formats::EntryKind;
use crate::formats::classify_entry;

/// Walks a zip archive and verifies the content of recognized entries.
///
/// Entries are visited in archive order, one pass, each consumed once.
/// Every `.csv`, `.pdf`, and `.xlsx` entry is decoded by its designated
/// parser and checked against the expected fixture content; anything else
/// is skipped without error. The first failing entry aborts the scan.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use std::io::BufReader;
/// use verarch::ArchiveVerifier;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let file = File::open("zip_example.zip")?;
/// let report = ArchiveVerifier::open(BufReader::new(file))?.verify()?;
/// println!("verified {} entries", report.total_verified());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ArchiveVerifier<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> ArchiveVerifier<R> {
    /// Opens a zip archive from a reader positioned at the start of the
    /// zip data.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::MalformedArchive`] if the bytes are not a
    /// well-formed zip structure. No entries are processed in that case.
    pub fn open(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader).map_err(|e| {
            VerifyError::MalformedArchive(format!("failed to open ZIP archive: {e}"))
        })?;
        tracing::debug!(entries = archive.len(), "opened archive");
        Ok(Self { archive })
    }

    /// Returns the number of entries in the archive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Returns `true` if the archive has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Verifies every recognized entry in archive order.
    ///
    /// # Errors
    ///
    /// Propagates the first [`VerifyError`] raised by entry access, entry
    /// decoding, or a content check. On success, the report counts the
    /// verified entries per kind and the skipped entries.
    pub fn verify(&mut self) -> Result<VerifyReport> {
        let mut report = VerifyReport::new();

        for index in 0..self.archive.len() {
            let mut entry = self.archive.by_index(index).map_err(|e| {
                VerifyError::MalformedArchive(format!("failed to read ZIP entry {index}: {e}"))
            })?;

            if entry.is_dir() {
                report.entries_skipped += 1;
                continue;
            }

            let name = entry.name().to_owned();
            match classify_entry(&name) {
                EntryKind::Csv => {
                    let data = read_entry(&mut entry, &name)?;
                    drop(entry);
                    tracing::debug!(entry = %name, bytes = data.len(), "verifying csv entry");
                    formats::csv::verify(&name, &data)?;
                    report.csv_entries += 1;
                }
                EntryKind::Pdf => {
                    let data = read_entry(&mut entry, &name)?;
                    drop(entry);
                    tracing::debug!(entry = %name, bytes = data.len(), "verifying pdf entry");
                    formats::pdf::verify(&name, &data)?;
                    report.pdf_entries += 1;
                }
                EntryKind::Xlsx => {
                    let data = read_entry(&mut entry, &name)?;
                    drop(entry);
                    tracing::debug!(entry = %name, bytes = data.len(), "verifying xlsx entry");
                    formats::xlsx::verify(&name, &data)?;
                    report.xlsx_entries += 1;
                }
                EntryKind::Other => {
                    tracing::trace!(entry = %name, "unrecognized extension, skipping");
                    report.entries_skipped += 1;
                }
            }
        }

        Ok(report)
    }
}

/// Reads one entry's bytes; a failure mid-stream means the entry payload
/// itself is corrupt, which counts as a decode failure for that entry.
fn read_entry<E: Read>(entry: &mut E, name: &str) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    entry
        .read_to_end(&mut data)
        .map_err(|e| VerifyError::decode(name, format!("failed to read entry bytes: {e}")))?;
    Ok(data)
}
