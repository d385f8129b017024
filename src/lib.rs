//! Content verification for zip-packed document fixtures.
//!
//! `verarch` walks a zip archive, classifies each entry by filename
//! extension, and routes recognized entries (`.csv`, `.pdf`, `.xlsx`) to a
//! parser-backed handler that checks the decoded content against fixed
//! expected values. A companion module performs the same decode-and-assert
//! routine on a standalone JSON document, in both generic-tree and
//! typed-model form. All parsing is delegated to ecosystem crates; this
//! crate owns only the traversal, dispatch, and assertions.
//!
//! # Examples
//!
//! ```no_run
//! use verarch::verify_archive_file;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = verify_archive_file("zip_example.zip")?;
//! assert!(report.covers_all_formats());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod error;
pub mod formats;
pub mod json;
pub mod report;

// Re-export main API types
pub use api::verify_archive;
pub use api::verify_archive_file;
pub use archive::ArchiveVerifier;
pub use error::Result;
pub use error::VerifyError;
pub use formats::EntryKind;
pub use json::verify_client_model;
pub use json::verify_client_tree;
pub use report::VerifyReport;
