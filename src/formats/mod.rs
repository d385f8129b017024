//! Entry classification and per-format verification handlers.

pub mod csv;
pub mod detect;
pub mod pdf;
pub mod xlsx;

// Re-export main types for convenience
pub use detect::EntryKind;
pub use detect::classify_entry;
