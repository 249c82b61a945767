//! Error types for the universe store.
//!
//! [`StoreError`] covers the failures that propagate to callers.
//! [`ListSkip`] is deliberately not an error: it records why a single
//! file was omitted from a listing, and is logged then swallowed so one
//! unreadable file never aborts the whole enumeration.

/// Errors that can occur in the store layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The universe name sanitizes to an empty filename stem.
    #[error("invalid universe name: {0:?}")]
    InvalidName(String),

    /// No saved universe exists under the sanitized filename.
    #[error("no saved universe named {0:?}")]
    NotFound(String),

    /// An underlying filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reason a file was skipped while building a listing.
///
/// Per-file failures during enumeration are converted into one of these
/// reasons and logged at `debug`; the file is simply left out of the
/// result. A file skipped for [`ListSkip::InvalidJson`] is still
/// loadable byte-for-byte, since load never parses.
#[derive(Debug, thiserror::Error)]
pub enum ListSkip {
    /// The file's metadata (size, mtime) could not be read.
    #[error("cannot stat file: {0}")]
    Stat(String),

    /// The file's content could not be read.
    #[error("cannot read file: {0}")]
    Unreadable(String),

    /// The file's content is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
}
