//! Error types for the combination resolver.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or serializing combination tables.
///
/// All of these are fatal: descriptor corpora are produced once by an
/// upstream batch job, so nothing here is worth retrying.
#[derive(Debug, Error)]
pub enum Error {
    /// A descriptor referenced a flavor token outside the fixed vocabulary.
    #[error("unknown flavor label {label:?}")]
    UnknownFlavor { label: String },

    /// A beam specification other than pp/ppbar/pbarp/pbarpbar.
    #[error("unrecognised beam type {spec:?} (expected pp, ppbar, pbarp or pbarpbar)")]
    UnknownBeamType { spec: String },

    /// Neither descriptor dialect yielded any files.
    #[error("no subprocess descriptors found under {}: run from the generator's Process directory", .dir.display())]
    NoDescriptorsFound { dir: PathBuf },

    /// A descriptor file or file name that cannot be parsed.
    #[error("malformed descriptor {}: {reason}", .path.display())]
    MalformedDescriptor { path: PathBuf, reason: String },

    /// A combination-config file that cannot be parsed.
    #[error("malformed combination file at line {line}: {reason}")]
    MalformedCombinationFile { line: usize, reason: String },

    /// I/O error (file operations).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
