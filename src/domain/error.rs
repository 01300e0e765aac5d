// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Every failure the data core can report, as one typed enum.
//
// Callers (the training layer, the CLI, the tests) match on
// the variant instead of parsing message text:
//
//   InvalidArgument      → split / tier not recognised (no I/O yet)
//   UnknownDataset       → dataset_name discriminator not known
//   InvalidFractionType  → a tier's testing value is a string
//   FileNotFound         → raw array or metadata file missing
//   ArityMismatch        → per-array counts don't match the arrays
//   IndexOutOfRange      → get(index) past the end
//   LengthMismatch       → input/target lengths differ after sampling
//   MissingSampleAxis    → a zero-dimensional array where samples are expected
//
// The remaining variants wrap lower-level failures together
// with the path that caused them.

use std::path::PathBuf;

use ndarray_npy::{ReadNpyError, WriteNpyError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid {name} '{value}': expected one of {expected}")]
    InvalidArgument {
        name:     &'static str,
        value:    String,
        expected: &'static str,
    },

    #[error("unknown dataset '{0}'")]
    UnknownDataset(String),

    #[error("testing value for tier '{tier}' is set to '{value}', cannot sample real data")]
    InvalidFractionType { tier: String, value: String },

    #[error("no testing value configured for '{0}'")]
    MissingTestingValue(String),

    #[error("file not found: '{}'", .0.display())]
    FileNotFound(PathBuf),

    #[error("refusing to overwrite existing file '{}'", .0.display())]
    FileExists(PathBuf),

    #[error("got {counts} sample counts for {arrays} arrays")]
    ArityMismatch { counts: usize, arrays: usize },

    #[error("index {index} out of range for dataset of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("input has {input} samples but target has {target}")]
    LengthMismatch { input: usize, target: usize },

    #[error("{0} has no sample axis")]
    MissingSampleAxis(String),

    #[error("'{}' is not a numeric array (supported: float, int, uint)", .0.display())]
    UnsupportedDtype(PathBuf),

    #[error("cannot read '{}': {source}", .path.display())]
    Npy {
        path:   PathBuf,
        #[source]
        source: ReadNpyError,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    WriteNpy {
        path:   PathBuf,
        #[source]
        source: WriteNpyError,
    },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Result alias used throughout the data core.
pub type Result<T> = std::result::Result<T, DataError>;

impl DataError {
    /// Map an I/O error to `FileNotFound` when that is what it is,
    /// otherwise keep it as a generic I/O failure on `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            DataError::FileNotFound(path)
        } else {
            DataError::Io { path, source }
        }
    }
}
