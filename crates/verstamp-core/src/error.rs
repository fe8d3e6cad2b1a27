//! Error types for verstamp-core

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors from encoding a version string into a version file.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The supplied version string does not satisfy the SemVer 2.0 grammar.
    ///
    /// Raised before any filesystem side effect — a rejected version never
    /// creates or truncates the target file.
    #[error("invalid semver: {0}")]
    InvalidSemver(#[from] semver::Error),

    /// Writing the target file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// The target path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`EncodeError`].
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors from decoding a version file back into a record.
///
/// None of these are recovered locally; a build consuming a version file
/// must stop on a malformed one.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Reading the file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The source path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file does not contain enough delimited fields.
    #[error("malformed version file: expected {expected} fields, found {found}")]
    TooFewFields {
        /// Number of fields the format requires.
        expected: usize,
        /// Number of fields actually present.
        found: usize,
    },

    /// A numeric field holds non-numeric text.
    #[error("field {field} is not numeric: {value:?}")]
    NonNumeric {
        /// The record key of the offending field.
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
        /// The underlying parse error.
        source: std::num::ParseIntError,
    },
}

/// Result type alias using [`DecodeError`].
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur when working with configuration.
///
/// Discovery finding no file is not an error — the loader falls back to
/// defaults — so the only failure mode is a file that will not deserialize.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;
