//! Core library for verstamp.
//!
//! This crate provides the version-record format used by the `verstamp` CLI
//! and by build systems that consume the stamped file programmatically.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and management
//! - [`decode`] - Reading a version file back into a [`record::VersionRecord`]
//! - [`encode`] - Validating a SemVer string and writing the version file
//! - [`error`] - Error types and result aliases
//! - [`record`] - The delimited record format itself
//!
//! # Quick Start
//!
//! ```no_run
//! use camino::Utf8Path;
//! use verstamp_core::{decode, encode};
//!
//! let record = encode::write_version_file("1.2.3", Utf8Path::new("VERSION"))
//!     .expect("failed to stamp version");
//! assert_eq!(record.version_major, 1);
//!
//! let read_back = decode::read_version_file(Utf8Path::new("VERSION"))
//!     .expect("failed to read version file");
//! assert_eq!(read_back, record);
//! ```
#![deny(unsafe_code)]

pub mod config;

pub mod decode;

pub mod encode;

pub mod error;

pub mod record;

pub use config::{Config, ConfigLoader, LogLevel};

pub use error::{ConfigError, ConfigResult, DecodeError, EncodeError};

pub use record::VersionRecord;

// Re-export semver so downstream crates don't need a direct dependency.
pub use semver;
