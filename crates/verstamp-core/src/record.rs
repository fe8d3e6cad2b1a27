//! The delimited version-record format.
//!
//! A version file holds one record: eight ordered fields, each terminated by
//! the [`DELIMITER`] character (including the last, so splitting the line
//! yields a trailing empty element). Fields are positional — no names are
//! persisted. The format has no escaping mechanism; it is safe only because
//! the SemVer grammar admits no `*` in any component and the remaining
//! fields are numeric or hardcoded.
//!
//! Serialized (e.g. to JSON for `--json` output), a record uses the key
//! names build systems consume: `VERSION_STRING`, `VERSION_STRING_FULL`,
//! `VERSION_MAJOR`, `VERSION_MINOR`, `VERSION_PATCH`, `VERSION_TWEAK`,
//! `VERSION_AHEAD`, `VERSION_GIT_SHA`.

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, DecodeResult};

/// Field separator in the version file.
pub const DELIMITER: char = '*';

/// Number of fields a record carries.
pub const FIELD_COUNT: usize = 8;

/// Default file name written when no target is configured.
pub const DEFAULT_VERSION_FILE: &str = "VERSION";

/// A fully decoded version record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct VersionRecord {
    /// The version string exactly as supplied to the encoder.
    pub version_string: String,
    /// Duplicate of the version string (kept for positional compatibility).
    pub version_string_full: String,
    /// SemVer major component.
    pub version_major: u64,
    /// SemVer minor component.
    pub version_minor: u64,
    /// SemVer patch component.
    pub version_patch: u64,
    /// SemVer prerelease component; empty for plain releases.
    pub version_tweak: String,
    /// Commits ahead of the version's tag. Always `0` on encode — a
    /// placeholder for pipeline stages outside this tool.
    pub version_ahead: u64,
    /// Git SHA. Never populated by the encoder.
    pub version_git_sha: String,
}

impl VersionRecord {
    /// Build a record from the literal input string and its parsed version.
    ///
    /// Build metadata (`+...`) is accepted by the grammar but has no field
    /// of its own; it survives only inside the literal string fields.
    pub fn from_version(input: &str, version: &Version) -> Self {
        Self {
            version_string: input.to_owned(),
            version_string_full: input.to_owned(),
            version_major: version.major,
            version_minor: version.minor,
            version_patch: version.patch,
            version_tweak: version.pre.as_str().to_owned(),
            version_ahead: 0,
            version_git_sha: String::new(),
        }
    }

    /// Render the record as its on-disk line.
    ///
    /// Every field is terminated by [`DELIMITER`], the last one included.
    pub fn to_line(&self) -> String {
        format!(
            "{vs}*{vsf}*{major}*{minor}*{patch}*{tweak}*{ahead}*{sha}*",
            vs = self.version_string,
            vsf = self.version_string_full,
            major = self.version_major,
            minor = self.version_minor,
            patch = self.version_patch,
            tweak = self.version_tweak,
            ahead = self.version_ahead,
            sha = self.version_git_sha,
        )
    }

    /// Parse a record from the raw text of a version file.
    ///
    /// Splits on [`DELIMITER`] and maps fields positionally. Each numeric
    /// field coerces on its own: empty text becomes `0`, anything else must
    /// parse as an integer.
    pub fn parse_line(content: &str) -> DecodeResult<Self> {
        let fields: Vec<&str> = content.split(DELIMITER).collect();
        if fields.len() < FIELD_COUNT {
            return Err(DecodeError::TooFewFields {
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        }

        Ok(Self {
            version_string: fields[0].to_owned(),
            version_string_full: fields[1].to_owned(),
            version_major: parse_numeric("VERSION_MAJOR", fields[2])?,
            version_minor: parse_numeric("VERSION_MINOR", fields[3])?,
            version_patch: parse_numeric("VERSION_PATCH", fields[4])?,
            version_tweak: fields[5].to_owned(),
            version_ahead: parse_numeric("VERSION_AHEAD", fields[6])?,
            version_git_sha: fields[7].to_owned(),
        })
    }
}

/// Coerce one numeric field, independent of every other field.
fn parse_numeric(field: &'static str, raw: &str) -> DecodeResult<u64> {
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse().map_err(|source| DecodeError::NonNumeric {
        field,
        value: raw.to_owned(),
        source,
    })
}
