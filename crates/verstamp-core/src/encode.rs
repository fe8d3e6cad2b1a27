//! Version encoding — validate a SemVer string and stamp the version file.
//!
//! Validation happens strictly before the write: a rejected version string
//! never creates or truncates the target file. The write itself is a plain
//! create-or-truncate; concurrent stampers against the same path race with
//! last-writer-wins semantics and no atomicity.

use camino::Utf8Path;
use semver::Version;
use tracing::{debug, instrument};

use crate::error::{EncodeError, EncodeResult};
use crate::record::VersionRecord;

/// Validate a version string against the SemVer 2.0 grammar.
///
/// Unlike release tooling that tolerates a `v` prefix, the grammar here is
/// strict: `v1.2.3` is rejected.
#[instrument]
pub fn validate_version(version_str: &str) -> EncodeResult<Version> {
    let version = Version::parse(version_str)?;
    debug!(%version, "validated version string");
    Ok(version)
}

/// Build a [`VersionRecord`] from a SemVer string without touching disk.
pub fn encode_version(version_str: &str) -> EncodeResult<VersionRecord> {
    let version = validate_version(version_str)?;
    Ok(VersionRecord::from_version(version_str, &version))
}

/// Validate `version_str` and overwrite `path` with its record.
///
/// Returns the record that was written so callers can display it.
///
/// # Errors
///
/// [`EncodeError::InvalidSemver`] if the string fails the grammar (no file
/// is written), [`EncodeError::Io`] if the target path is unwritable.
#[instrument(fields(%path))]
pub fn write_version_file(version_str: &str, path: &Utf8Path) -> EncodeResult<VersionRecord> {
    let record = encode_version(version_str)?;

    std::fs::write(path, record.to_line()).map_err(|source| EncodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(version = version_str, "version file written");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn temp_path(dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::try_from(dir.path().join(name)).unwrap()
    }

    #[test]
    fn valid_version_accepted() {
        assert_eq!(validate_version("1.2.3").unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn v_prefix_rejected() {
        assert!(validate_version("v1.2.3").is_err());
    }

    #[test]
    fn invalid_version_rejected() {
        assert!(matches!(
            encode_version("not-a-version"),
            Err(EncodeError::InvalidSemver(_))
        ));
    }

    #[test]
    fn write_produces_exact_bytes() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "VERSION");

        write_version_file("3.4.5", &path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "3.4.5*3.4.5*3*4*5**0**"
        );
    }

    #[test]
    fn write_overwrites_previous_record() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "VERSION");

        write_version_file("1.0.0", &path).unwrap();
        write_version_file("2.0.0", &path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "2.0.0*2.0.0*2*0*0**0**"
        );
    }

    #[test]
    fn rejected_version_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "VERSION");

        assert!(write_version_file("not-a-version", &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn rejected_version_preserves_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "VERSION");

        write_version_file("1.0.0", &path).unwrap();
        assert!(write_version_file("nope", &path).is_err());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "1.0.0*1.0.0*1*0*0**0**"
        );
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "missing-dir/VERSION");

        assert!(matches!(
            write_version_file("1.0.0", &path),
            Err(EncodeError::Io { .. })
        ));
    }

    #[test]
    fn ahead_and_sha_are_placeholders() {
        let record = encode_version("9.9.9-alpha+exp.sha.5114f85").unwrap();
        assert_eq!(record.version_ahead, 0);
        assert_eq!(record.version_git_sha, "");
        assert_eq!(record.version_tweak, "alpha");
    }
}
