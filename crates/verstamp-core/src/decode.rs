//! Version decoding — read a stamped file back into a [`VersionRecord`].
//!
//! This is the programmatic half of the tool: build systems call
//! [`read_version_file`] to recover the structured mapping a previous
//! pipeline stage stamped. Malformed files are never partially recovered;
//! the error propagates so the build stops.

use camino::Utf8Path;
use tracing::{debug, instrument};

use crate::error::{DecodeError, DecodeResult};
use crate::record::VersionRecord;

/// Read and parse the version file at `path`.
///
/// # Errors
///
/// [`DecodeError::Io`] if the file cannot be read,
/// [`DecodeError::TooFewFields`] / [`DecodeError::NonNumeric`] if its
/// contents do not form a valid record.
#[instrument(fields(%path))]
pub fn read_version_file(path: &Utf8Path) -> DecodeResult<VersionRecord> {
    let content = std::fs::read_to_string(path).map_err(|source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let record = VersionRecord::parse_line(&content)?;
    debug!(version = %record.version_string, "version file decoded");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::write_version_file;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn temp_path(dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::try_from(dir.path().join(name)).unwrap()
    }

    #[test]
    fn encode_then_decode_recovers_input() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "VERSION");

        for input in ["3.4.5", "2.10.7", "1.0.0-rc.1", "0.1.0-alpha.2+42"] {
            let written = write_version_file(input, &path).unwrap();
            let read = read_version_file(&path).unwrap();
            assert_eq!(read, written);
            assert_eq!(read.version_string, input);
            assert_eq!(read.version_string_full, input);
        }
    }

    #[test]
    fn prerelease_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "VERSION");

        write_version_file("1.0.0-rc.1", &path).unwrap();
        assert_eq!(read_version_file(&path).unwrap().version_tweak, "rc.1");

        write_version_file("1.0.0", &path).unwrap();
        assert_eq!(read_version_file(&path).unwrap().version_tweak, "");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "does-not-exist");

        assert!(matches!(
            read_version_file(&path),
            Err(DecodeError::Io { .. })
        ));
    }

    #[test]
    fn truncated_file_is_format_error() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "VERSION");
        std::fs::write(&path, "1.2.3*1.2.3*1").unwrap();

        assert!(matches!(
            read_version_file(&path),
            Err(DecodeError::TooFewFields { .. })
        ));
    }

    #[test]
    fn corrupt_numeric_field_is_format_error() {
        let dir = TempDir::new().unwrap();
        let path = temp_path(&dir, "VERSION");
        std::fs::write(&path, "1.2.3*1.2.3*1*2*3**many**").unwrap();

        match read_version_file(&path).unwrap_err() {
            DecodeError::NonNumeric { field, .. } => assert_eq!(field, "VERSION_AHEAD"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
