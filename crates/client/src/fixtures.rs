//! Fixture file resolution
//!
//! Upload operations take a fixture name resolved against the configured
//! fixtures directory. Resolution and the read happen before any request is
//! sent; this is the only filesystem interaction in the client.

use std::path::{Path, PathBuf};

use crate::error::{AdminClientError, AdminResult};

/// Fixture uploaded by the require-license remediation path
pub const LICENSE_FIXTURE: &str = "license.txt";

/// Resolve a fixture name against the fixtures directory
pub fn resolve(dir: &Path, name: &str) -> AdminResult<PathBuf> {
    let path = dir.join(name);
    if !path.is_file() {
        return Err(AdminClientError::MissingFixture(path));
    }
    Ok(path)
}

/// Read a fixture's bytes, failing with the resolved path on error
pub fn read(dir: &Path, name: &str) -> AdminResult<Vec<u8>> {
    let path = resolve(dir, name)?;
    std::fs::read(&path).map_err(|source| AdminClientError::FixtureRead { path, source })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolve_existing_fixture() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("license.txt"), b"license-data").unwrap();

        let path = resolve(dir.path(), "license.txt").unwrap();
        assert_eq!(path, dir.path().join("license.txt"));
    }

    #[test]
    fn test_missing_fixture_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = resolve(dir.path(), "absent.txt").unwrap_err();
        match err {
            AdminClientError::MissingFixture(path) => {
                assert_eq!(path, dir.path().join("absent.txt"));
            }
            other => panic!("Expected MissingFixture, got: {:?}", other),
        }
    }

    #[test]
    fn test_read_returns_fixture_bytes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("license.txt"), b"license-data").unwrap();

        let bytes = read(dir.path(), "license.txt").unwrap();
        assert_eq!(bytes, b"license-data");
    }

    #[test]
    fn test_directory_does_not_resolve_as_fixture() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("license.txt")).unwrap();

        assert!(matches!(
            resolve(dir.path(), "license.txt"),
            Err(AdminClientError::MissingFixture(_))
        ));
    }
}
