//! Persistence errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("no such file: {}", .0.display())]
    NoSuchFile(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid ledger: {0}")]
    InvalidLedger(String),
}

impl PersistError {
    /// Map an open/create failure to `NoSuchFile` when the path does not
    /// resolve, keeping other IO failures as `Io`.
    pub(crate) fn from_open(err: std::io::Error, path: &std::path::Path) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            PersistError::NoSuchFile(path.to_path_buf())
        } else {
            PersistError::Io(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_no_such_file() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let mapped = PersistError::from_open(err, std::path::Path::new("ledger.txt"));
        assert!(matches!(mapped, PersistError::NoSuchFile(_)));
        assert_eq!(mapped.to_string(), "no such file: ledger.txt");
    }

    #[test]
    fn test_other_io_stays_io() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let mapped = PersistError::from_open(err, std::path::Path::new("ledger.txt"));
        assert!(matches!(mapped, PersistError::Io(_)));
    }
}
