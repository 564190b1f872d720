use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to open output '{}'", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create parent directory for output '{}'", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure collected from a [`crate::Tee`] operation.
#[derive(Debug, Error)]
#[error("{} of {total} outputs failed: {}", .errors.len(), summary(.errors))]
pub struct TeeError {
    pub errors: Vec<io::Error>,
    pub total: usize,
}

fn summary(errors: &[io::Error]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_tee_error_lists_every_failure() {
        let fixture = TeeError {
            errors: vec![
                io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
                io::Error::new(io::ErrorKind::StorageFull, "disk full"),
            ],
            total: 3,
        };
        let actual = fixture.to_string();
        let expected = "2 of 3 outputs failed: pipe closed; disk full";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_open_error_names_the_path() {
        let fixture = Error::Open {
            path: PathBuf::from("/var/log/app.log"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let actual = fixture.to_string();
        let expected = "Failed to open output '/var/log/app.log'";
        assert_eq!(actual, expected);
    }
}
