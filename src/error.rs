// Error types
// Domain failures raised while saving or editing a project

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while writing a project or one of its members.
///
/// Every I/O problem met during a save is reported through this type, with
/// the underlying `io::Error` kept as the source.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write project output")]
    Write(#[source] io::Error),

    #[error("member {member} has no content to save")]
    MissingContent { member: String },
}

impl SaveError {
    /// The I/O error that caused this failure, if any
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            SaveError::Open { source, .. } | SaveError::Read { source, .. } => Some(source),
            SaveError::Write(source) => Some(source),
            SaveError::MissingContent { .. } => None,
        }
    }
}

/// Failure while editing the member list of a project
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("project already has a member named {0}")]
    DuplicateMember(String),

    #[error("no member named {0}")]
    UnknownMember(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_open_error_keeps_cause() {
        let err = SaveError::Open {
            path: PathBuf::from("missing.pgml"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };

        assert_eq!(err.to_string(), "cannot open missing.pgml");
        assert_eq!(err.io_error().map(|e| e.kind()), Some(io::ErrorKind::NotFound));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_missing_content_has_no_cause() {
        let err = SaveError::MissingContent { member: "P_x.xmi".to_string() };
        assert!(err.io_error().is_none());
        assert!(err.source().is_none());
    }
}
