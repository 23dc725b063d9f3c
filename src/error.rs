use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single best-effort read. Carried inside a report as data,
/// never bubbled up to abort the whole response.
#[derive(Debug, Error)]
pub enum StatError {
    #[error("Error reading {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    ParseDegenerate(String),

    #[error("{0}")]
    ExternalToolFailure(String),
}

impl StatError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StatError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}

pub type StatResult<T> = Result<T, StatError>;
