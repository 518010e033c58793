use std::io;
use std::path::PathBuf;

/// Failure confined to one page. The batch logs it and moves on.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to copy image {from} -> {to}: {source}")]
    ImageCopy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

impl DocumentError {
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DocumentError::Write {
            path: path.into(),
            source,
        }
    }
}
