use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("entry text is empty, please write something first")]
    EmptyEntry,

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode entries: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid entry count {0:?}, expected a positive number or \"All\"")]
    InvalidLimit(String),

    #[error("GEMINI_API_KEY is not configured but required for reflections")]
    MissingApiKey,
}

pub type JournalResult<T> = Result<T, JournalError>;
