use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("base folder not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("file {path} is missing required columns: {columns}")]
    MissingColumns { path: PathBuf, columns: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
