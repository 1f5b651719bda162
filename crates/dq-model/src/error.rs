use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("malformed metadata for schema {schema}, table {table}: {detail}")]
    MalformedMetadata {
        schema: String,
        table: String,
        detail: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
