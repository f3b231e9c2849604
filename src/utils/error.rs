use thiserror::Error;

#[derive(Error, Debug)]
pub enum LandingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Catalog parse error: {0}")]
    CatalogError(#[from] toml::de::Error),

    #[error("Invalid email address: {value:?}")]
    InvalidEmailError { value: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, LandingError>;
