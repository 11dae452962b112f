use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookstoreError {
    #[error("{message}")]
    InvalidInput { message: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{message}")]
    Api { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("{message}")]
    Unexpected { message: String },
}

impl BookstoreError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BookstoreError>;
