//! Error types for the console sink

pub type Result<T> = std::result::Result<T, SinkError>;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Category name was empty or whitespace only
    #[error("Invalid category name '{category}': must not be empty or whitespace")]
    InvalidCategory { category: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration document error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Writer thread could not be started
    #[error("Failed to start writer thread: {0}")]
    WorkerSpawn(String),

    /// Writer thread panicked
    #[error("Writer thread panicked: {0}")]
    WriterPanicked(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl SinkError {
    /// Create an invalid category error
    pub fn invalid_category(category: impl Into<String>) -> Self {
        SinkError::InvalidCategory {
            category: category.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        SinkError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SinkError::Other(msg.into())
    }
}
