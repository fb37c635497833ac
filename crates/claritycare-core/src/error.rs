//! Error types for ClarityCare

/// Result type alias using ClarityCare's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ClarityCare operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Scanner construction errors
    #[error("scanner error: {0}")]
    Scanner(String),

    /// Scan policy errors
    #[error("policy error: {0}")]
    Policy(String),

    /// Topic dataset errors
    #[error("store error: {0}")]
    Store(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Policy file parse errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new scanner error
    pub fn scanner(msg: impl Into<String>) -> Self {
        Self::Scanner(msg.into())
    }

    /// Create a new policy error
    pub fn policy(msg: impl Into<String>) -> Self {
        Self::Policy(msg.into())
    }

    /// Create a new store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
