//! Error types for the VNFSvc provider

use thiserror::Error;

/// Result type alias using the provider Error
pub type Result<T> = std::result::Result<T, Error>;

/// Provider error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("Resource not found: {kind} with id {id}")]
    NotFound { kind: String, id: String },

    #[error("Resource already exists: {kind} with id {id}")]
    AlreadyExists { kind: String, id: String },

    #[error("VNFSvc API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid property '{property}': {reason}")]
    InvalidProperty { property: String, reason: String },

    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),

    #[error("No identifier available for {kind}")]
    MissingIdentifier { kind: String },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Operation timeout after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// True when the remote service reported the resource as missing.
    ///
    /// This is the only condition callers are expected to recover from
    /// (idempotent delete and delete confirmation).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. } | Error::Api { status: 404, .. })
    }

    pub fn invalid_property(property: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidProperty {
            property: property.into(),
            reason: reason.into(),
        }
    }
}
