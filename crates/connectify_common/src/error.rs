// --- File: crates/connectify_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Connectify errors.
///
/// Each crate keeps its own error enum and implements `From<SpecificError> for ConnectifyError`
/// so handlers can render every failure the same way.
#[derive(Error, Debug)]
pub enum ConnectifyError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The caller is known but may not touch the resource
    #[error("Forbidden: {0}")]
    ForbiddenError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred in a storage backend
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Error occurred due to a conflict (e.g., resource already exists)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for ConnectifyError {
    fn status_code(&self) -> u16 {
        match self {
            ConnectifyError::ParseError(_) => 400,
            ConnectifyError::ConfigError(_) => 500,
            ConnectifyError::ForbiddenError(_) => 403,
            ConnectifyError::ValidationError(_) => 400,
            ConnectifyError::StorageError(_) => 500,
            ConnectifyError::ConflictError(_) => 409,
            ConnectifyError::NotFoundError(_) => 404,
            ConnectifyError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, ConnectifyError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, ConnectifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, ConnectifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| ConnectifyError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, ConnectifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| ConnectifyError::InternalError(format!("{}: {}", f(), error)))
    }
}

impl From<serde_json::Error> for ConnectifyError {
    fn from(err: serde_json::Error) -> Self {
        ConnectifyError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for ConnectifyError {
    fn from(err: std::io::Error) -> Self {
        ConnectifyError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> ConnectifyError {
    ConnectifyError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> ConnectifyError {
    ConnectifyError::ValidationError(message.to_string())
}

pub fn forbidden<T: fmt::Display>(message: T) -> ConnectifyError {
    ConnectifyError::ForbiddenError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> ConnectifyError {
    ConnectifyError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> ConnectifyError {
    ConnectifyError::ConflictError(message.to_string())
}
