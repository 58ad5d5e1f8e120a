//! Error types for the Galaxy3D frame graph
//!
//! This module defines the error types used by the target registry,
//! the engine singletons and pass execution.

use std::fmt;

/// Result type for Galaxy3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (lock poisoned, GPU submission failure, etc.)
    BackendError(String),

    /// Invalid resource (unknown key, out-of-range layer, texture still in use, etc.)
    InvalidResource(String),

    /// Initialization failed (engine, subsystems)
    InitializationFailed(String),

    /// A render pass action failed while recording its work
    PassFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::PassFailed(msg) => write!(f, "Render pass failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
