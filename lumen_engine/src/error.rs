//! Error types for the Lumen GL engine
//!
//! This module defines the error types used throughout the engine,
//! covering shader loading, backend failures, and initialization.

use std::fmt;

/// Result type for Lumen GL engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Lumen GL engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (OpenGL object creation, context queries, etc.)
    BackendError(String),

    /// Failed to read a shader source file (message names the path)
    Io(String),

    /// A shader stage failed to compile (message names the path and carries
    /// the driver's diagnostic log)
    CompileFailed(String),

    /// The program failed to link (message carries the driver's diagnostic log)
    LinkFailed(String),

    /// Initialization failed (window, GL context, event loop)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::CompileFailed(msg) => write!(f, "Shader compilation failed: {}", msg),
            Error::LinkFailed(msg) => write!(f, "Program link failed: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
