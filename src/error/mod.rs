// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the logcheck application.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for logcheck operations.
#[derive(Error, Debug)]
pub enum LogcheckError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Commit-list input errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid revision: {reference}")]
    InvalidReference { reference: String },

    #[error("Git operation failed: {operation} - {message}")]
    OperationFailed { operation: String, message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Errors reading or decoding a JSON commit list.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read commit list '{path}': {message}")]
    ReadFailed { path: String, message: String },

    #[error("Failed to parse commit list: {message}")]
    ParseFailed { message: String },
}

/// Result type alias for logcheck operations.
pub type Result<T> = std::result::Result<T, LogcheckError>;
