// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for scenario runs.

use std::path::PathBuf;

use verikit_calldata::CalldataError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("artifact {} unreadable: {reason}", .path.display())]
    ArtifactMissing { path: PathBuf, reason: String },

    #[error("{what} failed: {reason}")]
    ExternalCall { what: String, reason: String },

    #[error("scenario {scenario}: expected verifier to return {expected}, got {actual}")]
    AssertionMismatch {
        scenario: String,
        expected: bool,
        actual: bool,
    },

    #[error("{what} is not supported by {by}")]
    Unsupported { what: String, by: &'static str },

    #[error(transparent)]
    Calldata(#[from] CalldataError),

    #[error("config: {0}")]
    Config(String),
}

impl DriverError {
    pub(crate) fn external(what: impl Into<String>, reason: impl ToString) -> Self {
        DriverError::ExternalCall {
            what: what.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn artifact(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        DriverError::ArtifactMissing {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type DriverResult<T> = Result<T, DriverError>;
