// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for normalization, tokenizing and shape adaptation.

use crate::adapter::ProofSystem;

#[derive(Debug, thiserror::Error)]
pub enum CalldataError {
    #[error("malformed calldata token: {token:?}")]
    MalformedToken { token: String },

    #[error("{system} calldata needs at least {expected} tokens, got {actual}")]
    ShapeArity {
        system: ProofSystem,
        expected: usize,
        actual: usize,
    },

    #[error("plonk calldata: {reason}")]
    PlonkCalldata { reason: String },

    #[error("proof structure has no integer at {path}")]
    ProofShape { path: String },
}

pub type CalldataResult<T> = Result<T, CalldataError>;
