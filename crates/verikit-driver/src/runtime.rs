// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! The contract-runtime seam.
//!
//! A runtime deploys one verifier per scenario and hands back a handle that
//! the scenario owns until it finishes. Handles are never shared between
//! scenarios.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use verikit_calldata::{ProofSystem, VerifierInput};

use crate::error::DriverResult;

/// Which verifier to deploy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSpec {
    /// Contract name, e.g. `HelloWorldVerifier`.
    pub name: String,
    /// Runtime-specific artifact: Solidity source for Foundry, verification
    /// key JSON for Soroban.
    pub artifact: PathBuf,
}

#[allow(async_fn_in_trait)]
pub trait ContractRuntime {
    type Contract: VerifierContract;

    async fn deploy(&mut self, contract: &ContractSpec, system: ProofSystem) -> DriverResult<Self::Contract>;
}

#[allow(async_fn_in_trait)]
pub trait VerifierContract {
    /// Human-readable address of the deployment.
    fn address(&self) -> String;

    async fn verify(&self, input: &VerifierInput) -> DriverResult<bool>;
}
