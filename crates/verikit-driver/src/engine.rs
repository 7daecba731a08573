// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! The proving-engine seam.
//!
//! An engine turns named circuit inputs plus two artifacts (a witness
//! generator and a proving key) into a proof and its public signals, and
//! exports a normalized proof as the calldata text its verifier expects.
//! Artifact paths are passed through untouched; only the engine knows what
//! is inside them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use verikit_calldata::{ProofSystem, ProofValue, PublicSignals};

use crate::error::{DriverError, DriverResult};

/// Named circuit inputs, values as decimal or `0x` hex strings.
pub type CircuitInputs = BTreeMap<String, String>;

/// Per-circuit artifact locations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitArtifacts {
    /// Witness generator (`.wasm` for snarkjs).
    pub witness: PathBuf,
    /// Proving key (`.zkey` for snarkjs).
    pub proving_key: PathBuf,
}

/// Raw engine output, before normalization.
#[derive(Clone, Debug, PartialEq)]
pub struct RawProof {
    pub proof: Value,
    pub public_signals: Value,
}

#[allow(async_fn_in_trait)]
pub trait ProvingEngine {
    async fn prove(
        &self,
        system: ProofSystem,
        inputs: &CircuitInputs,
        artifacts: &CircuitArtifacts,
    ) -> DriverResult<RawProof>;

    async fn export_calldata(
        &self,
        system: ProofSystem,
        proof: &ProofValue,
        signals: &PublicSignals,
    ) -> DriverResult<String>;
}

/// Fail with [`DriverError::ArtifactMissing`] unless `path` is a readable file.
pub async fn ensure_readable(path: &Path) -> DriverResult<()> {
    let meta = tokio::fs::metadata(path)
        .await
        .map_err(|e| DriverError::artifact(path, e))?;
    if !meta.is_file() {
        return Err(DriverError::artifact(path, "not a regular file"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_artifact_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("circuit_final.zkey");
        match ensure_readable(&path).await {
            Err(DriverError::ArtifactMissing { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn directory_is_not_an_artifact() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ensure_readable(dir.path()).await.is_err());
    }

    #[tokio::test]
    async fn existing_file_is_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("HelloWorld.wasm");
        std::fs::write(&path, b"\0asm").unwrap();
        ensure_readable(&path).await.unwrap();
    }
}
