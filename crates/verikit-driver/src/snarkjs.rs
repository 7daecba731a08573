// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Proving via the `snarkjs` CLI.
//!
//! Requires [snarkjs](https://github.com/iden3/snarkjs) on `$PATH` (or an
//! explicit binary path). Inputs, proofs and public signals are staged as
//! JSON files in a temporary directory that is removed after each call.
//!
//! # Example
//!
//! ```rust,no_run
//! use verikit_driver::engine::{CircuitArtifacts, CircuitInputs, ProvingEngine};
//! use verikit_driver::snarkjs::SnarkjsEngine;
//! use verikit_calldata::ProofSystem;
//!
//! # async fn example() -> verikit_driver::DriverResult<()> {
//! let engine = SnarkjsEngine::default();
//! let inputs: CircuitInputs = [("a".to_string(), "1".to_string()), ("b".to_string(), "2".to_string())].into();
//! let artifacts = CircuitArtifacts {
//!     witness: "contracts/circuits/HelloWorld/HelloWorld_js/HelloWorld.wasm".into(),
//!     proving_key: "contracts/circuits/HelloWorld/circuit_final.zkey".into(),
//! };
//! let _raw = engine.prove(ProofSystem::Groth16, &inputs, &artifacts).await?;
//! # Ok(())
//! # }
//! ```

use std::ffi::OsStr;
use std::path::Path;

use serde_json::Value;
use tokio::process::Command;
use tracing::debug;
use verikit_calldata::field::to_decimal;
use verikit_calldata::{ProofSystem, ProofValue, PublicSignals};

use crate::engine::{ensure_readable, CircuitArtifacts, CircuitInputs, ProvingEngine, RawProof};
use crate::error::{DriverError, DriverResult};

pub const DEFAULT_BINARY: &str = "snarkjs";

#[derive(Clone, Debug)]
pub struct SnarkjsEngine {
    binary: String,
}

impl Default for SnarkjsEngine {
    fn default() -> Self {
        Self::new(DEFAULT_BINARY)
    }
}

impl SnarkjsEngine {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    async fn run<I, S>(&self, what: &str, args: I) -> DriverResult<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .await
            .map_err(|e| DriverError::external(format!("`{} {what}`", self.binary), e))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(DriverError::external(
                format!("`{} {what}`", self.binary),
                format!("{} {}", stderr.trim(), stdout.trim()).trim(),
            ))
        }
    }
}

fn scratch_dir() -> DriverResult<tempfile::TempDir> {
    tempfile::tempdir().map_err(|e| DriverError::external("creating snarkjs scratch dir", e))
}

async fn write_json(path: &Path, value: &Value) -> DriverResult<()> {
    let bytes = serde_json::to_vec_pretty(value)
        .map_err(|e| DriverError::external("serializing snarkjs input", e))?;
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| DriverError::external(format!("writing {}", path.display()), e))
}

async fn read_json(path: &Path) -> DriverResult<Value> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| DriverError::external(format!("reading {}", path.display()), e))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| DriverError::external(format!("parsing {}", path.display()), e))
}

impl ProvingEngine for SnarkjsEngine {
    async fn prove(
        &self,
        system: ProofSystem,
        inputs: &CircuitInputs,
        artifacts: &CircuitArtifacts,
    ) -> DriverResult<RawProof> {
        ensure_readable(&artifacts.witness).await?;
        ensure_readable(&artifacts.proving_key).await?;

        let dir = scratch_dir()?;
        let input_path = dir.path().join("input.json");
        let proof_path = dir.path().join("proof.json");
        let public_path = dir.path().join("public.json");

        let input = serde_json::to_value(inputs)
            .map_err(|e| DriverError::external("serializing circuit inputs", e))?;
        write_json(&input_path, &input).await?;

        debug!(%system, witness = %artifacts.witness.display(), "snarkjs fullprove");
        self.run(
            "fullprove",
            [
                OsStr::new(system.as_str()),
                OsStr::new("fullprove"),
                input_path.as_os_str(),
                artifacts.witness.as_os_str(),
                artifacts.proving_key.as_os_str(),
                proof_path.as_os_str(),
                public_path.as_os_str(),
            ],
        )
        .await?;

        Ok(RawProof {
            proof: read_json(&proof_path).await?,
            public_signals: read_json(&public_path).await?,
        })
    }

    async fn export_calldata(
        &self,
        system: ProofSystem,
        proof: &ProofValue,
        signals: &PublicSignals,
    ) -> DriverResult<String> {
        let dir = scratch_dir()?;
        let proof_path = dir.path().join("proof.json");
        let public_path = dir.path().join("public.json");

        write_json(&proof_path, &proof.to_json()).await?;
        let public = Value::Array(signals.iter().map(|s| Value::String(to_decimal(s))).collect());
        write_json(&public_path, &public).await?;

        debug!(%system, "snarkjs zkey export soliditycalldata");
        self.run(
            "zkey export soliditycalldata",
            [
                OsStr::new("zkey"),
                OsStr::new("export"),
                OsStr::new("soliditycalldata"),
                public_path.as_os_str(),
                proof_path.as_os_str(),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn prove_checks_artifacts_before_spawning() {
        let engine = SnarkjsEngine::new("/nonexistent/snarkjs");
        let artifacts = CircuitArtifacts {
            witness: PathBuf::from("/nonexistent/HelloWorld.wasm"),
            proving_key: PathBuf::from("/nonexistent/circuit_final.zkey"),
        };
        let err = engine
            .prove(ProofSystem::Groth16, &CircuitInputs::new(), &artifacts)
            .await
            .unwrap_err();
        assert!(matches!(err, DriverError::ArtifactMissing { .. }));
    }

    #[tokio::test]
    async fn missing_binary_is_an_external_failure() {
        let engine = SnarkjsEngine::new("/nonexistent/snarkjs");
        let proof = ProofValue::Null;
        let err = engine
            .export_calldata(ProofSystem::Plonk, &proof, &vec![])
            .await
            .unwrap_err();
        match err {
            DriverError::ExternalCall { what, .. } => assert!(what.contains("soliditycalldata")),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
