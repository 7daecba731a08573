// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! EVM verifier deployment and calls via the Foundry CLI.
//!
//! Wraps `forge create` for deployment and `cast call` for read-only
//! verification calls. Requires [Foundry](https://book.getfoundry.sh) on
//! `$PATH` and a reachable JSON-RPC node (e.g. `anvil`).
//!
//! Entrypoints called:
//!
//! - Groth16: `verifyProof(uint256[2],uint256[2][2],uint256[2],uint256[N])(bool)`
//!   where `N` is the number of public inputs
//! - PLONK: `verifyProof(bytes,uint256[])(bool)`

use tokio::process::Command;
use tracing::debug;
use verikit_calldata::field::{to_decimal, FieldElement};
use verikit_calldata::{ProofSystem, VerifierInput};

use crate::error::{DriverError, DriverResult};
use crate::runtime::{ContractRuntime, ContractSpec, VerifierContract};

#[derive(Clone, Debug)]
pub struct FoundryRuntime {
    rpc_url: String,
    private_key: String,
    forge: String,
    cast: String,
}

pub struct FoundryContract {
    rpc_url: String,
    cast: String,
    address: String,
}

impl FoundryRuntime {
    pub fn new(rpc_url: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            private_key: private_key.into(),
            forge: "forge".into(),
            cast: "cast".into(),
        }
    }

    /// Use non-default `forge` / `cast` binaries.
    pub fn with_binaries(mut self, forge: impl Into<String>, cast: impl Into<String>) -> Self {
        self.forge = forge.into();
        self.cast = cast.into();
        self
    }
}

async fn run(binary: &str, what: &str, args: &[String]) -> DriverResult<String> {
    let output = Command::new(binary)
        .args(args)
        .output()
        .await
        .map_err(|e| DriverError::external(format!("`{binary} {what}`"), e))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(DriverError::external(format!("`{binary} {what}`"), stderr.trim()))
    }
}

/// Pull the contract address out of `forge create` output.
pub(crate) fn parse_deployed_address(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("Deployed to:"))
        .map(|addr| addr.trim().to_string())
        .filter(|addr| addr.starts_with("0x"))
}

fn array(values: &[FieldElement]) -> String {
    let items: Vec<String> = values.iter().map(to_decimal).collect();
    format!("[{}]", items.join(","))
}

/// Function signature for `cast call`.
pub(crate) fn call_signature(input: &VerifierInput) -> String {
    match input {
        VerifierInput::Groth16 { public_inputs, .. } => format!(
            "verifyProof(uint256[2],uint256[2][2],uint256[2],uint256[{}])(bool)",
            public_inputs.len()
        ),
        VerifierInput::Plonk { .. } => "verifyProof(bytes,uint256[])(bool)".to_string(),
    }
}

/// Positional arguments for `cast call`.
pub(crate) fn call_args(input: &VerifierInput) -> Vec<String> {
    match input {
        VerifierInput::Groth16 {
            a,
            b,
            c,
            public_inputs,
        } => vec![
            array(a),
            format!("[{},{}]", array(&b[0]), array(&b[1])),
            array(c),
            array(public_inputs),
        ],
        VerifierInput::Plonk {
            proof,
            public_inputs,
        } => vec![proof.clone(), array(public_inputs)],
    }
}

fn parse_bool(stdout: &str) -> DriverResult<bool> {
    match stdout.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(DriverError::external(
            "`cast call verifyProof`",
            format!("unexpected return value {other:?}"),
        )),
    }
}

impl ContractRuntime for FoundryRuntime {
    type Contract = FoundryContract;

    async fn deploy(&mut self, contract: &ContractSpec, system: ProofSystem) -> DriverResult<FoundryContract> {
        let target = format!("{}:{}", contract.artifact.display(), contract.name);
        debug!(%system, %target, "forge create");
        let stdout = run(
            &self.forge,
            "create",
            &[
                "create".into(),
                target.clone(),
                "--rpc-url".into(),
                self.rpc_url.clone(),
                "--private-key".into(),
                self.private_key.clone(),
                "--broadcast".into(),
            ],
        )
        .await?;

        let address = parse_deployed_address(&stdout).ok_or_else(|| {
            DriverError::external(format!("deploying {target}"), "no `Deployed to:` line in forge output")
        })?;
        Ok(FoundryContract {
            rpc_url: self.rpc_url.clone(),
            cast: self.cast.clone(),
            address,
        })
    }
}

impl VerifierContract for FoundryContract {
    fn address(&self) -> String {
        self.address.clone()
    }

    async fn verify(&self, input: &VerifierInput) -> DriverResult<bool> {
        let mut args = vec![
            "call".to_string(),
            self.address.clone(),
            call_signature(input),
        ];
        args.extend(call_args(input));
        args.push("--rpc-url".into());
        args.push(self.rpc_url.clone());

        let stdout = run(&self.cast, "call", &args).await?;
        parse_bool(&stdout)
    }
}
