// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Suite configuration (`verikit.json`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use verikit_calldata::ProofSystem;

use crate::engine::CircuitArtifacts;
use crate::error::{DriverError, DriverResult};
use crate::foundry::FoundryRuntime;
use crate::runtime::ContractSpec;
use crate::scenario::{Expectation, Scenario};
use crate::snarkjs::{SnarkjsEngine, DEFAULT_BINARY};
use crate::soroban::SorobanRuntime;

pub const DEFAULT_CONFIG_FILE: &str = "verikit.json";

/// First funded account of a stock `anvil` node.
pub const ANVIL_PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const ANVIL_RPC_URL: &str = "http://127.0.0.1:8545";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RuntimeConfig {
    Soroban,
    Foundry { rpc_url: String, private_key: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EngineConfig {
    Snarkjs {
        #[serde(default = "default_binary")]
        binary: String,
    },
}

fn default_binary() -> String {
    DEFAULT_BINARY.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig::Snarkjs {
            binary: default_binary(),
        }
    }
}

impl EngineConfig {
    pub fn build(&self) -> SnarkjsEngine {
        match self {
            EngineConfig::Snarkjs { binary } => SnarkjsEngine::new(binary.clone()),
        }
    }
}

/// A runtime built from [`RuntimeConfig`].
pub enum ConfiguredRuntime {
    Soroban(SorobanRuntime),
    Foundry(FoundryRuntime),
}

impl RuntimeConfig {
    pub fn build(&self) -> ConfiguredRuntime {
        match self {
            RuntimeConfig::Soroban => ConfiguredRuntime::Soroban(SorobanRuntime::new()),
            RuntimeConfig::Foundry { rpc_url, private_key } => {
                ConfiguredRuntime::Foundry(FoundryRuntime::new(rpc_url.clone(), private_key.clone()))
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RuntimeConfig::Soroban => "soroban",
            RuntimeConfig::Foundry { .. } => "foundry",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteConfig {
    pub runtime: RuntimeConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

impl SuiteConfig {
    pub fn load(path: &Path) -> DriverResult<Self> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| DriverError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config: SuiteConfig = serde_json::from_str(&data)
            .map_err(|e| DriverError::Config(format!("invalid {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Scenario names must be unique so `--only` and reports are unambiguous.
    pub fn validate(&self) -> DriverResult<()> {
        for (i, s) in self.scenarios.iter().enumerate() {
            if s.name.trim().is_empty() {
                return Err(DriverError::Config(format!("scenario #{i} has no name")));
            }
            if self.scenarios[..i].iter().any(|prev| prev.name == s.name) {
                return Err(DriverError::Config(format!("duplicate scenario name {:?}", s.name)));
            }
        }
        Ok(())
    }

    /// Scenarios to run, optionally narrowed to one name.
    pub fn select(&self, only: Option<&str>) -> DriverResult<Vec<Scenario>> {
        match only {
            None => Ok(self.scenarios.clone()),
            Some(name) => {
                let picked: Vec<Scenario> = self.scenarios.iter().filter(|s| s.name == name).cloned().collect();
                if picked.is_empty() {
                    return Err(DriverError::Config(format!("no scenario named {name:?}")));
                }
                Ok(picked)
            }
        }
    }

    /// Suite for the HelloWorld, Multiplier3 and PLONK Multiplier3 verifiers
    /// against a local `anvil` node.
    pub fn starter() -> Self {
        let circuits = PathBuf::from("contracts/circuits");
        let groth16 = |circuit: &str, inputs: &[(&str, &str)]| {
            let contract = ContractSpec {
                name: format!("{circuit}Verifier"),
                artifact: PathBuf::from(format!("contracts/{circuit}Verifier.sol")),
            };
            let accept = Expectation::Accept {
                inputs: inputs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
                artifacts: CircuitArtifacts {
                    witness: circuits.join(circuit).join(format!("{circuit}_js/{circuit}.wasm")),
                    proving_key: circuits.join(circuit).join("circuit_final.zkey"),
                },
            };
            [
                Scenario {
                    name: format!("{circuit} accepts a valid proof"),
                    proof_system: ProofSystem::Groth16,
                    contract: contract.clone(),
                    expect: accept,
                },
                Scenario {
                    name: format!("{circuit} rejects an invalid proof"),
                    proof_system: ProofSystem::Groth16,
                    contract,
                    expect: Expectation::Reject,
                },
            ]
        };

        let plonk_contract = ContractSpec {
            name: "PlonkMultiplier3Verifier".into(),
            artifact: "contracts/PlonkMultiplier3Verifier.sol".into(),
        };
        let plonk_dir = circuits.join("_plonkMultiplier3");
        let plonk = [
            Scenario {
                name: "PlonkMultiplier3 accepts a valid proof".into(),
                proof_system: ProofSystem::Plonk,
                contract: plonk_contract.clone(),
                expect: Expectation::Accept {
                    inputs: [("a", "2"), ("b", "3"), ("c", "6")]
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                    artifacts: CircuitArtifacts {
                        witness: plonk_dir.join("Multiplier3_js/Multiplier3.wasm"),
                        proving_key: plonk_dir.join("circuit.zkey"),
                    },
                },
            },
            Scenario {
                name: "PlonkMultiplier3 rejects an invalid proof".into(),
                proof_system: ProofSystem::Plonk,
                contract: plonk_contract,
                expect: Expectation::Reject,
            },
        ];

        let mut scenarios = Vec::new();
        scenarios.extend(groth16("HelloWorld", &[("a", "1"), ("b", "2")]));
        scenarios.extend(groth16("Multiplier3", &[("a", "2"), ("b", "3"), ("c", "6")]));
        scenarios.extend(plonk);

        SuiteConfig {
            runtime: RuntimeConfig::Foundry {
                rpc_url: ANVIL_RPC_URL.into(),
                private_key: ANVIL_PRIVATE_KEY.into(),
            },
            engine: EngineConfig::default(),
            scenarios,
        }
    }
}
