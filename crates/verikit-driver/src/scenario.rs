// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Scenario runner.
//!
//! A scenario deploys one verifier, produces (or fabricates) one input for
//! it, calls `verify` once and compares the verdict against the expected
//! one. Positive scenarios run the full pipeline:
//!
//! ```text
//! inputs ─▶ prove ─▶ normalize ─▶ export_calldata ─▶ adapt ─▶ verify ─▶ assert
//! ```
//!
//! Negative scenarios skip straight to [`ProofSystem::rejecting_input`].

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use verikit_calldata::{normalize, normalize_public_signals, ProofSystem, VerifierInput};

use crate::engine::{CircuitArtifacts, CircuitInputs, ProvingEngine};
use crate::error::{DriverError, DriverResult};
use crate::runtime::{ContractRuntime, ContractSpec, VerifierContract};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub proof_system: ProofSystem,
    pub contract: ContractSpec,
    pub expect: Expectation,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Expectation {
    /// Prove `inputs` and expect the verifier to accept.
    Accept {
        inputs: CircuitInputs,
        #[serde(flatten)]
        artifacts: CircuitArtifacts,
    },
    /// Send the system's rejecting input and expect `false`.
    Reject,
}

impl Expectation {
    pub fn verdict(&self) -> bool {
        matches!(self, Expectation::Accept { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub proof_system: ProofSystem,
    pub address: String,
    pub verdict: bool,
}

/// Outcome of a whole suite, one entry per scenario in run order.
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub results: Vec<(String, DriverResult<ScenarioReport>)>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

async fn positive_input<E: ProvingEngine>(
    engine: &E,
    system: ProofSystem,
    inputs: &CircuitInputs,
    artifacts: &CircuitArtifacts,
) -> DriverResult<VerifierInput> {
    let raw = engine.prove(system, inputs, artifacts).await?;
    let proof = normalize(&raw.proof);
    let signals = normalize_public_signals(&raw.public_signals)?;
    let calldata = engine.export_calldata(system, &proof, &signals).await?;
    Ok(system.adapt(&calldata)?)
}

/// Run one scenario against a freshly deployed verifier.
#[instrument(skip_all, fields(scenario = %scenario.name, system = %scenario.proof_system))]
pub async fn run_scenario<E, R>(engine: &E, runtime: &mut R, scenario: &Scenario) -> DriverResult<ScenarioReport>
where
    E: ProvingEngine,
    R: ContractRuntime,
{
    let system = scenario.proof_system;
    let contract = runtime.deploy(&scenario.contract, system).await?;
    info!(address = %contract.address(), "verifier deployed");

    let input = match &scenario.expect {
        Expectation::Accept { inputs, artifacts } => positive_input(engine, system, inputs, artifacts).await?,
        Expectation::Reject => system.rejecting_input(),
    };

    let actual = contract.verify(&input).await?;
    let expected = scenario.expect.verdict();
    if actual != expected {
        return Err(DriverError::AssertionMismatch {
            scenario: scenario.name.clone(),
            expected,
            actual,
        });
    }
    info!(verdict = actual, "scenario passed");

    Ok(ScenarioReport {
        name: scenario.name.clone(),
        proof_system: system,
        address: contract.address(),
        verdict: actual,
    })
}

/// Run every scenario in order. A failed scenario is recorded and the suite
/// moves on.
pub async fn run_suite<E, R>(engine: &E, runtime: &mut R, scenarios: &[Scenario]) -> SuiteReport
where
    E: ProvingEngine,
    R: ContractRuntime,
{
    let mut report = SuiteReport::default();
    for scenario in scenarios {
        let result = run_scenario(engine, runtime, scenario).await;
        if let Err(e) = &result {
            warn!(scenario = %scenario.name, error = %e, "scenario failed");
        }
        report.results.push((scenario.name.clone(), result));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde_json::{json, Value};
    use verikit_calldata::{ProofValue, PublicSignals};

    use crate::engine::RawProof;

    const GROTH16_CALLDATA: &str = r#"["0x01", "0x02"],[["0x03", "0x04"],["0x05", "0x06"]],["0x07", "0x08"],["0x0000000000000000000000000000000000000000000000000000000000000002"]"#;

    #[derive(Default)]
    struct ScriptedEngine {
        calls: RefCell<Vec<&'static str>>,
        fail_prove: bool,
    }

    impl ProvingEngine for ScriptedEngine {
        async fn prove(
            &self,
            _system: ProofSystem,
            _inputs: &CircuitInputs,
            _artifacts: &CircuitArtifacts,
        ) -> DriverResult<RawProof> {
            self.calls.borrow_mut().push("prove");
            if self.fail_prove {
                return Err(DriverError::external("witness generation", "Assert Failed"));
            }
            Ok(RawProof {
                proof: json!({"pi_a": ["1", "2", "1"], "protocol": "groth16"}),
                public_signals: json!(["2"]),
            })
        }

        async fn export_calldata(
            &self,
            system: ProofSystem,
            proof: &ProofValue,
            signals: &PublicSignals,
        ) -> DriverResult<String> {
            self.calls.borrow_mut().push("export");
            assert_eq!(proof.get("pi_a").and_then(|p| p.at(0)).and_then(ProofValue::as_integer).map(|v| v.to_string()), Some("1".into()));
            assert_eq!(signals.len(), 1);
            Ok(match system {
                ProofSystem::Groth16 => GROTH16_CALLDATA.to_string(),
                ProofSystem::Plonk => r#"0xabcdef,["0x02"]"#.to_string(),
            })
        }
    }

    /// Accepts only the input it was told to accept.
    struct ScriptedRuntime {
        accepts: Option<VerifierInput>,
        deployed: Rc<RefCell<Vec<String>>>,
        seen: Rc<RefCell<Vec<VerifierInput>>>,
    }

    impl ScriptedRuntime {
        fn accepting(input: Option<VerifierInput>) -> Self {
            Self {
                accepts: input,
                deployed: Rc::default(),
                seen: Rc::default(),
            }
        }
    }

    struct ScriptedContract {
        address: String,
        accepts: Option<VerifierInput>,
        seen: Rc<RefCell<Vec<VerifierInput>>>,
    }

    impl ContractRuntime for ScriptedRuntime {
        type Contract = ScriptedContract;

        async fn deploy(&mut self, contract: &ContractSpec, _system: ProofSystem) -> DriverResult<ScriptedContract> {
            let mut deployed = self.deployed.borrow_mut();
            deployed.push(contract.name.clone());
            Ok(ScriptedContract {
                address: format!("0x{:040x}", deployed.len()),
                accepts: self.accepts.clone(),
                seen: self.seen.clone(),
            })
        }
    }

    impl VerifierContract for ScriptedContract {
        fn address(&self) -> String {
            self.address.clone()
        }

        async fn verify(&self, input: &VerifierInput) -> DriverResult<bool> {
            self.seen.borrow_mut().push(input.clone());
            Ok(self.accepts.as_ref() == Some(input))
        }
    }

    fn scenario(name: &str, system: ProofSystem, expect: Expectation) -> Scenario {
        Scenario {
            name: name.into(),
            proof_system: system,
            contract: ContractSpec {
                name: format!("{name}Verifier"),
                artifact: format!("contracts/{name}Verifier.sol").into(),
            },
            expect,
        }
    }

    fn accept() -> Expectation {
        Expectation::Accept {
            inputs: [("a".to_string(), "1".to_string()), ("b".to_string(), "2".to_string())].into(),
            artifacts: CircuitArtifacts {
                witness: "HelloWorld.wasm".into(),
                proving_key: "circuit_final.zkey".into(),
            },
        }
    }

    #[tokio::test]
    async fn positive_groth16_runs_full_pipeline() {
        let engine = ScriptedEngine::default();
        let expected_input = ProofSystem::Groth16.adapt(GROTH16_CALLDATA).unwrap();
        let mut runtime = ScriptedRuntime::accepting(Some(expected_input.clone()));

        let report = run_scenario(&engine, &mut runtime, &scenario("HelloWorld", ProofSystem::Groth16, accept()))
            .await
            .unwrap();

        assert!(report.verdict);
        assert_eq!(*engine.calls.borrow(), ["prove", "export"]);
        assert_eq!(*runtime.seen.borrow(), [expected_input]);
    }

    #[tokio::test]
    async fn positive_plonk_passes_blob_through() {
        let engine = ScriptedEngine::default();
        let expected_input = VerifierInput::Plonk {
            proof: "0xabcdef".into(),
            public_inputs: vec![2u8.into()],
        };
        let mut runtime = ScriptedRuntime::accepting(Some(expected_input));

        let report = run_scenario(&engine, &mut runtime, &scenario("PlonkMultiplier3", ProofSystem::Plonk, accept()))
            .await
            .unwrap();
        assert!(report.verdict);
        assert_eq!(report.proof_system, ProofSystem::Plonk);
    }

    #[tokio::test]
    async fn negative_plonk_sends_fixed_vector() {
        let engine = ScriptedEngine::default();
        let mut runtime = ScriptedRuntime::accepting(None);

        let report = run_scenario(&engine, &mut runtime, &scenario("PlonkMultiplier3", ProofSystem::Plonk, Expectation::Reject))
            .await
            .unwrap();

        assert!(!report.verdict);
        assert!(engine.calls.borrow().is_empty());
        assert_eq!(
            *runtime.seen.borrow(),
            [VerifierInput::Plonk {
                proof: "0x".into(),
                public_inputs: vec![50u8.into()],
            }]
        );
    }

    #[tokio::test]
    async fn unexpected_verdict_is_a_mismatch() {
        let engine = ScriptedEngine::default();
        let mut runtime = ScriptedRuntime::accepting(Some(ProofSystem::Groth16.rejecting_input()));

        let err = run_scenario(&engine, &mut runtime, &scenario("HelloWorld", ProofSystem::Groth16, Expectation::Reject))
            .await
            .unwrap_err();
        match err {
            DriverError::AssertionMismatch {
                scenario,
                expected,
                actual,
            } => {
                assert_eq!(scenario, "HelloWorld");
                assert!(!expected);
                assert!(actual);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn engine_failure_aborts_before_verify() {
        let engine = ScriptedEngine {
            fail_prove: true,
            ..Default::default()
        };
        let mut runtime = ScriptedRuntime::accepting(None);

        let err = run_scenario(&engine, &mut runtime, &scenario("Multiplier3", ProofSystem::Groth16, accept()))
            .await
            .unwrap_err();
        assert!(matches!(err, DriverError::ExternalCall { .. }));
        assert_eq!(runtime.deployed.borrow().len(), 1);
        assert!(runtime.seen.borrow().is_empty());
    }

    #[tokio::test]
    async fn suite_deploys_fresh_and_keeps_going() {
        let engine = ScriptedEngine::default();
        let mut runtime = ScriptedRuntime::accepting(None);
        let scenarios = [
            scenario("HelloWorld", ProofSystem::Groth16, accept()),
            scenario("HelloWorld", ProofSystem::Groth16, Expectation::Reject),
            scenario("PlonkMultiplier3", ProofSystem::Plonk, Expectation::Reject),
        ];

        let report = run_suite(&engine, &mut runtime, &scenarios).await;

        assert_eq!(report.results.len(), 3);
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_success());
        assert_eq!(runtime.deployed.borrow().len(), 3);
        let addresses: Vec<String> = report
            .results
            .iter()
            .filter_map(|(_, r)| r.as_ref().ok().map(|r| r.address.clone()))
            .collect();
        assert_ne!(addresses[0], addresses[1]);
    }

    #[test]
    fn expectation_json_shape() {
        let reject: Expectation = serde_json::from_value(json!({"outcome": "reject"})).unwrap();
        assert_eq!(reject, Expectation::Reject);

        let accept: Expectation = serde_json::from_value(json!({
            "outcome": "accept",
            "inputs": {"a": "1", "b": "2"},
            "witness": "HelloWorld.wasm",
            "proving_key": "circuit_final.zkey",
        }))
        .unwrap();
        assert!(accept.verdict());
        let back: Value = serde_json::to_value(&accept).unwrap();
        assert_eq!(back["witness"], "HelloWorld.wasm");
    }
}
