// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! In-process Groth16 proving over BLS12-381 with arkworks.
//!
//! Mirrors the snarkjs artifact model so the same scenarios run without a
//! Node toolchain:
//!
//! - the *witness artifact* path selects a [`WitnessCircuit`] registered
//!   with [`ArkworksEngine::with_circuit`];
//! - the *proving-key artifact* is an ark-serialized (compressed)
//!   `ProvingKey<Bls12_381>` read from disk on every proof.
//!
//! Proofs come back in the snarkjs JSON layout (`pi_a`, `pi_b`, `pi_c`,
//! decimal strings, projective `z` coordinate) and calldata is exported with
//! the snarkjs Groth16 layout, so everything downstream is shared with the
//! CLI engine.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use ark_bls12_381::{Bls12_381, Fq, Fr, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_ff::{BigInteger, PrimeField};
use ark_groth16::{Groth16, ProvingKey, VerifyingKey};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystem, ConstraintSystemRef, SynthesisError};
use ark_serialize::CanonicalDeserialize;
use ark_snark::SNARK;
use ark_std::rand::rngs::{OsRng, StdRng};
use ark_std::rand::SeedableRng;
use serde_json::{json, Value};
use tracing::debug;
use verikit_calldata::export::groth16_calldata;
use verikit_calldata::field::parse_canonical;
use verikit_calldata::{ProofSystem, ProofValue, PublicSignals};

use crate::engine::{CircuitArtifacts, CircuitInputs, ProvingEngine, RawProof};
use crate::error::{DriverError, DriverResult};

/// snarkjs name of the curve
pub const CURVE: &str = "bls12381";

/// Witness generator for one circuit.
///
/// Public signals are the instance variables in allocation order. Input
/// lookups must happen inside the assignment closures so the circuit can
/// also be synthesized without inputs.
pub trait WitnessCircuit: Send + Sync {
    fn synthesize(
        &self,
        inputs: &BTreeMap<String, Fr>,
        cs: ConstraintSystemRef<Fr>,
    ) -> Result<(), SynthesisError>;
}

/// A circuit bound to a set of inputs, usable wherever arkworks wants a
/// [`ConstraintSynthesizer`].
#[derive(Clone, Copy)]
pub struct BoundCircuit<'a> {
    circuit: &'a dyn WitnessCircuit,
    inputs: &'a BTreeMap<String, Fr>,
}

impl<'a> BoundCircuit<'a> {
    pub fn new(circuit: &'a dyn WitnessCircuit, inputs: &'a BTreeMap<String, Fr>) -> Self {
        Self { circuit, inputs }
    }
}

impl ConstraintSynthesizer<Fr> for BoundCircuit<'_> {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        self.circuit.synthesize(self.inputs, cs)
    }
}

/// Prover randomness, seeded from the operating system.
pub fn crypto_rng() -> DriverResult<StdRng> {
    StdRng::from_rng(OsRng).map_err(|e| DriverError::external("seeding prover rng", e))
}

#[derive(Default)]
pub struct ArkworksEngine {
    circuits: HashMap<PathBuf, Box<dyn WitnessCircuit>>,
}

impl ArkworksEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `circuit` as the witness generator found at `witness`.
    pub fn with_circuit(mut self, witness: impl Into<PathBuf>, circuit: impl WitnessCircuit + 'static) -> Self {
        self.circuits.insert(witness.into(), Box::new(circuit));
        self
    }

    fn circuit(&self, artifacts: &CircuitArtifacts) -> DriverResult<&dyn WitnessCircuit> {
        self.circuits
            .get(&artifacts.witness)
            .map(|c| c.as_ref())
            .ok_or_else(|| DriverError::artifact(&artifacts.witness, "no witness generator registered"))
    }
}

fn field_inputs(inputs: &CircuitInputs) -> DriverResult<BTreeMap<String, Fr>> {
    inputs
        .iter()
        .map(|(name, value)| {
            let n = parse_canonical(value).ok_or_else(|| {
                DriverError::external("witness generation", format!("input {name} = {value:?} is not numeric"))
            })?;
            Ok((name.clone(), Fr::from_be_bytes_mod_order(&n.to_bytes_be())))
        })
        .collect()
}

fn dec<F: PrimeField>(f: &F) -> String {
    num_bigint::BigUint::from_bytes_be(&f.into_bigint().to_bytes_be()).to_str_radix(10)
}

fn g1_json(p: &G1Affine) -> Value {
    if p.is_zero() {
        return json!(["0", "1", "0"]);
    }
    json!([dec::<Fq>(&p.x), dec::<Fq>(&p.y), "1"])
}

fn g2_json(p: &G2Affine) -> Value {
    if p.is_zero() {
        return json!([["0", "0"], ["1", "0"], ["0", "0"]]);
    }
    json!([
        [dec::<Fq>(&p.x.c0), dec::<Fq>(&p.x.c1)],
        [dec::<Fq>(&p.y.c0), dec::<Fq>(&p.y.c1)],
        ["1", "0"]
    ])
}

/// A proof in snarkjs JSON layout.
pub fn proof_json(proof: &ark_groth16::Proof<Bls12_381>) -> Value {
    json!({
        "pi_a": g1_json(&proof.a),
        "pi_b": g2_json(&proof.b),
        "pi_c": g1_json(&proof.c),
        "protocol": "groth16",
        "curve": CURVE,
    })
}

/// A verification key in the layout of `snarkjs zkey export verificationkey`.
pub fn verification_key_json(vk: &VerifyingKey<Bls12_381>) -> Value {
    json!({
        "protocol": "groth16",
        "curve": CURVE,
        "nPublic": vk.gamma_abc_g1.len().saturating_sub(1),
        "vk_alpha_1": g1_json(&vk.alpha_g1),
        "vk_beta_2": g2_json(&vk.beta_g2),
        "vk_gamma_2": g2_json(&vk.gamma_g2),
        "vk_delta_2": g2_json(&vk.delta_g2),
        "IC": vk.gamma_abc_g1.iter().map(g1_json).collect::<Vec<_>>(),
    })
}

impl ProvingEngine for ArkworksEngine {
    async fn prove(
        &self,
        system: ProofSystem,
        inputs: &CircuitInputs,
        artifacts: &CircuitArtifacts,
    ) -> DriverResult<RawProof> {
        if system != ProofSystem::Groth16 {
            return Err(DriverError::Unsupported {
                what: format!("{system} proving"),
                by: "the arkworks engine",
            });
        }
        let circuit = self.circuit(artifacts)?;
        let pk_bytes = tokio::fs::read(&artifacts.proving_key)
            .await
            .map_err(|e| DriverError::artifact(&artifacts.proving_key, e))?;
        let pk = ProvingKey::<Bls12_381>::deserialize_compressed(pk_bytes.as_slice())
            .map_err(|e| DriverError::artifact(&artifacts.proving_key, format!("not a proving key: {e}")))?;

        let inputs = field_inputs(inputs)?;
        let bound = BoundCircuit::new(circuit, &inputs);
        let witness_err = |e: SynthesisError| DriverError::external("witness generation", e);

        let cs = ConstraintSystem::<Fr>::new_ref();
        bound.generate_constraints(cs.clone()).map_err(witness_err)?;
        if !cs.is_satisfied().map_err(witness_err)? {
            let unsatisfied = cs.which_is_unsatisfied().map_err(witness_err)?;
            return Err(DriverError::external(
                "witness generation",
                format!("constraint not satisfied: {}", unsatisfied.unwrap_or_default()),
            ));
        }
        let public: Vec<Fr> = cs
            .borrow()
            .map(|cs| cs.instance_assignment.iter().skip(1).copied().collect())
            .unwrap_or_default();
        debug!(public = public.len(), constraints = cs.num_constraints(), "witness generated");

        let mut rng = crypto_rng()?;
        let proof = Groth16::<Bls12_381>::prove(&pk, bound, &mut rng)
            .map_err(|e| DriverError::external("groth16 proving", e))?;

        Ok(RawProof {
            proof: proof_json(&proof),
            public_signals: Value::Array(public.iter().map(|f| Value::String(dec(f))).collect()),
        })
    }

    async fn export_calldata(
        &self,
        system: ProofSystem,
        proof: &ProofValue,
        signals: &PublicSignals,
    ) -> DriverResult<String> {
        match system {
            ProofSystem::Groth16 => Ok(groth16_calldata(proof, signals)?),
            ProofSystem::Plonk => Err(DriverError::Unsupported {
                what: "plonk calldata export".into(),
                by: "the arkworks engine",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::UniformRand;
    use verikit_calldata::normalize;

    #[test]
    fn proof_json_round_trips_through_normalizer() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = G1Affine::rand(&mut rng);
        let json = g1_json(&a);
        let norm = normalize(&json);
        let x = norm.at(0).and_then(ProofValue::as_integer).unwrap();
        assert_eq!(x.to_bytes_be(), a.x.into_bigint().to_bytes_be().into_iter().skip_while(|b| *b == 0).collect::<Vec<_>>());
        assert_eq!(norm.at(2).and_then(ProofValue::as_integer).map(|z| z.to_string()), Some("1".into()));
    }

    #[test]
    fn prover_rngs_are_independent() {
        let a = Fr::rand(&mut crypto_rng().unwrap());
        let b = Fr::rand(&mut crypto_rng().unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn infinity_uses_projective_zero() {
        assert_eq!(g1_json(&G1Affine::zero()), json!(["0", "1", "0"]));
        assert_eq!(g2_json(&G2Affine::zero())[1], json!(["1", "0"]));
    }

    #[test]
    fn g2_keeps_c0_first() {
        let mut rng = StdRng::seed_from_u64(8);
        let b = G2Affine::rand(&mut rng);
        let json = g2_json(&b);
        assert_eq!(json[0][0], Value::String(dec(&b.x.c0)));
        assert_eq!(json[0][1], Value::String(dec(&b.x.c1)));
    }

    #[test]
    fn inputs_accept_hex_and_decimal() {
        let inputs: CircuitInputs = [("a".to_string(), "0x0a".to_string()), ("b".to_string(), "10".to_string())].into();
        let fields = field_inputs(&inputs).unwrap();
        assert_eq!(fields["a"], fields["b"]);
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        let inputs: CircuitInputs = [("a".to_string(), "one".to_string())].into();
        assert!(matches!(field_inputs(&inputs), Err(DriverError::ExternalCall { .. })));
    }

    #[tokio::test]
    async fn unregistered_witness_is_missing() {
        let engine = ArkworksEngine::new();
        let artifacts = CircuitArtifacts {
            witness: "HelloWorld.wasm".into(),
            proving_key: "circuit_final.zkey".into(),
        };
        let err = engine
            .prove(ProofSystem::Groth16, &CircuitInputs::new(), &artifacts)
            .await
            .unwrap_err();
        assert!(matches!(err, DriverError::ArtifactMissing { .. }));
    }

    #[tokio::test]
    async fn plonk_is_unsupported() {
        let engine = ArkworksEngine::new();
        let artifacts = CircuitArtifacts {
            witness: "Multiplier3.wasm".into(),
            proving_key: "circuit.zkey".into(),
        };
        let err = engine
            .prove(ProofSystem::Plonk, &CircuitInputs::new(), &artifacts)
            .await
            .unwrap_err();
        assert!(matches!(err, DriverError::Unsupported { .. }));
    }
}
