// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Fixture circuits and key material for driver integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use ark_bls12_381::{Bls12_381, Fr};
use ark_groth16::Groth16;
use ark_relations::lc;
use ark_relations::r1cs::{ConstraintSystemRef, SynthesisError};
use ark_serialize::CanonicalSerialize;
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use verikit_driver::arkworks::{verification_key_json, BoundCircuit, WitnessCircuit};
use verikit_driver::engine::{CircuitArtifacts, CircuitInputs};
use verikit_driver::runtime::ContractSpec;

fn input(inputs: &BTreeMap<String, Fr>, name: &str) -> Result<Fr, SynthesisError> {
    inputs.get(name).copied().ok_or(SynthesisError::AssignmentMissing)
}

/// c <== a * b, c public
pub struct HelloWorld;

impl WitnessCircuit for HelloWorld {
    fn synthesize(&self, inputs: &BTreeMap<String, Fr>, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let c = cs.new_input_variable(|| Ok(input(inputs, "a")? * input(inputs, "b")?))?;
        let a = cs.new_witness_variable(|| input(inputs, "a"))?;
        let b = cs.new_witness_variable(|| input(inputs, "b"))?;
        cs.enforce_constraint(lc!() + a, lc!() + b, lc!() + c)?;
        Ok(())
    }
}

/// d <== a * b * c, d public
pub struct Multiplier3;

impl WitnessCircuit for Multiplier3 {
    fn synthesize(&self, inputs: &BTreeMap<String, Fr>, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let d = cs.new_input_variable(|| Ok(input(inputs, "a")? * input(inputs, "b")? * input(inputs, "c")?))?;
        let a = cs.new_witness_variable(|| input(inputs, "a"))?;
        let b = cs.new_witness_variable(|| input(inputs, "b"))?;
        let c = cs.new_witness_variable(|| input(inputs, "c"))?;
        let ab = cs.new_witness_variable(|| Ok(input(inputs, "a")? * input(inputs, "b")?))?;
        cs.enforce_constraint(lc!() + a, lc!() + b, lc!() + ab)?;
        cs.enforce_constraint(lc!() + ab, lc!() + c, lc!() + d)?;
        Ok(())
    }
}

/// Keys for one circuit, written to a scratch directory.
pub struct CircuitFixture {
    pub dir: tempfile::TempDir,
    pub name: String,
    pub artifacts: CircuitArtifacts,
    pub verification_key: PathBuf,
}

impl CircuitFixture {
    pub fn contract(&self) -> ContractSpec {
        ContractSpec {
            name: format!("{}Verifier", self.name),
            artifact: self.verification_key.clone(),
        }
    }
}

/// Run a circuit-specific setup and write the proving key (ark, compressed)
/// and the verification key (snarkjs JSON layout).
pub fn setup(name: &str, circuit: &dyn WitnessCircuit) -> CircuitFixture {
    let dir = tempfile::tempdir().unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let empty = BTreeMap::new();
    let (pk, vk) = Groth16::<Bls12_381>::circuit_specific_setup(BoundCircuit::new(circuit, &empty), &mut rng).unwrap();

    let proving_key = dir.path().join("circuit_final.zkey");
    let mut bytes = Vec::new();
    pk.serialize_compressed(&mut bytes).unwrap();
    std::fs::write(&proving_key, bytes).unwrap();

    let verification_key = dir.path().join("verification_key.json");
    std::fs::write(&verification_key, serde_json::to_vec_pretty(&verification_key_json(&vk)).unwrap()).unwrap();

    CircuitFixture {
        artifacts: CircuitArtifacts {
            witness: dir.path().join(format!("{name}_js/{name}.wasm")),
            proving_key,
        },
        verification_key,
        name: name.to_string(),
        dir,
    }
}

pub fn inputs(pairs: &[(&str, &str)]) -> CircuitInputs {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}
