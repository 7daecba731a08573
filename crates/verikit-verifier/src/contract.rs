// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verifier contract, one deployment per circuit

use crate::types::{Proof, VerificationKey};
use crate::verifier::{g1_from_coords, g2_from_coords, in_scalar_field, verify_groth16};
use soroban_sdk::crypto::bls12_381::Fr;
use soroban_sdk::{contract, contractimpl, contracttype, BytesN, Env, Vec};

#[contracttype]
#[derive(Clone)]
enum DataKey {
    VerificationKey,
}

#[contract]
pub struct Groth16Verifier;

#[contractimpl]
impl Groth16Verifier {
    /// Deploy with the circuit's verification key
    pub fn __constructor(env: Env, vk: VerificationKey) {
        if vk.ic.is_empty() {
            panic!("VK must have at least ic[0]");
        }
        env.storage().instance().set(&DataKey::VerificationKey, &vk);
    }

    /// Verify a proof given as field-element coordinates.
    ///
    /// `a` and `c` are `[x, y]`, `b` is `[[x.c1, x.c0], [y.c1, y.c0]]`, every
    /// coordinate 48 bytes big-endian. Public inputs are 32-byte big-endian
    /// scalars. Malformed arity reverts; out-of-range or miscounted public
    /// inputs return false.
    pub fn verify_proof(
        env: Env,
        a: Vec<BytesN<48>>,
        b: Vec<Vec<BytesN<48>>>,
        c: Vec<BytesN<48>>,
        input: Vec<BytesN<32>>,
    ) -> bool {
        let vk: VerificationKey = env
            .storage()
            .instance()
            .get(&DataKey::VerificationKey)
            .expect("not initialized");

        let proof = Proof {
            a: g1_from_coords(&env, &a),
            b: g2_from_coords(&env, &b),
            c: g1_from_coords(&env, &c),
        };

        if input.len() + 1 != vk.ic.len() {
            return false;
        }
        let mut scalars: Vec<Fr> = Vec::new(&env);
        for value in input.iter() {
            if !in_scalar_field(&value) {
                return false;
            }
            scalars.push_back(Fr::from_bytes(value));
        }

        verify_groth16(&env, &vk, &proof, &scalars)
    }

    /// Get the stored verification key
    pub fn verification_key(env: Env) -> VerificationKey {
        env.storage()
            .instance()
            .get(&DataKey::VerificationKey)
            .expect("not initialized")
    }
}
