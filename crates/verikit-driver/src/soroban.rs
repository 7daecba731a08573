// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! In-process Soroban runtime hosting the `verikit-verifier` contract.
//!
//! Every deployment gets its own `Env`, so nothing survives from one
//! scenario to the next. The contract artifact is a Groth16 verification
//! key in snarkjs JSON layout (`snarkjs zkey export verificationkey`, or
//! [`verification_key_json`](crate::arkworks::verification_key_json)) on
//! BLS12-381.
//!
//! # Encoding
//!
//! - Fp coordinates: 48 bytes big-endian
//! - G1: `x || y`, G2: `x.c1 || x.c0 || y.c1 || y.c0`
//! - projective `z = 0` is the point at infinity (flag `0x40`)
//! - public inputs: 32 bytes big-endian

use std::path::Path;

use soroban_sdk::crypto::bls12_381::{G1Affine, G2Affine};
use soroban_sdk::{Address, BytesN, Env, Vec as SorobanVec};
use tracing::debug;
use verikit_calldata::field::{to_be_padded, FieldElement};
use verikit_calldata::{normalize, CalldataError, ProofSystem, ProofValue, VerifierInput};
use verikit_verifier::{Groth16Verifier, Groth16VerifierClient, VerificationKey, FP_BYTES, FR_BYTES};

use crate::error::{DriverError, DriverResult};
use crate::runtime::{ContractRuntime, ContractSpec, VerifierContract};

const INFINITY_FLAG: u8 = 0x40;

#[derive(Clone, Debug, Default)]
pub struct SorobanRuntime;

pub struct SorobanContract {
    env: Env,
    address: Address,
}

impl SorobanRuntime {
    pub fn new() -> Self {
        Self
    }
}

fn key_integer<'a>(vk: &'a ProofValue, key: &str, path: &[usize]) -> DriverResult<&'a FieldElement> {
    let mut node = vk.get(key);
    for &i in path {
        node = node.and_then(|n| n.at(i));
    }
    node.and_then(ProofValue::as_integer).ok_or_else(|| {
        CalldataError::ProofShape {
            path: path.iter().fold(key.to_string(), |acc, i| format!("{acc}[{i}]")),
        }
        .into()
    })
}

fn fp_bytes(value: &FieldElement, what: &str) -> DriverResult<[u8; FP_BYTES]> {
    to_be_padded(value, FP_BYTES)
        .and_then(|v| v.try_into().ok())
        .ok_or_else(|| DriverError::external("encoding verifier arguments", format!("{what} does not fit {FP_BYTES} bytes")))
}

fn is_zero(value: &FieldElement) -> bool {
    value.bits() == 0
}

/// `[x, y, z]` in snarkjs layout → uncompressed G1 bytes.
fn g1_bytes(vk: &ProofValue, key: &str, prefix: &[usize]) -> DriverResult<[u8; 2 * FP_BYTES]> {
    let at = |i: usize| {
        let mut path = prefix.to_vec();
        path.push(i);
        key_integer(vk, key, &path)
    };
    let mut buf = [0u8; 2 * FP_BYTES];
    if is_zero(at(2)?) {
        buf[0] = INFINITY_FLAG;
        return Ok(buf);
    }
    buf[..FP_BYTES].copy_from_slice(&fp_bytes(at(0)?, key)?);
    buf[FP_BYTES..].copy_from_slice(&fp_bytes(at(1)?, key)?);
    Ok(buf)
}

/// `[[x.c0, x.c1], [y.c0, y.c1], [z.c0, z.c1]]` → uncompressed G2 bytes.
fn g2_bytes(vk: &ProofValue, key: &str) -> DriverResult<[u8; 4 * FP_BYTES]> {
    let mut buf = [0u8; 4 * FP_BYTES];
    if is_zero(key_integer(vk, key, &[2, 0])?) && is_zero(key_integer(vk, key, &[2, 1])?) {
        buf[0] = INFINITY_FLAG;
        return Ok(buf);
    }
    let order = [[0, 1], [0, 0], [1, 1], [1, 0]];
    for (slot, path) in order.iter().enumerate() {
        let at = slot * FP_BYTES;
        buf[at..at + FP_BYTES].copy_from_slice(&fp_bytes(key_integer(vk, key, path)?, key)?);
    }
    Ok(buf)
}

/// Build the contract's verification key from snarkjs verification-key JSON.
pub fn verification_key_from_json(env: &Env, json: &serde_json::Value) -> DriverResult<VerificationKey> {
    let vk = normalize(json);
    let g1 = |key: &str, prefix: &[usize]| -> DriverResult<G1Affine> {
        Ok(G1Affine::from_bytes(BytesN::from_array(env, &g1_bytes(&vk, key, prefix)?)))
    };
    let g2 = |key: &str| -> DriverResult<G2Affine> {
        Ok(G2Affine::from_bytes(BytesN::from_array(env, &g2_bytes(&vk, key)?)))
    };

    let ic_len = match vk.get("IC") {
        Some(ProofValue::Sequence(points)) if !points.is_empty() => points.len(),
        _ => {
            return Err(CalldataError::ProofShape { path: "IC".into() }.into());
        }
    };
    let mut ic = SorobanVec::new(env);
    for i in 0..ic_len {
        ic.push_back(g1("IC", &[i])?);
    }

    Ok(VerificationKey {
        alpha_g1: g1("vk_alpha_1", &[])?,
        beta_g2: g2("vk_beta_2")?,
        gamma_g2: g2("vk_gamma_2")?,
        delta_g2: g2("vk_delta_2")?,
        ic,
    })
}

async fn load_verification_key(env: &Env, path: &Path) -> DriverResult<VerificationKey> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| DriverError::artifact(path, e))?;
    let json: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| DriverError::artifact(path, format!("not a verification key: {e}")))?;
    verification_key_from_json(env, &json)
}

impl ContractRuntime for SorobanRuntime {
    type Contract = SorobanContract;

    async fn deploy(&mut self, contract: &ContractSpec, system: ProofSystem) -> DriverResult<SorobanContract> {
        if system != ProofSystem::Groth16 {
            return Err(DriverError::Unsupported {
                what: format!("{system} verifier {}", contract.name),
                by: "the soroban runtime",
            });
        }
        let env = Env::default();
        let vk = load_verification_key(&env, &contract.artifact).await?;
        let address = env.register(Groth16Verifier, (vk,));
        debug!(contract = %contract.name, "registered soroban verifier");
        Ok(SorobanContract { env, address })
    }
}

impl SorobanContract {
    fn coords(&self, values: &[FieldElement], what: &str) -> DriverResult<SorobanVec<BytesN<48>>> {
        let mut out = SorobanVec::new(&self.env);
        for v in values {
            out.push_back(BytesN::from_array(&self.env, &fp_bytes(v, what)?));
        }
        Ok(out)
    }

    fn scalars(&self, values: &[FieldElement]) -> DriverResult<SorobanVec<BytesN<32>>> {
        let mut out = SorobanVec::new(&self.env);
        for v in values {
            let bytes: [u8; FR_BYTES] = to_be_padded(v, FR_BYTES)
                .and_then(|b| b.try_into().ok())
                .ok_or_else(|| {
                    DriverError::external("encoding verifier arguments", format!("public input {v} does not fit {FR_BYTES} bytes"))
                })?;
            out.push_back(BytesN::from_array(&self.env, &bytes));
        }
        Ok(out)
    }
}

impl VerifierContract for SorobanContract {
    fn address(&self) -> String {
        format!("{:?}", self.address)
    }

    async fn verify(&self, input: &VerifierInput) -> DriverResult<bool> {
        let VerifierInput::Groth16 {
            a,
            b,
            c,
            public_inputs,
        } = input
        else {
            return Err(DriverError::Unsupported {
                what: "plonk verification".into(),
                by: "the soroban runtime",
            });
        };

        let a = self.coords(a, "a")?;
        let mut rows = SorobanVec::new(&self.env);
        for row in b {
            rows.push_back(self.coords(row, "b")?);
        }
        let c = self.coords(c, "c")?;
        let inputs = self.scalars(public_inputs)?;

        let client = Groth16VerifierClient::new(&self.env, &self.address);
        match client.try_verify_proof(&a, &rows, &c, &inputs) {
            Ok(Ok(verdict)) => Ok(verdict),
            Ok(Err(e)) => Err(DriverError::external("verify_proof", format!("{e:?}"))),
            Err(e) => Err(DriverError::external("verify_proof", format!("reverted: {e:?}"))),
        }
    }
}
