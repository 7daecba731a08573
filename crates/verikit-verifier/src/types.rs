// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Type definitions for Groth16 verification

use soroban_sdk::crypto::bls12_381::{G1Affine, G2Affine};
use soroban_sdk::{contracttype, Vec};

/// Groth16 verification key for BLS12-381
///
/// IC is a unified vector: ic[0] is the constant term, ic[1..] are coefficients
/// for public inputs.
#[contracttype]
#[derive(Clone, Debug)]
pub struct VerificationKey {
    pub alpha_g1: G1Affine,
    pub beta_g2: G2Affine,
    pub gamma_g2: G2Affine,
    pub delta_g2: G2Affine,
    pub ic: Vec<G1Affine>,
}

/// Groth16 proof for BLS12-381, decoded from coordinates
#[derive(Clone, Debug)]
pub struct Proof {
    pub a: G1Affine,
    pub b: G2Affine,
    pub c: G1Affine,
}

/// Bytes of one base-field (Fp) coordinate, big-endian
pub const FP_BYTES: usize = 48;

/// Bytes of one scalar-field (Fr) element, big-endian
pub const FR_BYTES: usize = 32;

/// BLS12-381 scalar field modulus r, big-endian
pub const SCALAR_MODULUS: [u8; FR_BYTES] = [
    0x73, 0xed, 0xa7, 0x53, 0x29, 0x9d, 0x7d, 0x48, 0x33, 0x39, 0xd8, 0x08, 0x09, 0xa1, 0xd8, 0x05,
    0x53, 0xbd, 0xa4, 0x02, 0xff, 0xfe, 0x5b, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01,
];
