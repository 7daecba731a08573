// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Coordinate decoding and Groth16 verification using Soroban BLS12-381 host functions

use crate::types::{Proof, VerificationKey, FP_BYTES, FR_BYTES, SCALAR_MODULUS};
use soroban_sdk::crypto::bls12_381::{Fr, G1Affine, G2Affine};
use soroban_sdk::{BytesN, Env, Vec};

/// Infinity flag in the first byte of an uncompressed point
const INFINITY_FLAG: u8 = 0x40;

fn coordinate(coords: &Vec<BytesN<FP_BYTES>>, i: u32) -> [u8; FP_BYTES] {
    coords.get(i).expect("missing coordinate").to_array()
}

/// Build a G1 point from `[x, y]`.
///
/// `(0, 0)` is the point at infinity, as on EVM pairing precompiles.
pub fn g1_from_coords(env: &Env, coords: &Vec<BytesN<FP_BYTES>>) -> G1Affine {
    if coords.len() != 2 {
        panic!("G1 point needs 2 coordinates");
    }
    let mut buf = [0u8; 2 * FP_BYTES];
    buf[..FP_BYTES].copy_from_slice(&coordinate(coords, 0));
    buf[FP_BYTES..].copy_from_slice(&coordinate(coords, 1));
    if buf.iter().all(|b| *b == 0) {
        buf[0] = INFINITY_FLAG;
    }
    G1Affine::from_bytes(BytesN::from_array(env, &buf))
}

/// Build a G2 point from `[[x.c1, x.c0], [y.c1, y.c0]]`.
///
/// Row order is the calldata exporter's, which already matches the
/// `c1 || c0` encoding of Fp2 elements.
pub fn g2_from_coords(env: &Env, rows: &Vec<Vec<BytesN<FP_BYTES>>>) -> G2Affine {
    if rows.len() != 2 {
        panic!("G2 point needs 2 rows");
    }
    let mut buf = [0u8; 4 * FP_BYTES];
    for r in 0..2u32 {
        let row = rows.get(r).expect("missing row");
        if row.len() != 2 {
            panic!("G2 row needs 2 coordinates");
        }
        for k in 0..2u32 {
            let at = ((2 * r + k) as usize) * FP_BYTES;
            buf[at..at + FP_BYTES].copy_from_slice(&coordinate(&row, k));
        }
    }
    if buf.iter().all(|b| *b == 0) {
        buf[0] = INFINITY_FLAG;
    }
    G2Affine::from_bytes(BytesN::from_array(env, &buf))
}

/// True if the big-endian value is below the scalar field modulus
pub fn in_scalar_field(value: &BytesN<FR_BYTES>) -> bool {
    value.to_array() < SCALAR_MODULUS
}

/// Verify a Groth16 proof using BLS12-381 pairing check
///
/// Algorithm:
/// 1. Compute L = IC[0] + MSM(IC[1..], public_inputs)
/// 2. Check: e(A,B) * e(-L,gamma) * e(-C,delta) * e(-alpha,beta) == 1
pub fn verify_groth16(
    env: &Env,
    vk: &VerificationKey,
    proof: &Proof,
    public_inputs: &Vec<Fr>,
) -> bool {
    let bls = env.crypto().bls12_381();

    let ic_0: G1Affine = vk.ic.get(0).expect("VK must have at least ic[0]");

    let l = if public_inputs.is_empty() {
        ic_0
    } else {
        let ic_rest: Vec<G1Affine> = vk.ic.slice(1..);
        let msm_result = bls.g1_msm(ic_rest, public_inputs.clone());
        bls.g1_add(&ic_0, &msm_result)
    };

    // Negate G1 points via scalar mul by -1
    let zero = Fr::from_bytes(BytesN::from_array(env, &[0u8; FR_BYTES]));
    let one = Fr::from_bytes(BytesN::from_array(env, &{
        let mut b = [0u8; FR_BYTES];
        b[FR_BYTES - 1] = 1;
        b
    }));
    let neg_one = bls.fr_sub(&zero, &one);

    let neg_l = bls.g1_mul(&l, &neg_one);
    let neg_c = bls.g1_mul(&proof.c, &neg_one);
    let neg_alpha = bls.g1_mul(&vk.alpha_g1, &neg_one);

    let g1_points: Vec<G1Affine> = Vec::from_array(
        env,
        [proof.a.clone(), neg_l, neg_c, neg_alpha],
    );
    let g2_points = Vec::from_array(
        env,
        [
            proof.b.clone(),
            vk.gamma_g2.clone(),
            vk.delta_g2.clone(),
            vk.beta_g2.clone(),
        ],
    );

    bls.pairing_check(g1_points, g2_points)
}
