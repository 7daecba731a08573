// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! snarkjs-compatible Groth16 calldata export.
//!
//! Produces the same text `snarkjs zkey export soliditycalldata` prints for
//! a Groth16 proof:
//!
//! ```text
//! ["<a.x>", "<a.y>"],[["<b.x.c1>", "<b.x.c0>"],["<b.y.c1>", "<b.y.c0>"]],["<c.x>", "<c.y>"],["<pub0>","<pub1>",...]
//! ```
//!
//! The `b` coordinates are swapped within each row relative to the proof
//! JSON (`pi_b[i] = [c0, c1]`), which is the order pairing precompiles and
//! the Soroban verifier read an Fp2 element in.

use crate::error::{CalldataError, CalldataResult};
use crate::field::{to_word_hex, FieldElement};
use crate::normalize::{ProofValue, PublicSignals};

fn coordinate<'a>(proof: &'a ProofValue, key: &str, path: &[usize]) -> CalldataResult<&'a FieldElement> {
    let mut node = proof.get(key);
    for &i in path {
        node = node.and_then(|n| n.at(i));
    }
    node.and_then(ProofValue::as_integer)
        .ok_or_else(|| CalldataError::ProofShape {
            path: path.iter().fold(key.to_string(), |acc, i| format!("{acc}[{i}]")),
        })
}

/// Render normalized Groth16 proof and public signals as exported calldata.
pub fn groth16_calldata(proof: &ProofValue, signals: &PublicSignals) -> CalldataResult<String> {
    let w = |key: &str, path: &[usize]| coordinate(proof, key, path).map(to_word_hex);

    let inputs = signals
        .iter()
        .map(|s| format!("\"{}\"", to_word_hex(s)))
        .collect::<Vec<_>>()
        .join(",");

    Ok(format!(
        "[\"{}\", \"{}\"],[[\"{}\", \"{}\"],[\"{}\", \"{}\"]],[\"{}\", \"{}\"],[{}]",
        w("pi_a", &[0])?,
        w("pi_a", &[1])?,
        w("pi_b", &[0, 1])?,
        w("pi_b", &[0, 0])?,
        w("pi_b", &[1, 1])?,
        w("pi_b", &[1, 0])?,
        w("pi_c", &[0])?,
        w("pi_c", &[1])?,
        inputs,
    ))
}
