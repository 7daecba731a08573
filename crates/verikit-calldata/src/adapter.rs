// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Proof-system specific shaping of calldata into verifier arguments.
//!
//! The two supported verifiers have incompatible entrypoints:
//!
//! | System | Entrypoint |
//! |---|---|
//! | Groth16 | `verifyProof(uint[2] a, uint[2][2] b, uint[2] c, uint[] input)` |
//! | PLONK | `verifyProof(bytes proof, uint[] pubSignals)` |
//!
//! The caller picks the [`ProofSystem`] from the scenario it runs; nothing
//! here sniffs the calldata to guess.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;

use crate::error::{CalldataError, CalldataResult};
use crate::field::{parse_canonical, to_decimal, FieldElement};
use crate::tokenize::tokenize;

/// Minimum token count of Groth16 calldata: A (2) + B (4) + C (2).
pub const GROTH16_PROOF_TOKENS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofSystem {
    Groth16,
    Plonk,
}

/// Arguments for one verifier call.
#[derive(Clone, Debug, PartialEq)]
pub enum VerifierInput {
    Groth16 {
        a: [FieldElement; 2],
        /// Row-major, rows in the order the exporter emitted them.
        b: [[FieldElement; 2]; 2],
        c: [FieldElement; 2],
        public_inputs: Vec<FieldElement>,
    },
    Plonk {
        /// Opaque `0x` hex blob, passed as `bytes`.
        proof: String,
        public_inputs: Vec<FieldElement>,
    },
}

impl ProofSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProofSystem::Groth16 => "groth16",
            ProofSystem::Plonk => "plonk",
        }
    }

    /// Shape an exported calldata string for this system's verifier.
    pub fn adapt(&self, calldata: &str) -> CalldataResult<VerifierInput> {
        match self {
            ProofSystem::Groth16 => groth16_from_tokens(&tokenize(calldata)?),
            ProofSystem::Plonk => plonk_from_calldata(calldata),
        }
    }

    /// Deliberately invalid arguments that a correct verifier must reject.
    pub fn rejecting_input(&self) -> VerifierInput {
        let zero = || BigUint::from(0u8);
        match self {
            ProofSystem::Groth16 => VerifierInput::Groth16 {
                a: [zero(), zero()],
                b: [[zero(), zero()], [zero(), zero()]],
                c: [zero(), zero()],
                public_inputs: vec![zero()],
            },
            ProofSystem::Plonk => VerifierInput::Plonk {
                proof: "0x".into(),
                public_inputs: vec![BigUint::from(50u8)],
            },
        }
    }
}

impl fmt::Display for ProofSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProofSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "groth16" => Ok(ProofSystem::Groth16),
            "plonk" => Ok(ProofSystem::Plonk),
            other => Err(format!("unknown proof system {other:?} (expected groth16 or plonk)")),
        }
    }
}

impl VerifierInput {
    pub fn proof_system(&self) -> ProofSystem {
        match self {
            VerifierInput::Groth16 { .. } => ProofSystem::Groth16,
            VerifierInput::Plonk { .. } => ProofSystem::Plonk,
        }
    }

    pub fn public_inputs(&self) -> &[FieldElement] {
        match self {
            VerifierInput::Groth16 { public_inputs, .. } | VerifierInput::Plonk { public_inputs, .. } => {
                public_inputs
            }
        }
    }

    /// JSON rendering with decimal-string field elements.
    pub fn to_json(&self) -> Value {
        let dec = |n: &FieldElement| Value::String(to_decimal(n));
        let list = |xs: &[FieldElement]| Value::Array(xs.iter().map(dec).collect());
        match self {
            VerifierInput::Groth16 { a, b, c, public_inputs } => serde_json::json!({
                "system": "groth16",
                "a": list(&a[..]),
                "b": [list(&b[0][..]), list(&b[1][..])],
                "c": list(&c[..]),
                "public_inputs": list(&public_inputs[..]),
            }),
            VerifierInput::Plonk { proof, public_inputs } => serde_json::json!({
                "system": "plonk",
                "proof": proof,
                "public_inputs": list(&public_inputs[..]),
            }),
        }
    }
}

/// Build Groth16 arguments from decimal tokens.
///
/// Positions 0–1 are `a`, 2–3 and 4–5 the two rows of `b`, 6–7 `c`, and
/// everything after is the public input list.
pub fn groth16_from_tokens(tokens: &[String]) -> CalldataResult<VerifierInput> {
    if tokens.len() < GROTH16_PROOF_TOKENS {
        return Err(CalldataError::ShapeArity {
            system: ProofSystem::Groth16,
            expected: GROTH16_PROOF_TOKENS,
            actual: tokens.len(),
        });
    }
    let values: Vec<FieldElement> = tokens
        .iter()
        .map(|t| {
            parse_canonical(t).ok_or_else(|| CalldataError::MalformedToken { token: t.clone() })
        })
        .collect::<CalldataResult<_>>()?;

    let mut it = values.into_iter();
    let mut next = || it.next().unwrap_or_default();
    let a = [next(), next()];
    let b = [[next(), next()], [next(), next()]];
    let c = [next(), next()];
    Ok(VerifierInput::Groth16 {
        a,
        b,
        c,
        public_inputs: it.collect(),
    })
}

/// Index of the comma that separates the blob from the public inputs,
/// skipping over a quoted blob.
fn blob_boundary(calldata: &str) -> Option<usize> {
    match calldata.strip_prefix('"') {
        Some(rest) => {
            let close = rest.find('"')? + 1;
            calldata[close + 1..].find(',').map(|i| close + 1 + i)
        }
        None => calldata.find(','),
    }
}

/// One public input, read from its JSON text so bare numbers of any size
/// survive.
fn plonk_signal(raw: &RawValue) -> CalldataResult<FieldElement> {
    let text = raw.get().trim();
    let parsed = match serde_json::from_str::<String>(text) {
        Ok(s) => parse_canonical(&s),
        Err(_) => parse_canonical(text),
    };
    parsed.ok_or_else(|| CalldataError::MalformedToken {
        token: text.to_string(),
    })
}

/// Parse PLONK calldata of the form `<blob>,[<public inputs>]`.
///
/// The pair is rebuilt as `["<blob>",[...]]` and read as JSON. The blob is
/// returned exactly as exported; it is never turned into an integer.
pub fn plonk_from_calldata(calldata: &str) -> CalldataResult<VerifierInput> {
    let calldata = calldata.trim();
    let split = blob_boundary(calldata).ok_or_else(|| CalldataError::PlonkCalldata {
        reason: "no separator between proof blob and public inputs".into(),
    })?;
    let blob = calldata[..split].trim().trim_matches('"');
    let signals = calldata[split + 1..].trim();

    let literal = format!("[\"{blob}\",{signals}]");
    let (proof, raw_signals): (String, Vec<Box<RawValue>>) =
        serde_json::from_str(&literal).map_err(|e| CalldataError::PlonkCalldata {
            reason: format!("{e} in {literal}"),
        })?;
    let public_inputs = raw_signals
        .iter()
        .map(|raw| plonk_signal(raw))
        .collect::<CalldataResult<_>>()?;

    Ok(VerifierInput::Plonk {
        proof,
        public_inputs,
    })
}
