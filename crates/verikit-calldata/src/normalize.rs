// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Numeric normalization of proof structures.
//!
//! Proving engines hand back loosely typed JSON: Groth16 proofs nest points
//! as arrays of decimal strings, PLONK proofs are flat objects of points and
//! evaluations, and both carry incidental strings such as `"protocol"`.
//! [`normalize`] walks any such value without assuming a schema and turns
//! every numeric string into an exact [`BigUint`].

use std::collections::BTreeMap;

use num_bigint::BigUint;
use serde_json::Value;

use crate::error::{CalldataError, CalldataResult};
use crate::field::{parse_canonical, to_decimal};

/// A proof structure after normalization.
#[derive(Clone, Debug, PartialEq)]
pub enum ProofValue {
    Null,
    Bool(bool),
    /// Non-string JSON number, carried through untouched.
    Number(serde_json::Number),
    /// A string that is not a numeric literal (field names, `"groth16"`, ...).
    Text(String),
    Integer(BigUint),
    Sequence(Vec<ProofValue>),
    Mapping(BTreeMap<String, ProofValue>),
}

/// Public signals in circuit declaration order.
pub type PublicSignals = Vec<BigUint>;

impl ProofValue {
    pub fn get(&self, key: &str) -> Option<&ProofValue> {
        match self {
            ProofValue::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    pub fn at(&self, index: usize) -> Option<&ProofValue> {
        match self {
            ProofValue::Sequence(items) => items.get(index),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&BigUint> {
        match self {
            ProofValue::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Back to JSON, integers as decimal strings. This is the form proving
    /// engines read proofs back in.
    pub fn to_json(&self) -> Value {
        match self {
            ProofValue::Null => Value::Null,
            ProofValue::Bool(b) => Value::Bool(*b),
            ProofValue::Number(n) => Value::Number(n.clone()),
            ProofValue::Text(s) => Value::String(s.clone()),
            ProofValue::Integer(n) => Value::String(to_decimal(n)),
            ProofValue::Sequence(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            ProofValue::Mapping(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

/// Structurally identical copy of `value` with numeric strings replaced by
/// integers. Never fails: strings that are not numeric are kept verbatim.
pub fn normalize(value: &Value) -> ProofValue {
    match value {
        Value::Null => ProofValue::Null,
        Value::Bool(b) => ProofValue::Bool(*b),
        Value::Number(n) => ProofValue::Number(n.clone()),
        Value::String(s) => match parse_canonical(s) {
            Some(n) => ProofValue::Integer(n),
            None => ProofValue::Text(s.clone()),
        },
        Value::Array(items) => ProofValue::Sequence(items.iter().map(normalize).collect()),
        Value::Object(map) => ProofValue::Mapping(
            map.iter()
                .map(|(k, v)| (k.clone(), normalize(v)))
                .collect(),
        ),
    }
}

/// Normalize a public-signal array. Every entry must be numeric.
pub fn normalize_public_signals(value: &Value) -> CalldataResult<PublicSignals> {
    let items = match normalize(value) {
        ProofValue::Sequence(items) => items,
        _ => {
            return Err(CalldataError::ProofShape {
                path: "publicSignals".into(),
            })
        }
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            ProofValue::Integer(n) => Ok(n),
            other => Err(CalldataError::MalformedToken {
                token: format!("publicSignals[{i}] = {}", other.to_json()),
            }),
        })
        .collect()
}
