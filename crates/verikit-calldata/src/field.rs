// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Field-element literals.
//!
//! A field element is carried as an arbitrary-precision [`BigUint`] from the
//! moment it is parsed until a runtime encodes it for a contract call. Two
//! lexical forms are recognised:
//!
//! - decimal digits: `"21888242871839275222246405745257275088548364400416034343698204186575808495617"`
//! - `0x`-prefixed hex: `"0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001"`
//!
//! Proof structures only ever use the lowercase `0x` prefix, so
//! [`parse_canonical`] is strict about it. Calldata literals are parsed with
//! [`parse_literal`], which also takes `0X`.

use lazy_regex::regex_is_match;
use num_bigint::BigUint;

pub type FieldElement = BigUint;

/// Parse a string that is exactly `^[0-9]+$` or `^0x[0-9a-fA-F]+$`.
pub fn parse_canonical(s: &str) -> Option<FieldElement> {
    if regex_is_match!(r"^[0-9]+$", s) {
        BigUint::parse_bytes(s.as_bytes(), 10)
    } else if regex_is_match!(r"^0x[0-9a-fA-F]+$", s) {
        BigUint::parse_bytes(s[2..].as_bytes(), 16)
    } else {
        None
    }
}

/// Parse a calldata literal: decimal, `0x` hex or `0X` hex.
///
/// Separators and signs are rejected even though `BigUint::parse_bytes`
/// would tolerate them.
pub fn parse_literal(s: &str) -> Option<FieldElement> {
    if regex_is_match!(r"^0[xX][0-9a-fA-F]+$", s) {
        BigUint::parse_bytes(s[2..].as_bytes(), 16)
    } else {
        parse_canonical(s)
    }
}

/// Render as a canonical decimal string.
pub fn to_decimal(value: &FieldElement) -> String {
    value.to_str_radix(10)
}

/// Render as `0x` hex left-padded to at least 32 bytes, the way calldata
/// exporters print words.
pub fn to_word_hex(value: &FieldElement) -> String {
    format!("0x{:0>64}", value.to_str_radix(16))
}

/// Big-endian bytes left-padded to `width`. `None` if the value needs more
/// than `width` bytes.
pub fn to_be_padded(value: &FieldElement, width: usize) -> Option<Vec<u8>> {
    let bytes = value.to_bytes_be();
    if bytes.len() > width {
        return None;
    }
    let mut out = vec![0u8; width - bytes.len()];
    out.extend_from_slice(&bytes);
    Some(out)
}
