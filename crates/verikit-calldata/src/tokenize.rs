// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Flattening of exported calldata strings into canonical decimal tokens.

use crate::error::{CalldataError, CalldataResult};
use crate::field::{parse_literal, to_decimal};

fn is_decoration(c: char) -> bool {
    matches!(c, '"' | '[' | ']') || c.is_whitespace()
}

/// Strip quotes, brackets and whitespace, split on `,` and re-render every
/// literal as a decimal string. Order and count are preserved.
///
/// ```
/// let tokens = verikit_calldata::tokenize(r#"["0x0a", 10]"#).unwrap();
/// assert_eq!(tokens, ["10", "10"]);
/// ```
pub fn tokenize(calldata: &str) -> CalldataResult<Vec<String>> {
    let flat: String = calldata.chars().filter(|&c| !is_decoration(c)).collect();
    flat.split(',')
        .map(|piece| {
            parse_literal(piece)
                .map(|n| to_decimal(&n))
                .ok_or_else(|| CalldataError::MalformedToken {
                    token: piece.to_string(),
                })
        })
        .collect()
}
