// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Pure per-file source transform.

use std::ops::Range;

use lazy_regex::{regex, regex_is_match};
use serde::{Deserialize, Serialize};

/// Compiler pragma every verifier is pinned to.
pub const CANONICAL_PRAGMA: &str = "pragma solidity ^0.8.0";

pub const DEFAULT_VERIFIER_SOURCES: [&str; 3] = [
    "contracts/HelloWorldVerifier.sol",
    "contracts/Multiplier3Verifier.sol",
    "contracts/PlonkMultiplier3Verifier.sol",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Files rewritten by `bump-solidity` when none are given.
    #[serde(default = "default_files")]
    pub files: Vec<String>,
    /// Replacement for the first `pragma solidity ^X.Y.Z`.
    #[serde(default = "default_pragma")]
    pub pragma: String,
}

fn default_files() -> Vec<String> {
    DEFAULT_VERIFIER_SOURCES.iter().map(|f| f.to_string()).collect()
}

fn default_pragma() -> String {
    CANONICAL_PRAGMA.to_string()
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            files: default_files(),
            pragma: default_pragma(),
        }
    }
}

/// Byte range of the first caret-pinned version pragma.
pub fn find_pragma(source: &str) -> Option<Range<usize>> {
    regex!(r"pragma solidity \^\d+\.\d+\.\d+").find(source).map(|m| m.range())
}

/// Byte range of the first `contract Verifier` declaration. `contract
/// VerifierFoo` and `contract MyVerifier` do not match.
pub fn find_generic_contract(source: &str) -> Option<Range<usize>> {
    regex!(r"\bcontract\s+Verifier\b").find(source).map(|m| m.range())
}

pub fn is_contract_identifier(name: &str) -> bool {
    regex_is_match!(r"^[A-Za-z_$][A-Za-z0-9_$]*$", name)
}

fn splice(source: &str, range: Option<Range<usize>>, with: &str) -> String {
    match range {
        Some(r) => {
            let mut out = String::with_capacity(source.len() + with.len());
            out.push_str(&source[..r.start]);
            out.push_str(with);
            out.push_str(&source[r.end..]);
            out
        }
        None => source.to_string(),
    }
}

/// Pin the pragma and rename the generic contract to `contract_name`.
///
/// Applying it to its own output returns that output unchanged.
///
/// ```
/// use verikit_templater::{rewrite_source, TemplateConfig};
///
/// let src = "pragma solidity ^0.6.11;\ncontract Verifier {}\n";
/// let out = rewrite_source(src, &TemplateConfig::default(), "HelloWorldVerifier");
/// assert_eq!(out, "pragma solidity ^0.8.0;\ncontract HelloWorldVerifier {}\n");
/// assert_eq!(rewrite_source(&out, &TemplateConfig::default(), "HelloWorldVerifier"), out);
/// ```
pub fn rewrite_source(source: &str, config: &TemplateConfig, contract_name: &str) -> String {
    let pinned = splice(source, find_pragma(source), &config.pragma);
    let renamed = format!("contract {contract_name}");
    splice(&pinned, find_generic_contract(&pinned), &renamed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATED: &str = "// SPDX-License-Identifier: GPL-3.0\n\
pragma solidity ^0.6.11;\n\
\n\
library Pairing {\n\
    uint256 constant PRIME_Q = 21888242871839275222246405745257275088696311157297823662689037894645226208583;\n\
}\n\
contract Verifier {\n\
    using Pairing for *;\n\
}\n";

    fn rewrite(src: &str) -> String {
        rewrite_source(src, &TemplateConfig::default(), "Multiplier3Verifier")
    }

    #[test]
    fn pins_pragma_and_renames() {
        let out = rewrite(GENERATED);
        assert!(out.contains("pragma solidity ^0.8.0;"));
        assert!(out.contains("contract Multiplier3Verifier {"));
        assert!(!out.contains("^0.6.11"));
        assert!(out.contains("library Pairing"));
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let once = rewrite(GENERATED);
        assert_eq!(rewrite(&once), once);
    }

    #[test]
    fn only_first_occurrence_is_replaced() {
        let src = "pragma solidity ^0.6.11;\npragma solidity ^0.7.0;\ncontract Verifier {}\ncontract Verifier {}\n";
        let out = rewrite(src);
        assert_eq!(
            out,
            "pragma solidity ^0.8.0;\npragma solidity ^0.7.0;\ncontract Multiplier3Verifier {}\ncontract Verifier {}\n"
        );
    }

    #[test]
    fn longer_names_are_left_alone() {
        let src = "pragma solidity >=0.7.0 <0.9.0;\ncontract PlonkVerifier {}\ncontract VerifierBase {}\n";
        assert_eq!(rewrite(src), src);
    }

    #[test]
    fn custom_pragma() {
        let config = TemplateConfig {
            pragma: "pragma solidity ^0.8.20".into(),
            ..Default::default()
        };
        let out = rewrite_source("pragma solidity ^0.6.11;\n", &config, "X");
        assert_eq!(out, "pragma solidity ^0.8.20;\n");
    }

    #[test]
    fn contract_identifiers() {
        assert!(is_contract_identifier("HelloWorldVerifier"));
        assert!(is_contract_identifier("_plonk$1"));
        assert!(!is_contract_identifier("1Verifier"));
        assert!(!is_contract_identifier("hello-world"));
        assert!(!is_contract_identifier(""));
    }
}
