// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # verikit-calldata
//!
//! Turns what a proving engine hands back into what a verifier contract
//! accepts, without ever narrowing a field element to a machine word.
//!
//! | Module | Purpose |
//! |---|---|
//! | [`normalize`] | Schema-free walk turning numeric strings into `BigUint` |
//! | [`tokenize`](mod@tokenize) | Flatten exported calldata into decimal tokens |
//! | [`adapter`] | [`ProofSystem`] → [`VerifierInput`] shaping |
//! | [`export`] | snarkjs-compatible Groth16 calldata export |
//! | [`field`] | Field-element literal parsing and rendering |
//!
//! ```rust
//! use verikit_calldata::{ProofSystem, VerifierInput};
//!
//! let calldata = r#"["0x1", "0x2"],[["0x3", "0x4"],["0x5", "0x6"]],["0x7", "0x8"],["0x2"]"#;
//! let input = ProofSystem::Groth16.adapt(calldata).unwrap();
//! assert!(matches!(input, VerifierInput::Groth16 { .. }));
//! assert_eq!(input.public_inputs().len(), 1);
//! ```

pub mod adapter;
pub mod error;
pub mod export;
pub mod field;
pub mod normalize;
pub mod tokenize;

pub use adapter::{groth16_from_tokens, plonk_from_calldata, ProofSystem, VerifierInput};
pub use error::{CalldataError, CalldataResult};
pub use field::FieldElement;
pub use normalize::{normalize, normalize_public_signals, ProofValue, PublicSignals};
pub use tokenize::tokenize;
