// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! verikit-verifier: per-circuit Groth16 verifier contract on Soroban

#![no_std]

mod contract;
mod types;
mod verifier;

pub use contract::*;
pub use types::*;
pub use verifier::*;
