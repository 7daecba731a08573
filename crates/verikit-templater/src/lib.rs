// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # verikit-templater
//!
//! Prepares generated Solidity verifiers for deployment side by side: pins
//! the compiler pragma and renames the generic `contract Verifier` after
//! the file it lives in. Re-running on rewritten files changes nothing.

mod error;
mod files;
mod rewrite;

pub use error::{TemplateError, TemplateResult};
pub use files::{bump_all, bump_file, contract_name, BumpOutcome};
pub use rewrite::{
    find_generic_contract, find_pragma, is_contract_identifier, rewrite_source, TemplateConfig,
    CANONICAL_PRAGMA, DEFAULT_VERIFIER_SOURCES,
};
