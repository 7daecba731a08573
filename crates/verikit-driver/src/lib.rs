// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # verikit-driver
//!
//! Runs proof-verification scenarios end to end: prove, normalize, export,
//! adapt, call the deployed verifier, check the verdict.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | [`engine`] | `ProvingEngine` seam, circuit inputs and artifacts |
//! | [`snarkjs`] | `snarkjs` CLI engine (Groth16 and PLONK) |
//! | [`arkworks`] | In-process Groth16 engine on BLS12-381 |
//! | [`runtime`] | `ContractRuntime` / `VerifierContract` seam |
//! | [`foundry`] | `forge create` / `cast call` runtime for Solidity verifiers |
//! | [`soroban`] | In-process Soroban runtime for the Groth16 verifier contract |
//! | [`scenario`] | `run_scenario` and `run_suite` |
//! | [`config`] | `verikit.json` suite configuration |
//!
//! ## Example
//!
//! ```rust,no_run
//! use verikit_driver::config::{ConfiguredRuntime, SuiteConfig};
//! use verikit_driver::scenario::run_suite;
//!
//! # async fn example() -> verikit_driver::DriverResult<()> {
//! let config = SuiteConfig::load("verikit.json".as_ref())?;
//! let engine = config.engine.build();
//! let report = match config.runtime.build() {
//!     ConfiguredRuntime::Foundry(mut rt) => run_suite(&engine, &mut rt, &config.scenarios).await,
//!     ConfiguredRuntime::Soroban(mut rt) => run_suite(&engine, &mut rt, &config.scenarios).await,
//! };
//! println!("{} passed, {} failed", report.passed(), report.failed());
//! # Ok(())
//! # }
//! ```

pub mod arkworks;
pub mod config;
pub mod engine;
pub mod error;
pub mod foundry;
pub mod runtime;
pub mod scenario;
pub mod snarkjs;
pub mod soroban;

pub use error::{DriverError, DriverResult};
pub use scenario::{run_scenario, run_suite, Expectation, Scenario, ScenarioReport, SuiteReport};
