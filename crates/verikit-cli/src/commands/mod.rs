pub mod bump;
pub mod calldata;
pub mod config;
pub mod run;
