//! argcalc — pairwise arithmetic and argument exercises (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod access;
pub mod calc;
pub mod config;
pub mod constants;
pub mod echo;
pub mod env;
pub mod logging;
pub mod models;
pub mod output;
