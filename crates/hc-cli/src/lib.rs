//! Home-control interpreter front end, library crate.
//!
//! Exposes config, inventory loading, argument parsing and report building so
//! the binary stays thin and `hc-e2e-tests` can drive the same code paths.

pub mod args;
pub mod config;
pub mod inventory;
pub mod report;
