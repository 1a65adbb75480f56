//! Shared test utilities used across paver crates.

pub mod ci;
pub mod tracing;
