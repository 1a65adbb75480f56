//! Benchmark support crate for paver.
//!
//! Provides seeded graph workloads and parameter types used by the Criterion
//! benchmarks for the spanning forest and hub usage stages.

pub mod error;
pub mod params;
pub mod workload;
