//! # selfheal
//!
//! Latency benchmark for an S3 Block Public Access self-healing control.
//!
//! This crate re-exports the benchmark API from `selfheal-core`. The
//! `selfheal-bench` binary lives in `selfheal-cli`; AWS collaborators live in
//! `selfheal-aws`.

pub use selfheal_core::*;
