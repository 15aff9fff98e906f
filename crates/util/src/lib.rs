//! sneklib-util - shared helpers for sneklib tests
//!
//! Provides a seeded workload generator so randomized container tests can be
//! replayed from the seed printed on failure.

pub mod fuzzer;

pub use fuzzer::{Fuzzer, Op};
