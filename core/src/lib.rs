//! The probing engine behind `sweepr`.
//!
//! * [`probe`]: the reachability capability and its result types.
//! * [`pool`]: a fixed-concurrency pool that runs one probe per address.
//! * [`scanner`]: expands specs, drives the pool and aggregates the reachable hosts.

pub mod pool;
pub mod probe;
pub mod scanner;
