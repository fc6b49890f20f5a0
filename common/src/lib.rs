//! Shared building blocks for `sweepr`: the address model, spec expansion,
//! configuration, the error taxonomy and the input/output file helpers.

pub mod config;
pub mod error;
pub mod log;
pub mod network;
pub mod utils;

#[doc(hidden)]
pub use tracing;
