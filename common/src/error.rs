//! # Error taxonomy
//!
//! [`SweepError`] covers everything that can stop an operation: a bad
//! address spec, a bad configuration or a file that cannot be read or
//! written. [`ProbeError`] is narrower. It describes a probe that could not
//! decide whether a host is up and is always folded into that host's result
//! instead of being propagated.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweepError {
    /// An address spec matched none of the supported forms.
    #[error("malformed address spec '{spec}': {reason}")]
    MalformedSpec { spec: String, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to {action} {}: {source}", .path.display())]
    FileIo {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SweepError {
    pub fn malformed(spec: &str, reason: impl Into<String>) -> Self {
        Self::MalformedSpec {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }
}

/// The probe mechanism itself failed, so reachability is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("probe mechanism unavailable: {0}")]
    Unavailable(String),

    #[error("probe panicked: {0}")]
    Panicked(String),

    #[error("{0}")]
    Other(String),
}

/// A spec that was skipped during a batch expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecError {
    /// 1-based line number when the spec came from a file.
    pub line: Option<usize>,
    pub spec: String,
    pub reason: String,
}

impl SpecError {
    pub(crate) fn from_sweep(line: Option<usize>, spec: &str, err: SweepError) -> Self {
        let reason = match err {
            SweepError::MalformedSpec { reason, .. } => reason,
            other => other.to_string(),
        };
        Self {
            line,
            spec: spec.to_string(),
            reason,
        }
    }
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: '{}': {}", self.spec, self.reason),
            None => write!(f, "'{}': {}", self.spec, self.reason),
        }
    }
}
