//! The reachability **capability** the engine is built around.
//!
//! A [`Probe`] answers one question for one address: did the host respond
//! within the probe's own time limit? The engine never looks at how the
//! answer is produced, so the system `ping` ([`PingProbe`]) and a test stub
//! are interchangeable.

use std::fmt;

use sweepr_common::error::ProbeError;
use sweepr_common::network::address::Address;

mod ping;

pub use ping::PingProbe;

/// A blocking, time-bounded reachability check.
///
/// Implementations must return within their own timeout. `Ok(false)` means
/// the host did not answer; `Err` means the answer could not be determined.
pub trait Probe: Send + Sync + 'static {
    fn probe(&self, address: &Address) -> Result<bool, ProbeError>;
}

impl<F> Probe for F
where
    F: Fn(&Address) -> Result<bool, ProbeError> + Send + Sync + 'static,
{
    fn probe(&self, address: &Address) -> Result<bool, ProbeError> {
        self(address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable,
    Unreachable,
    /// The probe could not decide. Counts as not reachable.
    Failed(ProbeError),
}

/// The single result produced for every probed address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub address: Address,
    pub outcome: ProbeOutcome,
}

impl ProbeResult {
    pub fn new(address: Address, outcome: ProbeOutcome) -> Self {
        Self { address, outcome }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Reachable)
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            ProbeOutcome::Reachable => write!(f, "{} is reachable", self.address),
            ProbeOutcome::Unreachable => write!(f, "{} is unreachable", self.address),
            ProbeOutcome::Failed(err) => write!(f, "{} could not be probed: {err}", self.address),
        }
    }
}
