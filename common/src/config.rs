use std::path::PathBuf;
use std::time::Duration;

use crate::error::SweepError;

pub const DEFAULT_CONCURRENCY: usize = 10;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1_000);

#[derive(Debug, Clone)]
pub struct Config {
    /// Upper bound on probes in flight at the same time.
    pub concurrency: usize,
    /// Time a single probe may take before the host counts as unreachable.
    pub timeout: Duration,
    /// Where the reachable addresses are written, if anywhere.
    ///
    /// The file is truncated on every run.
    pub output: Option<PathBuf>,
    /// 0 prints everything, 1 drops decoration, 2 drops per-host lines too.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_TIMEOUT,
            output: None,
            quiet: 0,
        }
    }
}

impl Config {
    /// Rejects settings that would make a scan meaningless.
    ///
    /// Must be called before any probe is dispatched.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.concurrency == 0 {
            return Err(SweepError::InvalidConfig(
                "concurrency must be at least 1".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(SweepError::InvalidConfig(
                "probe timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
