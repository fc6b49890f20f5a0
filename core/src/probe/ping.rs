//! Probing through the operating system's `ping` binary.
//!
//! One echo request per address, with the platform's own wait flag carrying
//! the timeout. Output is discarded; only the exit status matters.

use std::process::{Command, Stdio};
use std::time::Duration;

use sweepr_common::config::DEFAULT_TIMEOUT;
use sweepr_common::error::ProbeError;
use sweepr_common::network::address::Address;

use super::Probe;

const PING_BIN: &str = "ping";

#[derive(Debug, Clone, Copy)]
pub struct PingProbe {
    timeout: Duration,
}

impl Default for PingProbe {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl PingProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Probe for PingProbe {
    fn probe(&self, address: &Address) -> Result<bool, ProbeError> {
        let status = Command::new(PING_BIN)
            .args(ping_args(self.timeout, address))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ProbeError::Unavailable(format!("could not run '{PING_BIN}': {e}")))?;

        Ok(status.success())
    }
}

/// Single echo request with the wait flag each platform understands.
fn ping_args(timeout: Duration, address: &Address) -> Vec<String> {
    let millis = timeout.as_millis().max(1);

    let (count_flag, wait) = if cfg!(target_os = "windows") {
        ("-n", ("-w", millis.to_string()))
    } else if cfg!(target_os = "macos") {
        ("-c", ("-W", millis.to_string()))
    } else {
        // iputils takes whole seconds
        let secs = millis.div_ceil(1_000);
        ("-c", ("-W", secs.to_string()))
    };

    vec![
        count_flag.to_string(),
        "1".to_string(),
        wait.0.to_string(),
        wait.1,
        address.to_string(),
    ]
}
