use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use sweepr_common::error::ProbeError;
use sweepr_common::network::address::Address;
use sweepr_core::probe::Probe;

/// Answers from a fixed set of live hosts and records every address it is asked about.
pub struct StubProbe {
    alive: HashSet<String>,
    broken: HashSet<String>,
    delay: Duration,
    pub calls: AtomicUsize,
    pub probed: Mutex<Vec<Address>>,
}

impl StubProbe {
    pub fn new(alive: &[&str]) -> Self {
        Self {
            alive: alive.iter().map(|s| s.to_string()).collect(),
            broken: HashSet::new(),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            probed: Mutex::new(Vec::new()),
        }
    }

    /// Addresses for which the probe mechanism itself fails.
    pub fn with_broken(mut self, broken: &[&str]) -> Self {
        self.broken = broken.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Probe for StubProbe {
    fn probe(&self, address: &Address) -> Result<bool, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut probed) = self.probed.lock() {
            probed.push(address.clone());
        }

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        if self.broken.contains(address.as_str()) {
            return Err(ProbeError::Unavailable(format!("no route to probe {address}")));
        }
        Ok(self.alive.contains(address.as_str()))
    }
}

pub fn shared(probe: StubProbe) -> (Arc<StubProbe>, Arc<dyn Probe>) {
    let probe = Arc::new(probe);
    let dyn_probe: Arc<dyn Probe> = probe.clone();
    (probe, dyn_probe)
}

pub fn sorted(addresses: &[Address]) -> Vec<String> {
    let mut out: Vec<String> = addresses.iter().map(|a| a.to_string()).collect();
    out.sort();
    out
}
