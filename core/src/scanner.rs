//! Scan **coordination**: from raw specs to the set of reachable hosts.
//!
//! A [`Scanner`] owns nothing between runs. Each call expands its specs,
//! hands the whole batch to the [`WorkerPool`] once and folds the results
//! into a [`ScanReport`]. Malformed specs and probe failures are reported and
//! skipped; neither stops the batch.

use std::sync::Arc;
use std::time::{Duration, Instant};

use sweepr_common::config::Config;
use sweepr_common::error::{ProbeError, SpecError, SweepError};
use sweepr_common::network::address::Address;
use sweepr_common::network::target::{self, Expansion};
use sweepr_common::{info, success, warn};
use tracing::debug;

use crate::pool::WorkerPool;
use crate::probe::{Probe, ProbeOutcome, ProbeResult};

type Observer = Box<dyn Fn(&ProbeResult) + Send + Sync>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of addresses handed to the pool.
    pub total: usize,
    /// Reachable hosts in the order their probes completed.
    pub reachable: Vec<Address>,
    /// Hosts whose probe could not decide.
    pub failures: Vec<(Address, ProbeError)>,
    /// Specs skipped during expansion.
    pub malformed: Vec<SpecError>,
    pub elapsed: Duration,
}

impl ScanReport {
    pub fn unreachable(&self) -> usize {
        self.total - self.reachable.len() - self.failures.len()
    }
}

pub struct Scanner {
    pool: WorkerPool,
    probe: Arc<dyn Probe>,
    observer: Option<Observer>,
}

impl Scanner {
    /// Validates `cfg` and builds the pool. Nothing is probed yet.
    pub fn new(cfg: &Config, probe: Arc<dyn Probe>) -> Result<Self, SweepError> {
        cfg.validate()?;
        Ok(Self {
            pool: WorkerPool::new(cfg.concurrency)?,
            probe,
            observer: None,
        })
    }

    /// Registers a callback invoked once per result, e.g. to drive a progress bar.
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&ProbeResult) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn concurrency(&self) -> usize {
        self.pool.concurrency()
    }

    /// Expands `specs` and probes every resulting address.
    pub async fn scan<S>(&self, specs: &[S]) -> ScanReport
    where
        S: AsRef<str> + Sync,
    {
        self.scan_expansion(target::expand_all(specs)).await
    }

    /// Probes an already expanded batch, carrying its malformed specs into the report.
    pub async fn scan_expansion(&self, expansion: Expansion) -> ScanReport {
        for spec_err in &expansion.malformed {
            warn!("Skipping malformed spec {spec_err}");
        }

        let mut report = self.scan_addresses(expansion.addresses).await;
        report.malformed = expansion.malformed;
        report
    }

    pub async fn scan_addresses(&self, addresses: Vec<Address>) -> ScanReport {
        let start_time = Instant::now();
        let total = addresses.len();
        let unit = if total == 1 { "address" } else { "addresses" };
        info!("Probing {total} {unit} with {} workers", self.concurrency());

        let mut report = ScanReport {
            total,
            ..ScanReport::default()
        };

        let results = self
            .pool
            .run_with(addresses, Arc::clone(&self.probe), |result| {
                if let Some(observer) = &self.observer {
                    observer(result);
                }
            })
            .await;

        for result in results {
            match &result.outcome {
                ProbeOutcome::Reachable => {
                    success!("{result}");
                    report.reachable.push(result.address.clone());
                }
                ProbeOutcome::Unreachable => debug!("{result}"),
                ProbeOutcome::Failed(err) => {
                    warn!("{result}");
                    report.failures.push((result.address.clone(), err.clone()));
                }
            }
        }

        report.elapsed = start_time.elapsed();
        report
    }
}
