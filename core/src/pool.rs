//! A fixed-concurrency **worker pool** for probes.
//!
//! Every address becomes one task on a [`JoinSet`]. A task waits for a
//! permit from a semaphore sized to the pool's concurrency, then runs the
//! blocking probe on tokio's blocking thread pool. Results are drained from
//! the `JoinSet` by the calling task in completion order, so the aggregation
//! side needs no lock.
//!
//! Every submitted address produces exactly one [`ProbeResult`]. A probe that
//! errors or panics is recorded as [`ProbeOutcome::Failed`] for its own
//! address and nothing else is affected. `run` returns only after the last
//! task has been joined.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use sweepr_common::error::{ProbeError, SweepError};
use sweepr_common::network::address::Address;
use tokio::sync::Semaphore;
use tokio::task::{self, Id, JoinError, JoinSet};
use tracing::{debug, error};

use crate::probe::{Probe, ProbeOutcome, ProbeResult};

#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    concurrency: usize,
}

impl WorkerPool {
    /// Fails with `InvalidConfig` when `concurrency` is zero or above
    /// [`Semaphore::MAX_PERMITS`].
    pub fn new(concurrency: usize) -> Result<Self, SweepError> {
        if concurrency == 0 {
            return Err(SweepError::InvalidConfig(
                "worker pool needs at least one worker".to_string(),
            ));
        }
        if concurrency > Semaphore::MAX_PERMITS {
            return Err(SweepError::InvalidConfig(format!(
                "worker pool cannot run more than {} workers",
                Semaphore::MAX_PERMITS
            )));
        }
        Ok(Self { concurrency })
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Probes every address and returns one result per address, in completion order.
    pub async fn run(&self, addresses: Vec<Address>, probe: Arc<dyn Probe>) -> Vec<ProbeResult> {
        self.run_with(addresses, probe, |_| {}).await
    }

    /// Same as [`WorkerPool::run`], calling `on_result` as each result arrives.
    pub async fn run_with<F>(
        &self,
        addresses: Vec<Address>,
        probe: Arc<dyn Probe>,
        mut on_result: F,
    ) -> Vec<ProbeResult>
    where
        F: FnMut(&ProbeResult),
    {
        let permits = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks: JoinSet<ProbeResult> = JoinSet::new();
        let mut pending: HashMap<Id, Address> = HashMap::with_capacity(addresses.len());

        for address in addresses {
            let permits = Arc::clone(&permits);
            let probe = Arc::clone(&probe);
            let task_addr = address.clone();

            let handle = tasks.spawn(async move {
                // Held until the probe returns.
                let _permit = match permits.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => {
                        let err = ProbeError::Other("worker pool semaphore was closed".to_string());
                        return ProbeResult::new(task_addr, ProbeOutcome::Failed(err));
                    }
                };
                probe_one(probe, task_addr).await
            });
            pending.insert(handle.id(), address);
        }

        debug!(
            "Dispatched {} probes across {} workers",
            pending.len(),
            self.concurrency
        );

        let mut results = Vec::with_capacity(pending.len());
        while let Some(joined) = tasks.join_next_with_id().await {
            let result = match joined {
                Ok((id, result)) => {
                    pending.remove(&id);
                    result
                }
                Err(join_err) => {
                    let Some(address) = pending.remove(&join_err.id()) else {
                        // Its address is still pending and is settled below.
                        let id = join_err.id();
                        error!("Task {id} failed with no address attached: {join_err}");
                        continue;
                    };
                    ProbeResult::new(address, ProbeOutcome::Failed(join_error(join_err)))
                }
            };

            on_result(&result);
            results.push(result);
        }

        // Every joined task removes its own entry, so anything left never reported back.
        for (_, address) in pending.drain() {
            let err = ProbeError::Other("task ended without a result".to_string());
            let result = ProbeResult::new(address, ProbeOutcome::Failed(err));
            on_result(&result);
            results.push(result);
        }

        results
    }
}

async fn probe_one(probe: Arc<dyn Probe>, address: Address) -> ProbeResult {
    let target = address.clone();
    let outcome = match task::spawn_blocking(move || probe.probe(&target)).await {
        Ok(Ok(true)) => ProbeOutcome::Reachable,
        Ok(Ok(false)) => ProbeOutcome::Unreachable,
        Ok(Err(e)) => ProbeOutcome::Failed(e),
        Err(join_err) => ProbeOutcome::Failed(join_error(join_err)),
    };

    ProbeResult::new(address, outcome)
}

fn join_error(err: JoinError) -> ProbeError {
    if err.is_panic() {
        ProbeError::Panicked(panic_message(err.into_panic()))
    } else {
        ProbeError::Other("probe task was cancelled".to_string())
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
