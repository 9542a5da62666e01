//! Concurrent processing of probes.
//!
//! Probes run as tokio tasks gated by a semaphore and report back through a
//! single channel. The receiver is the only place results are consumed, so
//! aggregate state needs no locking.

use crate::error::ProbeError;
use crate::protocols::Transport;
use crate::types::{ProbeResult, ProbeTarget};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};

/// Fans probes out to a bounded set of concurrent tasks.
#[derive(Debug, Clone)]
pub struct ConcurrentProcessor {
    max_concurrency: usize,
}

impl ConcurrentProcessor {
    /// Create a new concurrent processor. A ceiling of 0 is raised to 1.
    pub fn new(max_concurrency: usize) -> Self {
        Self {
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Maximum number of probes in flight at once.
    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    /// Probe every target and yield results in completion order.
    ///
    /// Each target produces exactly one `ProbeResult`, including when the
    /// transport panics. The receiver closes after the last result.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch<T>(
        &self,
        transport: Arc<T>,
        targets: Vec<ProbeTarget>,
    ) -> mpsc::Receiver<ProbeResult>
    where
        T: Transport + ?Sized + 'static,
    {
        // The semaphore bounds requests in flight, not live tasks: a permit is
        // released before the result is sent, so with a slow receiver finished
        // tasks can wait on the channel while new probes start.
        let (tx, rx) = mpsc::channel(self.max_concurrency);
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));

        tokio::spawn(async move {
            for target in targets {
                // The semaphore is never closed, so acquire only fails if that changes.
                let permit = match semaphore.clone().acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => break,
                };
                let transport = Arc::clone(&transport);
                let tx = tx.clone();

                tokio::spawn(async move {
                    tracing::debug!(url = %target.url, "dispatching probe");
                    let outcome = probe(transport.as_ref(), &target.url).await;
                    drop(permit);

                    let result = ProbeResult::new(target, outcome);
                    if tx.send(result).await.is_err() {
                        tracing::debug!("result receiver dropped, discarding probe result");
                    }
                });
            }
        });

        rx
    }
}

/// Run one probe, converting a panic into an error outcome.
async fn probe<T>(transport: &T, url: &str) -> Result<u16, ProbeError>
where
    T: Transport + ?Sized,
{
    match AssertUnwindSafe(transport.get_status(url))
        .catch_unwind()
        .await
    {
        Ok(outcome) => outcome,
        Err(panic) => {
            let message = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "probe panicked".to_string());
            tracing::warn!(%url, %message, "probe panicked");
            Err(ProbeError::internal(format!("probe panicked: {}", message)))
        }
    }
}
