//! Fixed-interval retry for upstream calls.
//!
//! The policy is deliberately plain: a bounded number of attempts with a
//! constant wait between them, no exponential growth, no jitter. The runner
//! treats every failure as transient and returns the first success or the
//! last error unchanged.

use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Retry configuration: total attempts (first try included) and the fixed
/// wait between them
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            // A policy that never attempts anything is useless
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// Single attempt, no waiting
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            backoff: Duration::ZERO,
        }
    }
}

/// Run `operation` under `policy`. The operation receives the 1-based
/// attempt number for logging. Failures before the budget is spent wait the
/// fixed backoff and try again; the final failure comes back untouched so
/// the caller keeps full error detail.
pub async fn run_with_retry<T, E, F, Fut>(policy: RetryPolicy, mut operation: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 1;
    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= policy.max_attempts {
                    return Err(err);
                }
                debug!(
                    "Attempt {}/{} failed, retrying in {:?}",
                    attempt, policy.max_attempts, policy.backoff
                );
                tokio::time::sleep(policy.backoff).await;
                attempt += 1;
            }
        }
    }
}
