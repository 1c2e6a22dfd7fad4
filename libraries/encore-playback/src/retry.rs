//! Exponential backoff for flaky collaborator calls

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// How often and how patiently to retry an async operation
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first (minimum 1)
    pub max_attempts: u32,

    /// Delay before the second attempt
    pub initial_delay: Duration,

    /// Factor applied to the delay after every failed attempt
    pub multiplier: f32,

    /// Upper bound for a single delay
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1000),
            multiplier: 2.0,
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Run exactly once
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Policy with `max_attempts` attempts and the default backoff
    pub fn with_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    /// Delay to wait after the given (1-based) failed attempt
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let factor = self.multiplier.max(1.0).powi(attempt.saturating_sub(1) as i32);
        let delay = self.initial_delay.mul_f32(factor);
        delay.min(self.max_delay)
    }

    /// Run `op` until it succeeds or the attempts are used up
    ///
    /// Each failure is logged. The last error is returned unchanged.
    pub async fn run<T, E, F, Fut>(&self, what: &str, op: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.run_if(what, op, |_| true).await
    }

    /// Like [`run`](Self::run), but only errors accepted by `retryable` are
    /// retried. Any other error is returned after the attempt that raised it.
    pub async fn run_if<T, E, F, Fut, P>(&self, what: &str, mut op: F, retryable: P) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
        P: Fn(&E) -> bool,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if !retryable(&e) => {
                    warn!("{} failed, not retrying: {}", what, e);
                    return Err(e);
                }
                Err(e) if attempt >= max_attempts => {
                    warn!("{} failed after {} attempt(s): {}", what, attempt, e);
                    return Err(e);
                }
                Err(e) => {
                    let delay = self.delay_after(attempt);
                    warn!(
                        "{} failed (attempt {}/{}), retrying in {:?}: {}",
                        what, attempt, max_attempts, delay, e
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
