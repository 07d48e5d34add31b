use std::collections::hash_map::RandomState;
use std::future::Future;
use std::hash::BuildHasher;
use std::time::{Duration, SystemTime};
use tracing::{debug, warn};

/// Exponential backoff for startup connections.
///
/// Attempt `n` (0-based) waits `initial_delay * multiplier^n`, capped at
/// `max_delay`, then scaled into 50-100% when jitter is on.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub multiplier: u32,
    pub jitter: bool,
}

impl Default for RetryConfig {
    /// 5 retries, 200ms doubling up to 5s, with jitter.
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
            multiplier: 2,
            jitter: true,
        }
    }
}

impl RetryConfig {
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.jitter = false;
        self
    }

    /// Backoff before retry number `attempt + 1`, without jitter.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = self.multiplier.saturating_pow(attempt);
        self.initial_delay
            .checked_mul(factor)
            .map_or(self.max_delay, |delay| delay.min(self.max_delay))
    }

    fn sleep_for(&self, attempt: u32) -> Duration {
        let delay = self.delay_for(attempt);
        if self.jitter { jittered(delay) } else { delay }
    }
}

/// Scales `delay` to a pseudo-random 50-100% of itself.
fn jittered(delay: Duration) -> Duration {
    let percent = 50 + (RandomState::new().hash_one(SystemTime::now()) % 51) as u32;
    delay * percent / 100
}

/// Runs `operation` until it succeeds or `config.max_retries` retries have failed.
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!(retries = attempt, "Operation succeeded after retrying");
                }
                return Ok(value);
            }
            Err(e) if attempt >= config.max_retries => {
                warn!(attempts = attempt + 1, error = %e, "Giving up");
                return Err(e);
            }
            Err(e) => {
                let wait = config.sleep_for(attempt);
                attempt += 1;
                warn!(
                    attempt,
                    max_retries = config.max_retries,
                    error = %e,
                    "Attempt failed, retrying in {:?}",
                    wait
                );
                tokio::time::sleep(wait).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast() -> RetryConfig {
        RetryConfig::default()
            .with_initial_delay(Duration::from_millis(1))
            .without_jitter()
    }

    #[test]
    fn test_delay_doubles_until_cap() {
        let config = RetryConfig::default().without_jitter();

        assert_eq!(config.delay_for(0), Duration::from_millis(200));
        assert_eq!(config.delay_for(1), Duration::from_millis(400));
        assert_eq!(config.delay_for(3), Duration::from_millis(1600));
        assert_eq!(config.delay_for(10), Duration::from_secs(5));
        assert_eq!(config.delay_for(u32::MAX), Duration::from_secs(5));
    }

    #[test]
    fn test_jitter_stays_within_half_and_full() {
        let delay = Duration::from_millis(1000);
        for _ in 0..20 {
            let j = jittered(delay);
            assert!(j >= Duration::from_millis(500));
            assert!(j <= delay);
        }
    }

    #[tokio::test]
    async fn test_succeeds_after_transient_failures() {
        let calls = Arc::new(AtomicU32::new(0));

        let result = retry_with_backoff(
            || {
                let calls = Arc::clone(&calls);
                async move {
                    match calls.fetch_add(1, Ordering::SeqCst) {
                        0 | 1 => Err("connection refused"),
                        _ => Ok("connected"),
                    }
                }
            },
            fast(),
        )
        .await;

        assert_eq!(result, Ok("connected"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let calls = Arc::new(AtomicU32::new(0));

        let result: Result<(), _> = retry_with_backoff(
            || {
                let calls = Arc::clone(&calls);
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err("down")
                }
            },
            fast().with_max_retries(2),
        )
        .await;

        assert_eq!(result, Err("down"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
