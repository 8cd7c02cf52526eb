//! HTTP client settings and retry policy.
//!
//! Both the asynchronous and the blocking client build their transport from a
//! [`ClientConfig`] and consult the same [`RetryPolicy`] between attempts.

use std::time::Duration;

/// Public base URL of the Fortnite-API.com service.
pub const DEFAULT_BASE_URL: &str = "https://fortnite-api.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT: u64 = 30;

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

/// Seconds an idle pooled connection is kept open.
pub const DEFAULT_POOL_IDLE_TIMEOUT: u64 = 90;

/// Idle connections kept per host.
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default maximum number of retries after the first attempt (five attempts in total).
pub const DEFAULT_MAX_RETRIES: u32 = 4;

/// Backoff before the first retry of a failing request, in milliseconds.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

/// Ceiling of the exponential backoff, in milliseconds.
pub const DEFAULT_RETRY_MAX_DELAY_MS: u64 = 8000;

/// Longest the clients will wait for a rate limit window to reset, in seconds.
pub const DEFAULT_MAX_RATE_LIMIT_WAIT_SECS: u64 = 60;

/// When and how often a request is sent again.
///
/// Server errors (500, 502, 504) back off exponentially. Rate limited responses
/// wait until the advertised reset instant, capped at `max_rate_limit_wait`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt.
    pub max_retries: u32,

    /// Backoff before the first retry of a server error.
    pub initial_delay: Duration,

    /// Backoff ceiling.
    pub max_delay: Duration,

    /// Factor applied to the backoff after every failed attempt.
    pub backoff_multiplier: u32,

    /// Upper bound for a single rate limit wait.
    pub max_rate_limit_wait: Duration,
}

impl RetryPolicy {
    /// Five attempts, one second initial backoff doubling up to eight seconds.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            max_delay: Duration::from_millis(DEFAULT_RETRY_MAX_DELAY_MS),
            backoff_multiplier: 2,
            max_rate_limit_wait: Duration::from_secs(DEFAULT_MAX_RATE_LIMIT_WAIT_SECS),
        }
    }

    /// Every request is sent exactly once.
    #[must_use]
    pub const fn no_retry() -> Self {
        Self {
            max_retries: 0,
            initial_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            backoff_multiplier: 1,
            max_rate_limit_wait: Duration::ZERO,
        }
    }

    /// Retries allowed after the first attempt.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Backoff before the first retry.
    #[must_use]
    pub const fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Backoff ceiling.
    #[must_use]
    pub const fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Growth factor of the backoff.
    #[must_use]
    pub const fn with_backoff_multiplier(mut self, multiplier: u32) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Longest single wait for a rate limit reset.
    #[must_use]
    pub const fn with_max_rate_limit_wait(mut self, wait: Duration) -> Self {
        self.max_rate_limit_wait = wait;
        self
    }

    /// Backoff after the `attempt`-th failed attempt (1-based).
    ///
    /// `initial_delay * backoff_multiplier^(attempt - 1)`, never above `max_delay`.
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let Some(exponent) = attempt.checked_sub(1) else {
            return Duration::ZERO;
        };

        let factor = self.backoff_multiplier.saturating_pow(exponent);
        self.initial_delay.saturating_mul(factor).min(self.max_delay)
    }

    /// Clamp a server-advertised rate limit wait to the configured maximum.
    #[must_use]
    pub fn rate_limit_wait(&self, requested: Duration) -> Duration {
        requested.min(self.max_rate_limit_wait)
    }

    /// Total number of attempts a request may make.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// True if a request may be sent more than once.
    #[must_use]
    pub const fn has_retries(&self) -> bool {
        self.max_retries > 0
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// Transport settings shared by both clients.
///
/// Ignored when a client is given a caller-owned `reqwest` client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request timeout.
    pub timeout: Duration,

    /// TCP and TLS connect timeout.
    pub connect_timeout: Duration,

    /// Retry behavior of failing requests.
    pub retry_policy: RetryPolicy,

    /// How long an idle pooled connection stays open.
    pub pool_idle_timeout: Duration,

    /// Idle connections kept per host.
    pub pool_max_idle_per_host: usize,

    /// Ask for gzip-compressed responses.
    pub enable_compression: bool,
}

impl ClientConfig {
    /// Defaults tuned for the public service.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT),
            retry_policy: RetryPolicy::new(),
            pool_idle_timeout: Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            enable_compression: true,
        }
    }

    /// Whole-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Replace the retry policy.
    #[must_use]
    pub const fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Shorthand for [`RetryPolicy::no_retry`].
    #[must_use]
    pub const fn without_retries(self) -> Self {
        self.with_retry_policy(RetryPolicy::no_retry())
    }

    /// Idle timeout of pooled connections.
    #[must_use]
    pub const fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Idle connections kept per host.
    #[must_use]
    pub const fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Toggle gzip.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_allows_five_attempts() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 5);
        assert!(policy.has_retries());
        assert_eq!(policy.initial_delay, Duration::from_secs(1));
        assert_eq!(policy.max_delay, Duration::from_secs(8));
        assert_eq!(policy.max_rate_limit_wait, Duration::from_secs(60));
    }

    #[test]
    fn no_retry_sends_once_and_never_waits() {
        let policy = RetryPolicy::no_retry();
        assert_eq!(policy.max_attempts(), 1);
        assert!(!policy.has_retries());
        assert_eq!(policy.delay_for_attempt(1), Duration::ZERO);
        assert_eq!(policy.rate_limit_wait(Duration::from_secs(30)), Duration::ZERO);
    }

    #[test]
    fn backoff_doubles_until_ceiling() {
        let policy = RetryPolicy::new();
        let delays: Vec<u64> = (0..=6)
            .map(|attempt| policy.delay_for_attempt(attempt).as_millis() as u64)
            .collect();
        assert_eq!(delays, vec![0, 1000, 2000, 4000, 8000, 8000, 8000]);
        assert_eq!(policy.delay_for_attempt(u32::MAX), Duration::from_secs(8));
    }

    #[test]
    fn custom_backoff() {
        let policy = RetryPolicy::new()
            .with_max_retries(2)
            .with_initial_delay(Duration::from_millis(50))
            .with_max_delay(Duration::from_millis(400))
            .with_backoff_multiplier(3);

        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.delay_for_attempt(2), Duration::from_millis(150));
        assert_eq!(policy.delay_for_attempt(3), Duration::from_millis(400));
    }

    #[test]
    fn rate_limit_wait_is_capped() {
        let policy = RetryPolicy::new().with_max_rate_limit_wait(Duration::from_secs(2));
        assert_eq!(
            policy.rate_limit_wait(Duration::from_millis(500)),
            Duration::from_millis(500)
        );
        assert_eq!(
            policy.rate_limit_wait(Duration::from_secs(90)),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn transport_settings() {
        let defaults = ClientConfig::default();
        assert_eq!(defaults.timeout, Duration::from_secs(30));
        assert_eq!(defaults.retry_policy, RetryPolicy::new());
        assert!(defaults.enable_compression);

        let tuned = ClientConfig::new()
            .with_timeout(Duration::from_secs(5))
            .with_connect_timeout(Duration::from_secs(2))
            .with_pool_idle_timeout(Duration::from_secs(15))
            .with_pool_max_idle(2)
            .with_compression(false)
            .without_retries();

        assert_eq!(tuned.timeout, Duration::from_secs(5));
        assert_eq!(tuned.connect_timeout, Duration::from_secs(2));
        assert_eq!(tuned.pool_idle_timeout, Duration::from_secs(15));
        assert_eq!(tuned.pool_max_idle_per_host, 2);
        assert!(!tuned.enable_compression);
        assert_eq!(tuned.retry_policy, RetryPolicy::no_retry());
    }
}
