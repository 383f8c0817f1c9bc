use std::time::Duration;

/// Time allowed for a single TCP handshake.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Upper bound on probe tasks running at the same time.
pub const DEFAULT_CONCURRENCY: usize = 512;

#[derive(Debug, Clone)]
pub struct Config {
    /// How long a probe waits for the handshake before giving up.
    pub timeout: Duration,
    /// Maximum number of in-flight probe tasks. Clamped to at least one.
    pub concurrency: usize,
    /// 0 shows everything, 1 hides the spinner and headers.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            concurrency: DEFAULT_CONCURRENCY,
            quiet: 0,
        }
    }
}

impl Config {
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
