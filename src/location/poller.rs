use web_time::{Duration, Instant};

/// Fixed-interval clock for the location feed. Driven from the frame loop
/// so polling never blocks rendering.
#[derive(Debug, Clone)]
pub struct LocationPoller {
    interval: Duration,
    last_poll: Option<Instant>,
}

impl LocationPoller {
    /// Poll every `interval_ms` milliseconds.
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            last_poll: None,
        }
    }

    /// Polling interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a poll is due at `now`. The first poll is due one interval
    /// after [`start`](Self::start).
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.last_poll
            .is_some_and(|last| now.duration_since(last) >= self.interval)
    }

    /// Begin the interval at `now`.
    pub fn start(&mut self, now: Instant) {
        self.last_poll = Some(now);
    }

    /// Whether the poller has been started.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.last_poll.is_some()
    }

    /// Returns `true` and restarts the interval when a poll is due.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.last_poll = Some(now);
            true
        } else {
            false
        }
    }
}
