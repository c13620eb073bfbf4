use std::time::{Duration, Instant};

/// Scroll handlers run at most once per frame interval.
pub const SCROLL_LIMIT: Duration = Duration::from_millis(16);
/// Resize handlers run at most four times a second.
pub const RESIZE_LIMIT: Duration = Duration::from_millis(250);

/// Leading-edge throttle: the first call in a window runs, the rest of the
/// window is dropped.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    last_run: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            last_run: None,
        }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn ready(&mut self) -> bool {
        self.ready_at(Instant::now())
    }

    pub fn ready_at(&mut self, now: Instant) -> bool {
        match self.last_run {
            Some(last) if now.saturating_duration_since(last) < self.limit => false,
            _ => {
                self.last_run = Some(now);
                true
            }
        }
    }
}
