//! Trailing-edge debounce for bursts of calls (search keystrokes).

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Quiet period before a search runs.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Only the last caller of a burst proceeds. Work already running is not cancelled.
#[derive(Debug)]
pub struct Debouncer {
    wait: Duration,
    generation: AtomicU64,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            generation: AtomicU64::new(0),
        }
    }

    pub fn for_search() -> Self {
        Self::new(Duration::from_millis(SEARCH_DEBOUNCE_MS))
    }

    /// Waits out the quiet period; true if no newer call arrived in the meantime.
    pub async fn settle(&self) -> bool {
        let mine = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        tokio::time::sleep(self.wait).await;
        self.generation.load(Ordering::Acquire) == mine
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::for_search()
    }
}
