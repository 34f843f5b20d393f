// src/session/cache.rs

use crate::common::timing;

/// Last verified reading of one sensor family plus the time its refresh window opened.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct CachedReading<R> {
    /// Uptime (ms) of the last refresh attempt. `None` until the first one.
    last_update_ms: Option<u64>,
    reading: R,
}

impl<R: Copy + Default> CachedReading<R> {
    pub(crate) fn new() -> Self {
        CachedReading {
            last_update_ms: None,
            reading: R::default(),
        }
    }

    /// Decides whether a bus refresh is due at `now_ms` and, if so, claims the
    /// window by stamping `now_ms` before any bus traffic happens.
    ///
    /// A refresh that later fails keeps the stamp, so the next attempt waits
    /// out the full staleness threshold.
    pub(crate) fn claim_refresh(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_update_ms {
            let elapsed = now_ms.saturating_sub(last);
            if u128::from(elapsed) < timing::STALENESS_THRESHOLD.as_millis() {
                return false;
            }
        }
        self.last_update_ms = Some(now_ms);
        true
    }

    pub(crate) fn store(&mut self, reading: R) {
        self.reading = reading;
    }

    pub(crate) fn reading(&self) -> R {
        self.reading
    }

    pub(crate) fn last_update_ms(&self) -> Option<u64> {
        self.last_update_ms
    }
}
