//! Low satellite count hysteresis

use crate::core::Timestamp;

/// Tracks an ongoing run of ticks where only one or two satellites (fewer
/// than the configured minimum) are used in the fix.
///
/// A count of zero means the receiver reported no status at all and leaves
/// the episode untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowSatelliteEpisode {
    since: Option<Timestamp>,
}

impl LowSatelliteEpisode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the latest used-in-fix count into the episode
    pub fn observe(&mut self, used_in_fix: u32, min_valid: u32, now: Timestamp) {
        if used_in_fix >= min_valid {
            self.since = None;
        } else if used_in_fix > 0 && self.since.is_none() {
            self.since = Some(now);
        }
    }

    /// Start of the ongoing episode, if any
    pub fn since(&self) -> Option<Timestamp> {
        self.since
    }

    /// True once the episode has lasted longer than `timeout_ms`
    pub fn exceeded(&self, now: Timestamp, timeout_ms: u64) -> bool {
        self.since
            .map_or(false, |since| now.millis_since(since) > timeout_ms)
    }
}
