//! Synthetic progress reporting for an in-flight recognition.
//!
//! The OCR engine gives no real progress signal, so the caller surfaces a
//! time-based heartbeat instead. Estimates saturate below 100% until the
//! real result arrives; they carry no correctness guarantee and must never
//! be read as a measure of work done.

use std::time::{Duration, Instant};

pub const HEARTBEAT_INTERVAL: Duration = Duration::from_millis(300);
pub const HEARTBEAT_STEP: u8 = 15;
/// Estimates never pass this; only completion reaches 100.
pub const HEARTBEAT_CEILING: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Synthetic in-progress guess, always below 100.
    Estimate(u8),
    /// The real result arrived.
    Completed,
}

impl ProgressEvent {
    pub fn percent(self) -> u8 {
        match self {
            ProgressEvent::Estimate(p) => p,
            ProgressEvent::Completed => 100,
        }
    }
}

/// Wall-clock heartbeat started alongside a recognition call.
#[derive(Debug)]
pub struct ProgressHeartbeat {
    started: Instant,
}

impl ProgressHeartbeat {
    pub fn start() -> Self {
        ProgressHeartbeat {
            started: Instant::now(),
        }
    }

    pub fn estimate(&self) -> ProgressEvent {
        Self::estimate_at(self.started.elapsed())
    }

    /// Estimate after a given elapsed time: one step per interval, capped
    /// at the ceiling.
    pub fn estimate_at(elapsed: Duration) -> ProgressEvent {
        let ticks = (elapsed.as_millis() / HEARTBEAT_INTERVAL.as_millis()) as u64;
        let percent = ticks
            .saturating_mul(HEARTBEAT_STEP as u64)
            .min(HEARTBEAT_CEILING as u64) as u8;
        ProgressEvent::Estimate(percent)
    }

    /// Consume the heartbeat once the real result is in hand.
    pub fn complete(self) -> ProgressEvent {
        ProgressEvent::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_starts_at_zero() {
        assert_eq!(
            ProgressHeartbeat::estimate_at(Duration::ZERO),
            ProgressEvent::Estimate(0)
        );
        assert_eq!(
            ProgressHeartbeat::estimate_at(Duration::from_millis(299)),
            ProgressEvent::Estimate(0)
        );
    }

    #[test]
    fn test_estimate_steps_per_interval() {
        assert_eq!(
            ProgressHeartbeat::estimate_at(Duration::from_millis(300)),
            ProgressEvent::Estimate(15)
        );
        assert_eq!(
            ProgressHeartbeat::estimate_at(Duration::from_millis(1000)),
            ProgressEvent::Estimate(45)
        );
    }

    #[test]
    fn test_estimate_saturates_below_completion() {
        let long = ProgressHeartbeat::estimate_at(Duration::from_secs(3600));
        assert_eq!(long, ProgressEvent::Estimate(HEARTBEAT_CEILING));
        assert!(long.percent() < 100);
    }

    #[test]
    fn test_completion_snaps_to_full() {
        let heartbeat = ProgressHeartbeat::start();
        assert_eq!(heartbeat.complete().percent(), 100);
    }
}
