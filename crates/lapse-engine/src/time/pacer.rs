use std::time::{Duration, Instant};

/// Fixed-cadence pacer for a repeating loop.
///
/// `TickPacer` is owned per loop so concurrent loops do not share timing
/// state. The caller does its per-iteration work, asks [`pending`] how much
/// of the interval is left, blocks for that long (interruptibly, in the
/// caller's own way), and then [`mark`]s the new baseline.
///
/// Work that overruns the interval yields no pending wait — the next
/// iteration starts immediately, and overruns are not compensated by
/// shortening later intervals.
///
/// [`pending`]: TickPacer::pending
/// [`mark`]: TickPacer::mark
#[derive(Debug, Clone)]
pub struct TickPacer {
    interval: Duration,
    last: Instant,
}

impl TickPacer {
    /// Creates a pacer whose baseline starts at `now`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::now(),
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Remaining wait in the current interval as of `now`, if any.
    pub fn pending(&self, now: Instant) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(self.last);
        if elapsed < self.interval {
            Some(self.interval - elapsed)
        } else {
            None
        }
    }

    /// Records `now` as the new interval baseline.
    ///
    /// Called after the wait completes, so slow work inside the interval is
    /// absorbed rather than accumulated.
    #[inline]
    pub fn mark(&mut self, now: Instant) {
        self.last = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_the_interval_remainder() {
        let mut pacer = TickPacer::new(Duration::from_millis(1000));
        let base = Instant::now();
        pacer.mark(base);

        let wait = pacer.pending(base + Duration::from_millis(300)).unwrap();
        assert_eq!(wait, Duration::from_millis(700));
    }

    #[test]
    fn pending_is_none_after_overrun() {
        let mut pacer = TickPacer::new(Duration::from_millis(1000));
        let base = Instant::now();
        pacer.mark(base);

        assert!(pacer.pending(base + Duration::from_millis(1000)).is_none());
        assert!(pacer.pending(base + Duration::from_millis(2500)).is_none());
    }

    #[test]
    fn mark_moves_the_baseline() {
        let mut pacer = TickPacer::new(Duration::from_millis(1000));
        let base = Instant::now();
        pacer.mark(base);
        pacer.mark(base + Duration::from_millis(900));

        let wait = pacer.pending(base + Duration::from_millis(1000)).unwrap();
        assert_eq!(wait, Duration::from_millis(900));
    }
}
