use std::time::{Duration, Instant};

/// Default input poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Countdown step
pub const TIMER_PERIOD: Duration = Duration::from_secs(1);

/// Get input poll duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Recurring timer with explicit start/cancel.
///
/// The event loop polls much faster than once a second; `due_ticks` reports
/// how many whole periods have passed since the last call and advances the
/// schedule by exactly that many, so time spent between polls is not lost.
#[derive(Debug, Clone)]
pub struct SecondTicker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Default for SecondTicker {
    fn default() -> Self {
        Self::new(TIMER_PERIOD)
    }
}

impl SecondTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Schedule the first tick one period from `now`. Restarting an active ticker is a no-op.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of periods elapsed up to `now`
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(mut next_due) = self.next_due else {
            return 0;
        };

        let mut ticks = 0;
        while next_due <= now {
            ticks += 1;
            next_due += self.period;
        }
        self.next_due = Some(next_due);
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        assert_eq!(tick_duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_inactive_ticker_never_fires() {
        let mut ticker = SecondTicker::default();
        let now = Instant::now();
        assert!(!ticker.is_active());
        assert_eq!(ticker.due_ticks(now + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_due_ticks_counts_whole_periods() {
        let mut ticker = SecondTicker::default();
        let start = Instant::now();
        ticker.start(start);

        assert_eq!(ticker.due_ticks(start + Duration::from_millis(999)), 0);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(1000)), 1);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(1750)), 0);
        // A slow frame catches up
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(4100)), 3);
    }

    #[test]
    fn test_cancel_and_restart() {
        let mut ticker = SecondTicker::default();
        let start = Instant::now();
        ticker.start(start);
        ticker.cancel();
        assert_eq!(ticker.due_ticks(start + Duration::from_secs(5)), 0);

        let later = start + Duration::from_secs(5);
        ticker.start(later);
        assert_eq!(ticker.due_ticks(later + Duration::from_millis(1500)), 1);
    }

    #[test]
    fn test_start_twice_keeps_schedule() {
        let mut ticker = SecondTicker::default();
        let start = Instant::now();
        ticker.start(start);
        ticker.start(start + Duration::from_millis(900));
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(1000)), 1);
    }
}
