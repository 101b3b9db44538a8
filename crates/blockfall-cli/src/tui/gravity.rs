use std::time::{Duration, Instant};

/// Periodic timer that drives gravity ticks.
///
/// Starting a running clock or stopping a stopped one does nothing, so
/// callers can simply re-assert the state they want after every event.
#[derive(Debug, Clone)]
pub struct GravityClock {
    period: Duration,
    next_due: Option<Instant>,
}

impl GravityClock {
    /// Creates a stopped clock.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Starts the clock; the first tick is due one period after `now`.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// When the next tick is due, if the clock is running.
    pub fn deadline(&self) -> Option<Instant> {
        self.next_due
    }

    /// Returns whether a tick is due at `now`, and schedules the next one.
    ///
    /// Missed periods are not replayed: after a long stall the clock fires
    /// once and continues one period from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        let next = due + self.period;
        self.next_due = Some(if next <= now { now + self.period } else { next });
        true
    }
}
