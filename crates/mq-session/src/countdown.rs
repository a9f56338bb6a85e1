//! The per-round countdown.
//!
//! At most one countdown is live per session: `start` unconditionally
//! replaces any running one, and `stop` is idempotent. The countdown does
//! not own a clock; the session's driver calls [`Countdown::tick`] once
//! per second while a round is active.

/// The outcome of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No countdown is running; nothing happened.
    Idle,
    /// The countdown is running with this many seconds left.
    Running(u32),
    /// The countdown just hit zero. Reported exactly once.
    Expired,
}

/// A stoppable second-granularity countdown.
#[derive(Debug, Clone, Default)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    /// A stopped countdown with nothing on the clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the countdown at the given number of seconds.
    ///
    /// Any running countdown is replaced; there is never more than one.
    pub fn start(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.running = seconds > 0;
    }

    /// Stop the countdown. Stopping a stopped countdown is a no-op.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the countdown is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds left on the clock.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Advance the clock by one second.
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            Tick::Expired
        } else {
            Tick::Running(self.remaining)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_expiry() {
        let mut c = Countdown::new();
        c.start(3);
        assert_eq!(c.tick(), Tick::Running(2));
        assert_eq!(c.tick(), Tick::Running(1));
        assert_eq!(c.tick(), Tick::Expired);
        // Expiry is reported once; afterwards the countdown is idle.
        assert_eq!(c.tick(), Tick::Idle);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut c = Countdown::new();
        c.start(10);
        c.stop();
        c.stop();
        assert!(!c.is_running());
        assert_eq!(c.tick(), Tick::Idle);
        assert_eq!(c.remaining(), 10);
    }

    #[test]
    fn start_replaces_running_countdown() {
        let mut c = Countdown::new();
        c.start(5);
        c.tick();
        c.start(30);
        assert_eq!(c.remaining(), 30);
        assert_eq!(c.tick(), Tick::Running(29));
    }

    #[test]
    fn starting_at_zero_stays_idle() {
        let mut c = Countdown::new();
        c.start(0);
        assert!(!c.is_running());
        assert_eq!(c.tick(), Tick::Idle);
    }
}
