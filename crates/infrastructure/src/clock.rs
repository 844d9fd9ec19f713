//! System clock adapter

use application::ports::ClockPort;
use chrono::{DateTime, Utc};

/// `ClockPort` reading the host's wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_monotonic_enough() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn usable_as_trait_object() {
        let clock: &dyn ClockPort = &SystemClock;
        assert!(clock.now().timestamp() > 0);
    }
}
