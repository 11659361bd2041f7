//! Wall-clock access for timestamped messages.
//!
//! The webhook probe stamps its message with the time it was sent. Going
//! through [`Clock`] keeps that stamp reproducible in tests.

use std::time::{Duration, SystemTime};

/// Source of the current wall-clock time.
///
/// # Example
///
/// ```
/// use release_notifier::time::{Clock, SystemClock};
///
/// let now = SystemClock.now();
/// assert!(now >= std::time::SystemTime::UNIX_EPOCH);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// Clock backed by [`SystemTime::now()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(SystemTime);

impl FixedClock {
    /// Freezes the clock `secs` seconds after the Unix epoch.
    #[must_use]
    pub fn from_unix_secs(secs: u64) -> Self {
        Self(
            SystemTime::UNIX_EPOCH
                .checked_add(Duration::from_secs(secs))
                .unwrap_or(SystemTime::UNIX_EPOCH),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_returns_current_time() {
        let before = SystemTime::now();
        let result = SystemClock.now();
        let after = SystemTime::now();

        assert!(result >= before);
        assert!(result <= after);
    }

    #[test]
    fn clocks_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SystemClock>();
        assert_send_sync::<FixedClock>();
    }

    #[test]
    fn fixed_clock_never_moves() {
        let clock = FixedClock::from_unix_secs(1_700_000_000);
        let expected = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);

        assert_eq!(clock.now(), expected);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn fixed_clock_at_epoch() {
        assert_eq!(FixedClock::from_unix_secs(0).now(), SystemTime::UNIX_EPOCH);
    }
}
