use chrono::{DateTime, Local, Timelike};
use std::time::Instant;

/// Trait for abstracting time operations, enabling testability
pub trait Clock: Send + Sync {
    /// Get the current local datetime
    fn now_datetime(&self) -> DateTime<Local>;

    /// Get a monotonic instant for timer deadlines
    fn instant(&self) -> Instant;

    /// Get the current local hour (0-23)
    fn hour(&self) -> u32 {
        self.now_datetime().hour()
    }
}

/// System clock implementation using real time
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_datetime(&self) -> DateTime<Local> {
        Local::now()
    }

    fn instant(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
pub use manual::ManualClock;

#[cfg(test)]
mod manual {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Clock that only moves when told to. Wall and monotonic time advance together.
    pub struct ManualClock {
        base_instant: Instant,
        base_datetime: DateTime<Local>,
        offset: Mutex<Duration>,
    }

    impl ManualClock {
        pub fn at(base_datetime: DateTime<Local>) -> Self {
            Self {
                base_instant: Instant::now(),
                base_datetime,
                offset: Mutex::new(Duration::ZERO),
            }
        }

        /// A clock starting today at the given local hour
        pub fn at_hour(hour: u32) -> Self {
            let datetime = Local::now()
                .with_hour(hour)
                .and_then(|dt| dt.with_minute(0))
                .and_then(|dt| dt.with_second(0))
                .unwrap();
            Self::at(datetime)
        }

        pub fn advance(&self, by: Duration) {
            *self.offset.lock().unwrap() += by;
        }

        fn offset(&self) -> Duration {
            *self.offset.lock().unwrap()
        }
    }

    impl Clock for ManualClock {
        fn now_datetime(&self) -> DateTime<Local> {
            self.base_datetime + chrono::Duration::from_std(self.offset()).unwrap()
        }

        fn instant(&self) -> Instant {
            self.base_instant + self.offset()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_system_clock_now_datetime() {
        let clock = SystemClock;
        let dt = clock.now_datetime();
        // Should be a reasonable year
        assert!(dt.format("%Y").to_string().parse::<i32>().unwrap() >= 2024);
        assert!(clock.hour() < 24);
    }

    #[test]
    fn test_system_clock_instant_elapsed() {
        let clock = SystemClock;
        let start = clock.instant();
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = start.elapsed();
        assert!(elapsed.as_millis() >= 10);
    }

    #[test]
    fn test_manual_clock_advances_both_timelines() {
        let clock = ManualClock::at_hour(23);
        let start = clock.instant();
        assert_eq!(clock.hour(), 23);

        clock.advance(Duration::from_secs(3600));
        assert_eq!(clock.instant() - start, Duration::from_secs(3600));
        assert_eq!(clock.hour(), 0);
    }
}
