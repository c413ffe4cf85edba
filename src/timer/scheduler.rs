use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;
use std::time::{Duration, Instant};

use super::TimerManager;
use crate::clock::Clock;
use crate::config::{
    IDLE_CHECK_INTERVAL, JUMP_SCARE_DURATION, RANDOM_EVENT_DURATION, RANDOM_EVENT_MAX_DELAY,
    RANDOM_EVENT_MIN_DELAY, TIME_OF_DAY_INTERVAL,
};
use crate::models::RandomEventKind;
use crate::store::ThemeStore;

/// Timers driving the theme store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeTimer {
    /// Recompute the time-of-day bucket
    TimeOfDay,
    /// Re-evaluate idle status
    IdleCheck,
    /// Fire the next random event
    RandomEvent,
    RandomEventClear,
    JumpScareClear,
}

/// Periodic and randomized updates of the theme store.
///
/// Three recurring timers run while mounted: the time-of-day tick, the idle
/// poll and the self-rescheduling random event. Transient effects get one
/// clear timer each, re-armed on every trigger.
#[derive(Debug)]
pub struct EventScheduler {
    timers: TimerManager<ThemeTimer>,
    rng: StdRng,
    mounted: bool,
}

impl EventScheduler {
    pub fn new(rng: StdRng) -> Self {
        Self {
            timers: TimerManager::new(),
            rng,
            mounted: false,
        }
    }

    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(rand::SeedableRng::seed_from_u64(seed))
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn timers(&self) -> &TimerManager<ThemeTimer> {
        &self.timers
    }

    /// Start the recurring timers and refresh the time of day right away
    pub fn mount(&mut self, theme: &mut ThemeStore, now: Instant, hour: u32) {
        theme.update_time_of_day(hour);
        self.timers.schedule(ThemeTimer::TimeOfDay, now, TIME_OF_DAY_INTERVAL);
        self.timers.schedule(ThemeTimer::IdleCheck, now, IDLE_CHECK_INTERVAL);
        self.schedule_next_random_event(now);
        self.mounted = true;
        info!("scheduler mounted");
    }

    /// Cancel every timer, recurring and transient alike
    pub fn unmount(&mut self) {
        self.timers.cancel_all();
        self.mounted = false;
        info!("scheduler unmounted");
    }

    /// Fire every timer that has come due. Returns the fired timers in order.
    /// An unmounted scheduler fires nothing.
    pub fn tick(&mut self, theme: &mut ThemeStore, clock: &dyn Clock) -> Vec<ThemeTimer> {
        if !self.mounted {
            return Vec::new();
        }
        let now = clock.instant();
        let fired = self.timers.take_due(now);

        for timer in &fired {
            match timer {
                ThemeTimer::TimeOfDay => {
                    theme.update_time_of_day(clock.hour());
                    self.timers.schedule(ThemeTimer::TimeOfDay, now, TIME_OF_DAY_INTERVAL);
                }
                ThemeTimer::IdleCheck => {
                    theme.check_idle(now);
                    self.timers.schedule(ThemeTimer::IdleCheck, now, IDLE_CHECK_INTERVAL);
                }
                ThemeTimer::RandomEvent => {
                    self.trigger_random_event(theme, now);
                    self.schedule_next_random_event(now);
                }
                ThemeTimer::RandomEventClear => theme.clear_random_event(),
                ThemeTimer::JumpScareClear => theme.clear_jump_scare(),
            }
        }
        fired
    }

    /// Start a uniformly chosen random event and (re)arm its clear timer
    pub fn trigger_random_event(
        &mut self,
        theme: &mut ThemeStore,
        now: Instant,
    ) -> RandomEventKind {
        let kind = RandomEventKind::ALL[self.rng.gen_range(0..RandomEventKind::ALL.len())];
        theme.start_random_event(kind);
        self.timers.schedule(ThemeTimer::RandomEventClear, now, RANDOM_EVENT_DURATION);
        kind
    }

    /// Count a logo click. Returns true when it set off the jump scare.
    pub fn click_logo(&mut self, theme: &mut ThemeStore, now: Instant) -> bool {
        let scared = theme.increment_logo_click();
        if scared {
            self.timers.schedule(ThemeTimer::JumpScareClear, now, JUMP_SCARE_DURATION);
        }
        scared
    }

    /// Uniform delay in [min, max)
    pub fn next_random_delay(&mut self) -> Duration {
        let min = RANDOM_EVENT_MIN_DELAY.as_millis() as u64;
        let max = RANDOM_EVENT_MAX_DELAY.as_millis() as u64;
        Duration::from_millis(self.rng.gen_range(min..max))
    }

    fn schedule_next_random_event(&mut self, now: Instant) {
        let delay = self.next_random_delay();
        debug!("next random event in {}s", delay.as_secs());
        self.timers.schedule(ThemeTimer::RandomEvent, now, delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::models::{ActivityLevel, TimeOfDay};

    fn setup(hour: u32) -> (EventScheduler, ThemeStore, ManualClock) {
        let clock = ManualClock::at_hour(hour);
        let mut theme = ThemeStore::new(hour, clock.instant());
        let mut scheduler = EventScheduler::with_seed(42);
        scheduler.mount(&mut theme, clock.instant(), clock.hour());
        (scheduler, theme, clock)
    }

    /// Advance in tick-sized steps, as the event loop would
    fn run_for(
        scheduler: &mut EventScheduler,
        theme: &mut ThemeStore,
        clock: &ManualClock,
        total: Duration,
        step: Duration,
    ) -> Vec<ThemeTimer> {
        let mut fired = Vec::new();
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            clock.advance(step);
            elapsed += step;
            fired.extend(scheduler.tick(theme, clock));
        }
        fired
    }

    #[test]
    fn test_mount_arms_three_recurring_timers() {
        let (scheduler, _, _) = setup(12);
        let timers = scheduler.timers();
        assert!(scheduler.is_mounted());
        assert!(timers.is_pending(ThemeTimer::TimeOfDay));
        assert!(timers.is_pending(ThemeTimer::IdleCheck));
        assert!(timers.is_pending(ThemeTimer::RandomEvent));
        assert_eq!(timers.len(), 3);
    }

    #[test]
    fn test_random_delay_in_window() {
        let mut scheduler = EventScheduler::with_seed(7);
        for _ in 0..1000 {
            let delay = scheduler.next_random_delay();
            assert!(delay >= RANDOM_EVENT_MIN_DELAY);
            assert!(delay < RANDOM_EVENT_MAX_DELAY);
        }
    }

    #[test]
    fn test_time_of_day_updates_on_minute_tick() {
        let (mut scheduler, mut theme, clock) = setup(17);
        let start = clock.instant();
        clock.advance(Duration::from_secs(59 * 60));
        // Timer deadline long passed; first tick fires it once
        let fired = scheduler.tick(&mut theme, &clock);
        assert!(fired.contains(&ThemeTimer::TimeOfDay));
        assert_eq!(theme.time_of_day(), TimeOfDay::Day);

        clock.advance(Duration::from_secs(60));
        scheduler.tick(&mut theme, &clock);
        assert_eq!(theme.time_of_day(), TimeOfDay::Evening);
        assert!(clock.instant() > start);
    }

    #[test]
    fn test_idle_poll_returns_to_idle() {
        let (mut scheduler, mut theme, clock) = setup(12);
        for _ in 0..8 {
            theme.record_interaction(clock.instant());
        }
        assert_eq!(theme.activity_level(), ActivityLevel::Active);

        run_for(
            &mut scheduler,
            &mut theme,
            &clock,
            Duration::from_secs(30),
            Duration::from_secs(1),
        );
        assert_eq!(theme.activity_level(), ActivityLevel::Active);

        // Next 10s poll after the 30s window
        run_for(
            &mut scheduler,
            &mut theme,
            &clock,
            Duration::from_secs(10),
            Duration::from_secs(1),
        );
        assert_eq!(theme.activity_level(), ActivityLevel::Idle);
    }

    #[test]
    fn test_random_event_fires_in_window_and_reschedules() {
        let (mut scheduler, mut theme, clock) = setup(12);
        let first = scheduler.timers().deadline(ThemeTimer::RandomEvent).unwrap();
        let gap = first - clock.instant();
        assert!(gap >= RANDOM_EVENT_MIN_DELAY && gap < RANDOM_EVENT_MAX_DELAY);

        clock.advance(gap);
        let fired = scheduler.tick(&mut theme, &clock);
        assert!(fired.contains(&ThemeTimer::RandomEvent));
        assert!(theme.random_event_active());

        let next = scheduler.timers().deadline(ThemeTimer::RandomEvent).unwrap();
        assert!(next - clock.instant() >= RANDOM_EVENT_MIN_DELAY);

        clock.advance(RANDOM_EVENT_DURATION);
        scheduler.tick(&mut theme, &clock);
        assert!(!theme.random_event_active());
    }

    #[test]
    fn test_retriggered_event_is_not_cleared_early() {
        let (mut scheduler, mut theme, clock) = setup(12);
        scheduler.trigger_random_event(&mut theme, clock.instant());

        clock.advance(Duration::from_secs(2));
        let second = scheduler.trigger_random_event(&mut theme, clock.instant());

        // First trigger's 3s mark passes; the newer event survives
        clock.advance(Duration::from_millis(1500));
        scheduler.tick(&mut theme, &clock);
        assert_eq!(theme.random_event(), Some(second));

        clock.advance(Duration::from_millis(1500));
        scheduler.tick(&mut theme, &clock);
        assert!(!theme.random_event_active());
    }

    #[test]
    fn test_jump_scare_clears_after_800ms() {
        let (mut scheduler, mut theme, clock) = setup(12);
        let now = clock.instant();
        assert!(!scheduler.click_logo(&mut theme, now));
        assert!(!scheduler.click_logo(&mut theme, now));
        assert!(scheduler.click_logo(&mut theme, now));
        assert!(theme.jump_scare_active());
        assert_eq!(theme.logo_click_count(), 0);

        clock.advance(Duration::from_millis(799));
        scheduler.tick(&mut theme, &clock);
        assert!(theme.jump_scare_active());

        clock.advance(Duration::from_millis(1));
        scheduler.tick(&mut theme, &clock);
        assert!(!theme.jump_scare_active());
    }

    #[test]
    fn test_retriggered_jump_scare_is_not_cleared_early() {
        let (mut scheduler, mut theme, clock) = setup(12);
        for _ in 0..3 {
            scheduler.click_logo(&mut theme, clock.instant());
        }
        clock.advance(Duration::from_millis(500));
        for _ in 0..3 {
            scheduler.click_logo(&mut theme, clock.instant());
        }

        clock.advance(Duration::from_millis(400));
        scheduler.tick(&mut theme, &clock);
        assert!(theme.jump_scare_active());

        clock.advance(Duration::from_millis(400));
        scheduler.tick(&mut theme, &clock);
        assert!(!theme.jump_scare_active());
    }

    #[test]
    fn test_unmount_cancels_everything() {
        let (mut scheduler, mut theme, clock) = setup(12);
        scheduler.trigger_random_event(&mut theme, clock.instant());
        scheduler.unmount();
        assert!(scheduler.timers().is_empty());

        clock.advance(Duration::from_secs(600));
        assert!(scheduler.tick(&mut theme, &clock).is_empty());
        // Nothing clears the event once torn down
        assert!(theme.random_event_active());
    }
}
