use log::{debug, info};
use std::time::Instant;

use super::{SubscriptionId, Subscribers};
use crate::config::{IDLE_TIMEOUT, LOGO_CLICK_THRESHOLD};
use crate::models::{ActivityLevel, RandomEventKind, TimeOfDay};

/// Change notifications from the theme store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeEvent {
    TimeOfDayChanged(TimeOfDay),
    ActivityChanged(ActivityLevel),
    RandomEventStarted(RandomEventKind),
    RandomEventCleared,
    LogoClicked(u32),
    JumpScareStarted,
    JumpScareCleared,
}

/// Time of day, activity tier and the transient cosmetic flags.
///
/// All transitions take their inputs explicitly; the store owns no timers.
#[derive(Debug)]
pub struct ThemeStore {
    time_of_day: TimeOfDay,
    activity_level: ActivityLevel,
    interaction_count: u64,
    last_interaction: Instant,
    random_event: Option<RandomEventKind>,
    logo_click_count: u32,
    jump_scare_active: bool,
    subscribers: Subscribers<ThemeEvent>,
}

impl ThemeStore {
    pub fn new(hour: u32, now: Instant) -> Self {
        Self {
            time_of_day: TimeOfDay::from_hour(hour),
            activity_level: ActivityLevel::Idle,
            interaction_count: 0,
            last_interaction: now,
            random_event: None,
            logo_click_count: 0,
            jump_scare_active: false,
            subscribers: Subscribers::default(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ThemeEvent) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    pub fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    pub fn interaction_count(&self) -> u64 {
        self.interaction_count
    }

    pub fn last_interaction(&self) -> Instant {
        self.last_interaction
    }

    pub fn random_event(&self) -> Option<RandomEventKind> {
        self.random_event
    }

    pub fn random_event_active(&self) -> bool {
        self.random_event.is_some()
    }

    pub fn logo_click_count(&self) -> u32 {
        self.logo_click_count
    }

    pub fn jump_scare_active(&self) -> bool {
        self.jump_scare_active
    }

    pub fn update_time_of_day(&mut self, hour: u32) {
        let next = TimeOfDay::from_hour(hour);
        if next != self.time_of_day {
            info!("time of day: {:?} -> {:?}", self.time_of_day, next);
            self.time_of_day = next;
            self.subscribers.emit(&ThemeEvent::TimeOfDayChanged(next));
        }
    }

    /// Count one interaction and re-derive the activity tier
    pub fn record_interaction(&mut self, now: Instant) {
        self.interaction_count += 1;
        self.last_interaction = now;
        self.set_activity(ActivityLevel::from_interactions(self.interaction_count));
    }

    /// Drop back to idle once the inactivity window has passed.
    ///
    /// The interaction counter is not reset.
    pub fn check_idle(&mut self, now: Instant) {
        if now.saturating_duration_since(self.last_interaction) > IDLE_TIMEOUT {
            self.set_activity(ActivityLevel::Idle);
        }
    }

    pub fn start_random_event(&mut self, kind: RandomEventKind) {
        debug!("random event: {}", kind.tag());
        self.random_event = Some(kind);
        self.subscribers.emit(&ThemeEvent::RandomEventStarted(kind));
    }

    pub fn clear_random_event(&mut self) {
        if self.random_event.take().is_some() {
            self.subscribers.emit(&ThemeEvent::RandomEventCleared);
        }
    }

    /// Count a logo click. Returns true when this click fires the jump scare,
    /// in which case the counter is back at zero.
    pub fn increment_logo_click(&mut self) -> bool {
        self.logo_click_count += 1;
        self.subscribers.emit(&ThemeEvent::LogoClicked(self.logo_click_count));

        if self.logo_click_count >= LOGO_CLICK_THRESHOLD {
            self.trigger_jump_scare();
            self.logo_click_count = 0;
            return true;
        }
        false
    }

    pub fn trigger_jump_scare(&mut self) {
        info!("jump scare");
        self.jump_scare_active = true;
        self.subscribers.emit(&ThemeEvent::JumpScareStarted);
    }

    pub fn clear_jump_scare(&mut self) {
        if std::mem::take(&mut self.jump_scare_active) {
            self.subscribers.emit(&ThemeEvent::JumpScareCleared);
        }
    }

    fn set_activity(&mut self, level: ActivityLevel) {
        if level != self.activity_level {
            debug!("activity: {:?} -> {:?}", self.activity_level, level);
            self.activity_level = level;
            self.subscribers.emit(&ThemeEvent::ActivityChanged(level));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn store() -> (ThemeStore, Instant) {
        let now = Instant::now();
        (ThemeStore::new(12, now), now)
    }

    #[test]
    fn test_six_interactions_is_active() {
        let (mut store, now) = store();
        for i in 0..6 {
            store.record_interaction(now + Duration::from_secs(i));
        }
        assert_eq!(store.activity_level(), ActivityLevel::Active);
    }

    #[test]
    fn test_twenty_one_interactions_is_hyperactive() {
        let (mut store, now) = store();
        for i in 0..20 {
            store.record_interaction(now + Duration::from_secs(i));
        }
        assert_eq!(store.activity_level(), ActivityLevel::Active);
        store.record_interaction(now + Duration::from_secs(20));
        assert_eq!(store.activity_level(), ActivityLevel::Hyperactive);
    }

    #[test]
    fn test_idle_after_gap_regardless_of_count() {
        let (mut store, now) = store();
        for _ in 0..25 {
            store.record_interaction(now);
        }
        assert_eq!(store.activity_level(), ActivityLevel::Hyperactive);

        store.check_idle(now + Duration::from_secs(30));
        assert_eq!(store.activity_level(), ActivityLevel::Hyperactive);

        store.check_idle(now + Duration::from_secs(31));
        assert_eq!(store.activity_level(), ActivityLevel::Idle);
        assert_eq!(store.interaction_count(), 25);
    }

    #[test]
    fn test_time_of_day_flips_on_hour_boundary() {
        let (mut store, _) = store();
        assert_eq!(store.time_of_day(), TimeOfDay::Day);
        store.update_time_of_day(17);
        assert_eq!(store.time_of_day(), TimeOfDay::Day);
        store.update_time_of_day(18);
        assert_eq!(store.time_of_day(), TimeOfDay::Evening);
        store.update_time_of_day(0);
        assert_eq!(store.time_of_day(), TimeOfDay::Witching);
    }

    #[test]
    fn test_third_logo_click_fires_once_and_resets() {
        let (mut store, _) = store();
        assert!(!store.increment_logo_click());
        assert!(!store.increment_logo_click());
        assert!(store.increment_logo_click());
        assert!(store.jump_scare_active());
        assert_eq!(store.logo_click_count(), 0);

        assert!(!store.increment_logo_click());
        assert_eq!(store.logo_click_count(), 1);
    }

    #[test]
    fn test_random_event_set_and_clear() {
        let (mut store, _) = store();
        store.start_random_event(RandomEventKind::Whisper);
        assert_eq!(store.random_event(), Some(RandomEventKind::Whisper));
        assert!(store.random_event_active());
        store.clear_random_event();
        assert!(!store.random_event_active());
    }

    #[test]
    fn test_events_only_on_change() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let (mut store, now) = store();
        let sink = Rc::clone(&events);
        store.subscribe(move |e| sink.borrow_mut().push(*e));

        store.update_time_of_day(13);
        store.clear_jump_scare();
        for _ in 0..7 {
            store.record_interaction(now);
        }
        store.update_time_of_day(3);

        assert_eq!(
            *events.borrow(),
            vec![
                ThemeEvent::ActivityChanged(ActivityLevel::Active),
                ThemeEvent::TimeOfDayChanged(TimeOfDay::Witching),
            ]
        );
    }
}
