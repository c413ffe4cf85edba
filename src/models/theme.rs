use crate::config::{ACTIVE_THRESHOLD, HYPERACTIVE_THRESHOLD};

/// Time-of-day bucket derived from the local hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeOfDay {
    #[default]
    Day,
    Evening,
    /// Midnight to 6am
    Witching,
}

impl TimeOfDay {
    /// Bucket a local hour (0-23). No hysteresis.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=17 => TimeOfDay::Day,
            0..=5 => TimeOfDay::Witching,
            _ => TimeOfDay::Evening,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Day => "Day",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Witching => "Witching Hour",
        }
    }
}

/// Tier derived from the interaction counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord)]
pub enum ActivityLevel {
    #[default]
    Idle,
    Active,
    Hyperactive,
}

impl ActivityLevel {
    pub fn from_interactions(count: u64) -> Self {
        if count > HYPERACTIVE_THRESHOLD {
            ActivityLevel::Hyperactive
        } else if count > ACTIVE_THRESHOLD {
            ActivityLevel::Active
        } else {
            ActivityLevel::Idle
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Idle => "idle",
            ActivityLevel::Active => "active",
            ActivityLevel::Hyperactive => "hyperactive",
        }
    }
}

/// Transient cosmetic event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomEventKind {
    Flicker,
    ShadowPass,
    TextScramble,
    Footsteps,
    Whisper,
}

impl RandomEventKind {
    pub const ALL: [RandomEventKind; 5] = [
        RandomEventKind::Flicker,
        RandomEventKind::ShadowPass,
        RandomEventKind::TextScramble,
        RandomEventKind::Footsteps,
        RandomEventKind::Whisper,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            RandomEventKind::Flicker => "flicker",
            RandomEventKind::ShadowPass => "shadow-pass",
            RandomEventKind::TextScramble => "text-scramble",
            RandomEventKind::Footsteps => "footsteps",
            RandomEventKind::Whisper => "whisper",
        }
    }
}
