use super::RandomEventKind;

/// Tag for every cue the audio layer knows how to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    Ambient,
    Thunder,
    Click,
    Hover,
    Complete,
    Error,
    Notification,
    Alert,
    Jumpscare,
    Whisper,
    Footsteps,
    Heartbeat,
}

impl SoundKind {
    pub fn tag(&self) -> &'static str {
        match self {
            SoundKind::Ambient => "ambient",
            SoundKind::Thunder => "thunder",
            SoundKind::Click => "click",
            SoundKind::Hover => "hover",
            SoundKind::Complete => "complete",
            SoundKind::Error => "error",
            SoundKind::Notification => "notification",
            SoundKind::Alert => "alert",
            SoundKind::Jumpscare => "jumpscare",
            SoundKind::Whisper => "whisper",
            SoundKind::Footsteps => "footsteps",
            SoundKind::Heartbeat => "heartbeat",
        }
    }

    /// Cues loud enough to ring the terminal bell
    pub fn is_loud(&self) -> bool {
        matches!(self, SoundKind::Jumpscare | SoundKind::Thunder)
    }

    /// The cue that accompanies a random event, if any
    pub fn for_event(kind: RandomEventKind) -> Option<Self> {
        match kind {
            RandomEventKind::Whisper => Some(SoundKind::Whisper),
            RandomEventKind::Footsteps => Some(SoundKind::Footsteps),
            RandomEventKind::Flicker => Some(SoundKind::Thunder),
            RandomEventKind::ShadowPass | RandomEventKind::TextScramble => None,
        }
    }
}
