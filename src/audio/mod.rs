//! Bridge between the sound preferences and whatever plays the cues.

mod bell;

use log::debug;

use crate::models::SoundKind;
use crate::store::SoundStore;

pub use bell::TerminalBell;

/// Something that can play tagged cues
pub trait AudioSink {
    /// Fire-and-forget one-shot
    fn play(&mut self, kind: SoundKind, volume: f32);

    /// Start the looping background track
    fn play_ambient(&mut self, volume: f32);

    fn pause_ambient(&mut self);

    fn set_global_volume(&mut self, volume: f32);
}

impl<S: AudioSink + ?Sized> AudioSink for Box<S> {
    fn play(&mut self, kind: SoundKind, volume: f32) {
        (**self).play(kind, volume)
    }

    fn play_ambient(&mut self, volume: f32) {
        (**self).play_ambient(volume)
    }

    fn pause_ambient(&mut self) {
        (**self).pause_ambient()
    }

    fn set_global_volume(&mut self, volume: f32) {
        (**self).set_global_volume(volume)
    }
}

/// Plays cues through a sink at the volumes the sound store dictates
pub struct SoundEffects<S> {
    sink: S,
}

impl<S: AudioSink> SoundEffects<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    #[cfg(test)]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Play a one-shot at effects × master. Muted means silent.
    pub fn play(&mut self, prefs: &SoundStore, kind: SoundKind) {
        if prefs.is_muted() {
            debug!("muted, skipping {}", kind.tag());
            return;
        }
        self.sink.play(kind, prefs.effects_volume() * prefs.master_volume());
    }

    /// Start or pause the ambient loop and record the new state
    pub fn toggle_ambient(&mut self, prefs: &mut SoundStore) {
        if prefs.ambient_playing() {
            self.sink.pause_ambient();
            prefs.set_ambient_playing(false);
        } else {
            self.sink.play_ambient(prefs.ambient_volume() * prefs.master_volume());
            prefs.set_ambient_playing(true);
        }
    }

    /// Re-apply ambient × master to a loop that is already playing
    pub fn sync_ambient(&mut self, prefs: &SoundStore) {
        if prefs.ambient_playing() {
            self.sink.play_ambient(prefs.ambient_volume() * prefs.master_volume());
        }
    }

    /// Push the effective global volume to the sink
    pub fn sync_global(&mut self, prefs: &SoundStore) {
        let volume = if prefs.is_muted() {
            0.0
        } else {
            prefs.master_volume()
        };
        self.sink.set_global_volume(volume);
    }
}
