use log::debug;

use super::{SubscriptionId, Subscribers};
use crate::validation::clamp_volume;

/// Change notifications from the sound store
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SoundEvent {
    MasterVolume(f32),
    AmbientVolume(f32),
    EffectsVolume(f32),
    Muted(bool),
    AmbientPlaying(bool),
}

/// Audio preferences. Playback itself lives in the audio layer.
#[derive(Debug)]
pub struct SoundStore {
    master_volume: f32,
    ambient_volume: f32,
    effects_volume: f32,
    muted: bool,
    ambient_playing: bool,
    subscribers: Subscribers<SoundEvent>,
}

impl Default for SoundStore {
    fn default() -> Self {
        Self {
            master_volume: 0.5,
            ambient_volume: 0.3,
            effects_volume: 0.6,
            muted: false,
            ambient_playing: false,
            subscribers: Subscribers::default(),
        }
    }
}

impl SoundStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SoundEvent) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn master_volume(&self) -> f32 {
        self.master_volume
    }

    pub fn ambient_volume(&self) -> f32 {
        self.ambient_volume
    }

    pub fn effects_volume(&self) -> f32 {
        self.effects_volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn ambient_playing(&self) -> bool {
        self.ambient_playing
    }

    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = clamp_volume(volume);
        debug!("master volume {:.2}", self.master_volume);
        self.subscribers.emit(&SoundEvent::MasterVolume(self.master_volume));
    }

    pub fn set_ambient_volume(&mut self, volume: f32) {
        self.ambient_volume = clamp_volume(volume);
        self.subscribers.emit(&SoundEvent::AmbientVolume(self.ambient_volume));
    }

    pub fn set_effects_volume(&mut self, volume: f32) {
        self.effects_volume = clamp_volume(volume);
        self.subscribers.emit(&SoundEvent::EffectsVolume(self.effects_volume));
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        debug!("muted={}", self.muted);
        self.subscribers.emit(&SoundEvent::Muted(self.muted));
    }

    pub fn set_ambient_playing(&mut self, playing: bool) {
        self.ambient_playing = playing;
        self.subscribers.emit(&SoundEvent::AmbientPlaying(playing));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_defaults() {
        let store = SoundStore::new();
        assert_eq!(store.master_volume(), 0.5);
        assert_eq!(store.ambient_volume(), 0.3);
        assert_eq!(store.effects_volume(), 0.6);
        assert!(!store.is_muted());
        assert!(!store.ambient_playing());
    }

    #[test]
    fn test_volumes_are_clamped() {
        let mut store = SoundStore::new();
        store.set_master_volume(1.7);
        store.set_ambient_volume(-0.2);
        store.set_effects_volume(0.25);
        assert_eq!(store.master_volume(), 1.0);
        assert_eq!(store.ambient_volume(), 0.0);
        assert_eq!(store.effects_volume(), 0.25);
    }

    #[test]
    fn test_toggle_mute() {
        let mut store = SoundStore::new();
        store.toggle_mute();
        assert!(store.is_muted());
        store.toggle_mute();
        assert!(!store.is_muted());
    }

    #[test]
    fn test_each_volume_has_its_own_event() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut store = SoundStore::new();
        let sink = Rc::clone(&events);
        store.subscribe(move |e| sink.borrow_mut().push(*e));

        store.set_effects_volume(0.2);
        store.set_ambient_volume(2.0);
        store.set_master_volume(0.4);

        assert_eq!(
            *events.borrow(),
            vec![
                SoundEvent::EffectsVolume(0.2),
                SoundEvent::AmbientVolume(1.0),
                SoundEvent::MasterVolume(0.4),
            ]
        );
    }
}
