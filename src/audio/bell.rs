use log::{debug, warn};
use std::io::Write;

use super::AudioSink;
use crate::models::SoundKind;

/// Default sink for a terminal: logs every cue and rings the bell for loud ones
#[derive(Debug)]
pub struct TerminalBell {
    global_volume: f32,
}

impl Default for TerminalBell {
    fn default() -> Self {
        Self { global_volume: 1.0 }
    }
}

impl TerminalBell {
    pub fn new() -> Self {
        Self::default()
    }

    fn ring(&self) {
        // Ring terminal bell
        print!("\x07");
        if let Err(e) = std::io::stdout().flush() {
            warn!("failed to ring bell: {}", e);
        }
    }
}

impl AudioSink for TerminalBell {
    fn play(&mut self, kind: SoundKind, volume: f32) {
        debug!("cue {} at {:.2}", kind.tag(), volume);
        if kind.is_loud() && volume > 0.0 && self.global_volume > 0.0 {
            self.ring();
        }
    }

    fn play_ambient(&mut self, volume: f32) {
        debug!("{} loop on at {:.2}", SoundKind::Ambient.tag(), volume);
    }

    fn pause_ambient(&mut self) {
        debug!("{} loop paused", SoundKind::Ambient.tag());
    }

    fn set_global_volume(&mut self, volume: f32) {
        self.global_volume = volume;
    }
}
