//! Background music state.
//!
//! Playback cannot begin until the user has interacted with the page, so the
//! control stays dormant until the first click or key press. The mute button
//! only appears once the track is playing.

use orrery_config::AudioConfig;
use tracing::info;

/// User input that unlocks playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    Click,
    KeyPress,
}

#[derive(Clone, Debug)]
pub struct AudioControl {
    track: String,
    volume: f32,
    started: bool,
    muted: bool,
}

impl AudioControl {
    /// The track always loops.
    pub const LOOPING: bool = true;

    pub fn new(track: impl Into<String>, volume: f32) -> Self {
        Self {
            track: track.into(),
            volume: volume.clamp(0.0, 1.0),
            started: false,
            muted: false,
        }
    }

    pub fn from_config(config: &AudioConfig) -> Self {
        Self::new(config.track.clone(), config.volume)
    }

    pub fn track(&self) -> &str {
        &self.track
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Handle a user interaction. Returns `true` when it started playback.
    pub fn on_interaction(&mut self, interaction: Interaction) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        info!(track = %self.track, ?interaction, "background music started");
        true
    }

    /// Flip the mute flag. Does nothing before playback has started.
    pub fn toggle_mute(&mut self) -> bool {
        if self.started {
            self.muted = !self.muted;
        }
        self.muted
    }

    /// Mute button text, or `None` while the button is hidden.
    pub fn button_label(&self) -> Option<&'static str> {
        self.started
            .then_some(if self.muted { "Unmute" } else { "Mute" })
    }

    /// Volume actually reaching the speakers.
    pub fn output_volume(&self) -> f32 {
        if self.started && !self.muted {
            self.volume
        } else {
            0.0
        }
    }
}
