//! Audio system
//!
//! Single-oscillator chiptune cues and a looping background melody, all
//! generated with the Web Audio API. Cue selection is platform independent;
//! playback only exists on wasm.

use crate::sim::GameEvent;

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Coin inserted on the splash screen
    CoinDrop,
    /// Hover / pause toggle
    MenuBleep,
    /// Section change / game start
    MenuConfirm,
    /// Skill eaten
    ItemCollect,
    /// Wall or self collision
    GameOver,
    /// Board cleared
    PowerUp,
    /// Contact form sent
    SubmitSuccess,
    /// Contact form rejected
    SubmitError,
}

/// Tone parameters for a cue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundProfile {
    /// Hz
    pub frequency: f32,
    /// Seconds
    pub duration: f64,
    pub waveform: Waveform,
}

/// Peak gain of a cue before volume scaling
pub const CUE_GAIN: f32 = 0.15;
/// Envelope floor for the exponential release
pub const ENVELOPE_FLOOR: f32 = 0.01;

/// Background melody (Hz)
pub const MUSIC_PATTERN: [f32; 8] = [330.0, 370.0, 394.0, 330.0, 294.0, 330.0, 394.0, 440.0];
/// Length of each melody note (s)
pub const MUSIC_NOTE_DURATION: f64 = 0.3;
/// Spacing between note onsets (s)
pub const MUSIC_NOTE_SPACING: f64 = 0.4;
/// Melody repeat period (ms)
pub const MUSIC_REPEAT_MS: i32 = 3500;
/// Peak gain of a melody note before volume scaling
pub const MUSIC_GAIN: f32 = 0.03;

impl SoundCue {
    pub const ALL: [SoundCue; 8] = [
        SoundCue::CoinDrop,
        SoundCue::MenuBleep,
        SoundCue::MenuConfirm,
        SoundCue::ItemCollect,
        SoundCue::GameOver,
        SoundCue::PowerUp,
        SoundCue::SubmitSuccess,
        SoundCue::SubmitError,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::CoinDrop => "coin-drop",
            SoundCue::MenuBleep => "menu-bleep",
            SoundCue::MenuConfirm => "menu-confirm",
            SoundCue::ItemCollect => "item-collect",
            SoundCue::GameOver => "game-over",
            SoundCue::PowerUp => "power-up",
            SoundCue::SubmitSuccess => "submit-form-success",
            SoundCue::SubmitError => "submit-form-error",
        }
    }

    /// Look up by name; unknown names play the menu bleep
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|cue| cue.name() == name)
            .unwrap_or(SoundCue::MenuBleep)
    }

    pub fn profile(&self) -> SoundProfile {
        let (frequency, duration, waveform) = match self {
            SoundCue::CoinDrop => (329.0, 0.6, Waveform::Sine),
            SoundCue::MenuBleep => (523.0, 0.1, Waveform::Square),
            SoundCue::MenuConfirm => (784.0, 0.2, Waveform::Triangle),
            SoundCue::ItemCollect => (1047.0, 0.15, Waveform::Sawtooth),
            SoundCue::GameOver => (130.0, 1.0, Waveform::Sine),
            SoundCue::PowerUp => (1568.0, 0.3, Waveform::Triangle),
            SoundCue::SubmitSuccess => (880.0, 0.25, Waveform::Triangle),
            SoundCue::SubmitError => (196.0, 0.4, Waveform::Sawtooth),
        };
        SoundProfile {
            frequency,
            duration,
            waveform,
        }
    }
}

/// Cue to play for a session event, if any
pub fn cue_for_event(event: &GameEvent) -> Option<SoundCue> {
    match event {
        GameEvent::Started => Some(SoundCue::MenuConfirm),
        GameEvent::FoodCollision { .. } => Some(SoundCue::ItemCollect),
        GameEvent::WallCollision { .. } | GameEvent::SelfCollision { .. } => {
            Some(SoundCue::GameOver)
        }
        GameEvent::BoardCleared { .. } => Some(SoundCue::PowerUp),
        GameEvent::PauseToggled { .. } => Some(SoundCue::MenuBleep),
        GameEvent::Reset => None,
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, AudioContextState, GainNode, OscillatorNode, OscillatorType};

    use super::*;

    impl From<Waveform> for OscillatorType {
        fn from(waveform: Waveform) -> Self {
            match waveform {
                Waveform::Sine => OscillatorType::Sine,
                Waveform::Square => OscillatorType::Square,
                Waveform::Triangle => OscillatorType::Triangle,
                Waveform::Sawtooth => OscillatorType::Sawtooth,
            }
        }
    }

    /// Audio manager for the site
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        master_volume: f32,
        sfx_volume: f32,
        music_volume: f32,
        music_enabled: bool,
        muted: bool,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                master_volume: 0.8,
                sfx_volume: 1.0,
                music_volume: 0.7,
                music_enabled: true,
                muted: false,
            }
        }

        /// Apply persisted preferences
        pub fn apply_settings(&mut self, settings: &crate::settings::Settings) {
            self.set_master_volume(settings.master_volume);
            self.set_sfx_volume(settings.sfx_volume);
            self.set_music_volume(settings.music_volume);
            self.music_enabled = settings.music_enabled;
            self.muted = settings.muted;
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        pub fn set_master_volume(&mut self, vol: f32) {
            self.master_volume = vol.clamp(0.0, 1.0);
        }

        pub fn set_sfx_volume(&mut self, vol: f32) {
            self.sfx_volume = vol.clamp(0.0, 1.0);
        }

        pub fn set_music_volume(&mut self, vol: f32) {
            self.music_volume = vol.clamp(0.0, 1.0);
        }

        pub fn set_music_enabled(&mut self, enabled: bool) {
            self.music_enabled = enabled;
        }

        /// Mute/unmute all audio
        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        pub fn is_muted(&self) -> bool {
            self.muted
        }

        fn sfx_gain(&self) -> f32 {
            if self.muted {
                0.0
            } else {
                self.master_volume * self.sfx_volume
            }
        }

        fn music_gain(&self) -> f32 {
            if self.muted || !self.music_enabled {
                0.0
            } else {
                self.master_volume * self.music_volume
            }
        }

        /// Context ready to schedule sounds, resumed if suspended
        fn live_context(&self) -> Option<&AudioContext> {
            let ctx = self.ctx.as_ref()?;
            if ctx.state() == AudioContextState::Suspended {
                let _ = ctx.resume();
            }
            Some(ctx)
        }

        /// Play a sound cue
        pub fn play(&self, cue: SoundCue) {
            let vol = self.sfx_gain();
            if vol <= 0.0 {
                return;
            }
            let Some(ctx) = self.live_context() else { return };

            let profile = cue.profile();
            let Some((osc, gain)) = self.create_osc(ctx, profile.frequency, profile.waveform.into())
            else {
                log::debug!("Sound playback failed: {}", cue.name());
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(CUE_GAIN * vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(ENVELOPE_FLOOR, t + profile.duration)
                .ok();

            osc.start_with_when(t).ok();
            osc.stop_with_when(t + profile.duration).ok();
        }

        /// Schedule one pass of the background melody
        pub fn play_music_pattern(&self) {
            let vol = self.music_gain();
            if vol <= 0.0 {
                return;
            }
            let Some(ctx) = self.live_context() else { return };

            let now = ctx.current_time();
            for (i, freq) in MUSIC_PATTERN.iter().enumerate() {
                let t = now + i as f64 * MUSIC_NOTE_SPACING;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Square) {
                    gain.gain().set_value_at_time(0.0, t).ok();
                    gain.gain()
                        .linear_ramp_to_value_at_time(MUSIC_GAIN * vol, t + 0.1)
                        .ok();
                    gain.gain()
                        .linear_ramp_to_value_at_time(0.0, t + MUSIC_NOTE_DURATION)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + MUSIC_NOTE_DURATION).ok();
                }
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }
    }
}
