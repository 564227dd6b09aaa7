//! Per-subject effect state: flash fade, balloon throttle, deferred cancel.
//!
//! Both the player and every map event own one [`EffectState`]. Sensing hooks
//! write into it through [`EffectState::apply`] and [`EffectState::erase`];
//! the owner advances it once per frame with [`EffectState::tick`]; the render
//! layer reads [`EffectState::blend_color`] and drains
//! [`EffectState::take_balloon_cancel`].

use crate::config::{Rgba, SensorConfig};
use crate::env::BalloonChannel;
use crate::meta::EventSensorConfig;

use super::types::{BalloonId, Subject};

/// Blend color overlaid on a character sprite while a flash is active.
///
/// Channels are kept as `f64` because the alpha channel is scaled in place by
/// a non-integer factor every frame; rounding would change the fade curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlendColor(pub [f64; 4]);

impl BlendColor {
    pub const TRANSPARENT: Self = Self([0.0, 0.0, 0.0, 0.0]);

    pub fn red(&self) -> f64 {
        self.0[0]
    }

    pub fn green(&self) -> f64 {
        self.0[1]
    }

    pub fn blue(&self) -> f64 {
        self.0[2]
    }

    pub fn alpha(&self) -> f64 {
        self.0[3]
    }
}

impl From<Rgba> for BlendColor {
    fn from(color: Rgba) -> Self {
        Self([
            f64::from(color.red),
            f64::from(color.green),
            f64::from(color.blue),
            f64::from(color.alpha),
        ])
    }
}

/// What a single [`EffectState::apply`] call actually started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub flash_started: bool,
    pub balloon_requested: Option<BalloonId>,
}

impl ApplyOutcome {
    pub fn is_noop(&self) -> bool {
        !self.flash_started && self.balloon_requested.is_none()
    }
}

/// Mutable feedback state owned by one subject (event or player).
///
/// Created zeroed and never persisted: hosts reset it with
/// [`EffectState::reset`] when a save is loaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectState {
    flash_color: Option<BlendColor>,
    flash_duration: u32,
    balloon_interval: i64,
    sensor_applied: bool,
    balloon_cancel: bool,
}

impl EffectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a flash is counting down.
    pub fn is_flash(&self) -> bool {
        self.flash_duration > 0
    }

    pub fn start_flash(&mut self, color: BlendColor, duration: u32) {
        self.flash_color = Some(color);
        self.flash_duration = duration;
    }

    /// Forces the flash color to transparent black.
    ///
    /// The countdown is left untouched; it keeps running silently.
    pub fn clear_flash(&mut self) {
        self.flash_color = Some(BlendColor::TRANSPARENT);
    }

    /// Stored flash color regardless of whether the flash is active.
    pub fn flash_color(&self) -> Option<BlendColor> {
        self.flash_color
    }

    /// Color the sprite layer should blend this frame, `None` when inactive.
    pub fn blend_color(&self) -> Option<BlendColor> {
        if self.is_flash() {
            Some(self.flash_color.unwrap_or(BlendColor::TRANSPARENT))
        } else {
            None
        }
    }

    pub fn flash_duration(&self) -> u32 {
        self.flash_duration
    }

    pub fn balloon_interval(&self) -> i64 {
        self.balloon_interval
    }

    pub fn reset_balloon_interval(&mut self) {
        self.balloon_interval = 0;
    }

    pub fn is_sensor_applied(&self) -> bool {
        self.sensor_applied
    }

    pub fn is_balloon_cancel_pending(&self) -> bool {
        self.balloon_cancel
    }

    /// Read-and-reset accessor for the render-side balloon loop.
    ///
    /// Must be called before the renderer advances its own balloon playback so
    /// a pending cancel ends the current balloon immediately.
    pub fn take_balloon_cancel(&mut self) -> bool {
        std::mem::take(&mut self.balloon_cancel)
    }

    /// Records that `subject` was the target of a sensing event this frame.
    ///
    /// A running flash is never restarted or extended. Balloon requests are
    /// throttled to one per `balloon_interval + 1` frames of continuous sensing.
    pub fn apply(
        &mut self,
        subject: Subject,
        sense: &EventSensorConfig,
        config: &SensorConfig,
        balloons: &mut dyn BalloonChannel,
    ) -> ApplyOutcome {
        let mut outcome = ApplyOutcome::default();

        if !self.is_flash() && sense.flash_enabled(config) {
            self.start_flash(BlendColor::from(config.flash_color), config.flash_duration);
            outcome.flash_started = self.is_flash();
        }

        let balloon = sense.balloon_id(config);
        if !balloon.is_none() && (!config.wait_for_balloon || !balloons.is_playing(subject)) {
            if self.balloon_interval <= 0 {
                balloons.request(subject, balloon);
                self.balloon_interval = i64::from(config.balloon_interval);
                outcome.balloon_requested = Some(balloon);
            } else {
                self.balloon_interval -= 1;
            }
        }

        self.sensor_applied = true;
        outcome
    }

    /// Clears applied feedback when the subject is no longer sensed.
    ///
    /// Only acts when an effect was applied and `erase_when_away` is enabled;
    /// otherwise running effects finish on their own timers. Returns whether
    /// anything was erased.
    pub fn erase(&mut self, config: &SensorConfig) -> bool {
        if !self.sensor_applied || !config.erase_when_away {
            return false;
        }
        self.clear_flash();
        self.balloon_cancel = true;
        self.sensor_applied = false;
        true
    }

    /// Advances the flash fade by one frame.
    ///
    /// `alpha *= (d - 1) / d`, then `d -= 1`; the last step lands on exactly 0.
    pub fn tick(&mut self) {
        if !self.is_flash() {
            return;
        }
        let remaining = f64::from(self.flash_duration);
        if let Some(color) = self.flash_color.as_mut() {
            color.0[3] = color.0[3] * (remaining - 1.0) / remaining;
        }
        self.flash_duration -= 1;
    }

    /// Drops all transient state, as after loading a save.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
