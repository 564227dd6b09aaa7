use crate::error::{ErrorSeverity, SensorError};
use crate::state::{BalloonId, BalloonKind};

/// 8-bit RGBA color as authored in configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Rgba {
    #[cfg_attr(feature = "serde", serde(alias = "Red"))]
    pub red: u8,
    #[cfg_attr(feature = "serde", serde(alias = "Green"))]
    pub green: u8,
    #[cfg_attr(feature = "serde", serde(alias = "Blue"))]
    pub blue: u8,
    #[cfg_attr(feature = "serde", serde(alias = "Alpha"))]
    pub alpha: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Process-wide sensor parameters, read-only after load.
///
/// Per-event metadata may override `default_flash` and `default_balloon`;
/// everything else applies to every event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SensorConfig {
    /// Flash sensed events unless their metadata says otherwise.
    #[cfg_attr(feature = "serde", serde(alias = "DefaultFlash"))]
    pub default_flash: bool,
    /// Balloon shown on sensed events unless overridden; `0` disables.
    #[cfg_attr(feature = "serde", serde(alias = "DefaultBalloon"))]
    pub default_balloon: BalloonId,
    /// Ignore events whose command list is empty.
    #[cfg_attr(feature = "serde", serde(alias = "DisableEmpty"))]
    pub disable_empty: bool,
    /// Manhattan radius, in tiles, within which events are sensed.
    #[cfg_attr(feature = "serde", serde(alias = "SensorDistance"))]
    pub sensor_distance: u32,
    #[cfg_attr(feature = "serde", serde(alias = "FlashColor"))]
    pub flash_color: Rgba,
    /// Frames a flash takes to fade out.
    #[cfg_attr(feature = "serde", serde(alias = "FlashDuration"))]
    pub flash_duration: u32,
    /// Frames between repeated balloons while sensing continues.
    #[cfg_attr(feature = "serde", serde(alias = "BalloonInterval"))]
    pub balloon_interval: u32,
    /// Hold the throttle while a balloon is still playing on the subject.
    #[cfg_attr(feature = "serde", serde(alias = "WaitForBalloon"))]
    pub wait_for_balloon: bool,
    /// Only sense events the player is facing.
    #[cfg_attr(feature = "serde", serde(alias = "ConsiderationDir"))]
    pub consider_direction: bool,
    /// Show effects on the player instead of the sensed event.
    #[cfg_attr(feature = "serde", serde(alias = "ApplyPlayer"))]
    pub apply_player: bool,
    /// Clear effects immediately once an event stops being sensed.
    #[cfg_attr(feature = "serde", serde(alias = "EraseWhenAway"))]
    pub erase_when_away: bool,
    /// Invert switch and self-switch gating (sense while OFF).
    #[cfg_attr(feature = "serde", serde(alias = "ConditionReverse"))]
    pub condition_reverse: bool,
}

impl SensorConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SENSOR_DISTANCE: u32 = 2;
    pub const DEFAULT_FLASH_DURATION: u32 = 60;
    pub const DEFAULT_BALLOON_INTERVAL: u32 = 15;

    pub fn new() -> Self {
        Self {
            default_flash: true,
            default_balloon: BalloonId::NONE,
            disable_empty: true,
            sensor_distance: Self::DEFAULT_SENSOR_DISTANCE,
            flash_color: Rgba::WHITE,
            flash_duration: Self::DEFAULT_FLASH_DURATION,
            balloon_interval: Self::DEFAULT_BALLOON_INTERVAL,
            wait_for_balloon: true,
            consider_direction: false,
            apply_player: false,
            erase_when_away: false,
            condition_reverse: false,
        }
    }

    /// Checks values a user can get wrong in a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownDefaultBalloon`] if `default_balloon` is
    /// neither `0` nor one of the stock icons.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let balloon = self.default_balloon;
        if !balloon.is_none() && balloon.kind().is_none() {
            return Err(ConfigError::UnknownDefaultBalloon(balloon.0));
        }
        Ok(())
    }

    /// Stock icon used when no event overrides it.
    pub fn default_balloon_kind(&self) -> Option<BalloonKind> {
        self.default_balloon.kind()
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors raised while validating a loaded [`SensorConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("default balloon {0} is not a stock icon (expected 0-15)")]
    UnknownDefaultBalloon(u32),
}

impl SensorError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::UnknownDefaultBalloon(_) => "CONFIG_UNKNOWN_DEFAULT_BALLOON",
        }
    }
}
