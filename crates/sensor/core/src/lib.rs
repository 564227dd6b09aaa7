//! Proximity sensing and feedback effects for tile-based map events.
//!
//! `sensor-core` defines the canonical rules for deciding, once per frame,
//! whether a map event is "sensed" by the player, and the effect state
//! machine (flash fade, throttled balloon icons, deferred cancellation) that
//! turns that decision into render-side feedback. Everything here is pure:
//! world lookups arrive through the oracle traits bundled in
//! [`env::WorldContext`], and hosts drive the lifecycle through
//! [`hooks::SensorHooks`].
pub mod config;
pub mod env;
pub mod error;
pub mod event;
pub mod hooks;
pub mod meta;
pub mod sensing;
pub mod state;

pub use config::{ConfigError, Rgba, SensorConfig};
pub use env::{
    BalloonChannel, MapView, PlayerView, SelfSwitchKey, SelfSwitchOracle, SwitchOracle,
    WorldContext,
};
pub use error::{ErrorSeverity, SensorError};
pub use event::SensorEvent;
pub use hooks::{SensorHooks, SensorReport, SensorRoute};
pub use meta::{EventSensorConfig, MetaTags};
pub use sensing::{RejectReason, Verdict};
pub use state::{
    ApplyOutcome, BalloonId, BalloonKind, BlendColor, Direction, EffectState, EventId, MapId,
    Position, Subject,
};
