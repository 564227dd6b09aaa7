//! Frame-driven runtime for the near-event sensor.
//!
//! This crate plays the host's part around `sensor-core`: it owns one map's
//! events, the player, in-memory flag stores, and reference balloon playback,
//! and runs the sensor hooks once per frame. Consumers drive it through
//! [`SensorWorld::step_frame`] and read sprite feedback with
//! [`SensorWorld::render_feedback`].
//!
//! Modules are organized by responsibility:
//! - [`world`] hosts the frame driver and its builder
//! - [`stores`] provides switch / self-switch oracles
//! - [`balloon`] tracks balloon requests and playback per subject
pub mod balloon;
pub mod error;
pub mod stores;
pub mod world;

pub use balloon::{BalloonPlayback, BalloonTracker};
pub use error::{Result, RuntimeError};
pub use stores::{SelfSwitchStore, SwitchStore};
pub use world::{FrameSummary, SensorWorld, SensorWorldBuilder, SubjectFeedback};
