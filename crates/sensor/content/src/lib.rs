//! Data-driven sensor content and loaders.
//!
//! This crate provides loaders for the data files a host ships alongside the
//! sensor:
//! - Sensor parameters (data-driven via TOML)
//! - Map event layouts with their note tags (data-driven via RON)
//!
//! All loaders use sensor-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, EventSpec, LayoutLoader, MapLayout};
