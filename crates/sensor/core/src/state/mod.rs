//! Identifiers, grid types, and the per-subject effect state machine.
mod effect;
mod types;

pub use effect::{ApplyOutcome, BlendColor, EffectState};
pub use types::{BalloonId, BalloonKind, Direction, EventId, MapId, Position, Subject};
