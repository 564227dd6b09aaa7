//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from world assembly and configuration so hosts can bubble
//! them up with consistent context. Nothing in the frame loop returns these.
use sensor_core::{ConfigError, ErrorSeverity, EventId, MapId, SensorError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("event {0} registered more than once")]
    DuplicateEvent(EventId),

    #[error("event {event} belongs to {found}, world map is {expected}")]
    ForeignEvent {
        event: EventId,
        expected: MapId,
        found: MapId,
    },

    #[error("event {0} not found on this map")]
    UnknownEvent(EventId),
}

impl SensorError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Config(err) => err.severity(),
            RuntimeError::DuplicateEvent(_)
            | RuntimeError::ForeignEvent { .. }
            | RuntimeError::UnknownEvent(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Config(err) => err.error_code(),
            RuntimeError::DuplicateEvent(_) => "RUNTIME_DUPLICATE_EVENT",
            RuntimeError::ForeignEvent { .. } => "RUNTIME_FOREIGN_EVENT",
            RuntimeError::UnknownEvent(_) => "RUNTIME_UNKNOWN_EVENT",
        }
    }
}
