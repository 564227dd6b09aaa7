//! Common error infrastructure for sensor-core.
//!
//! The frame loop itself never fails: malformed metadata degrades to
//! defaults. Errors only surface at the edges, when a host loads or assembles
//! configuration. Domain errors (e.g. [`crate::ConfigError`]) live next to the
//! code that raises them and implement [`SensorError`].

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input that should be corrected and reloaded
/// - **Internal**: unexpected state inconsistency that indicates a host bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid user-authored input.
    ///
    /// Examples: unknown default balloon icon in a config file
    Validation,

    /// Host assembled the world inconsistently.
    ///
    /// Examples: two events registered under the same id
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates a host bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all sensor errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who has to fix it, not by impact
pub trait SensorError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
