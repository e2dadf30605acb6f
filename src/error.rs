//! Typed configuration errors.
//!
//! The resolvers never fail: ambiguous or missing markers are settled by
//! precedence or dropped. What can go wrong is the *configuration* the
//! resolvers run against, most notably a marker type the host front-end
//! cannot see. Those conditions are collected as [`ConfigError`] values,
//! logged, and become fatal only in strict mode.

use crate::markers::MarkerRole;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The service base type is not visible, so no declaration can qualify.
    #[error("service base type `{name}` cannot be resolved; no service declaration can qualify")]
    UnresolvedBaseType { name: String },

    /// A marker type is not visible, so markers of that role are never detected.
    #[error("{role} marker type `{name}` cannot be resolved; {role} markers will not be detected")]
    UnresolvedMarker { role: MarkerRole, name: String },

    /// A configuration value is unusable.
    #[error("invalid configuration value for `{key}`: {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}
