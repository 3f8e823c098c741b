// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors that cross the bridge boundary.
//!
//! Each variant carries a short machine-readable code (see [`PolicyError::code`])
//! plus a human-readable message from its `Display` impl.

use thiserror::Error;

pub const CODE_INVALID_ARGS: &str = "invalid_args";
pub const CODE_NO_ACCESS: &str = "no_access";
pub const CODE_SECURITY: &str = "security";
pub const CODE_UNAVAILABLE: &str = "unavailable";
pub const CODE_UNIMPLEMENTED: &str = "unimplemented";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// A required call argument was absent or had the wrong type.
    #[error("Missing {field}")]
    InvalidArgument { field: String },

    /// The app does not currently hold notification-policy authority.
    #[error("Notification policy access not granted")]
    PermissionDenied,

    /// The OS refused the mutation even though the authority check passed.
    #[error("{0}")]
    Security(String),

    /// The host could not be reached (missing tool, broken pipe, ...).
    #[error("{0}")]
    Unavailable(String),

    /// The requested operation does not exist on this channel.
    #[error("method not implemented: {method}")]
    Unimplemented { method: String },
}

impl PolicyError {
    pub fn invalid_argument(field: impl Into<String>) -> Self {
        PolicyError::InvalidArgument {
            field: field.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PolicyError::InvalidArgument { .. } => CODE_INVALID_ARGS,
            PolicyError::PermissionDenied => CODE_NO_ACCESS,
            PolicyError::Security(_) => CODE_SECURITY,
            PolicyError::Unavailable(_) => CODE_UNAVAILABLE,
            PolicyError::Unimplemented { .. } => CODE_UNIMPLEMENTED,
        }
    }

    /// Whether the user can fix this by granting access in system settings.
    pub fn is_recoverable_by_user(&self) -> bool {
        matches!(self, PolicyError::PermissionDenied)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
