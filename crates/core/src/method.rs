// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Method-channel vocabulary shared by the bridge and its callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default channel name the shared layer binds to.
pub const DEFAULT_CHANNEL: &str = "focus_bridge/dnd";

/// Argument key carrying the level for `setInterruptionFilter`.
pub const FILTER_ARG: &str = "filter";

/// Operations understood by the policy channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    HasPolicyAccess,
    RequestPolicyAccess,
    GetInterruptionFilter,
    SetInterruptionFilter,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::HasPolicyAccess,
        Method::RequestPolicyAccess,
        Method::GetInterruptionFilter,
        Method::SetInterruptionFilter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Method::HasPolicyAccess => "hasPolicyAccess",
            Method::RequestPolicyAccess => "requestPolicyAccess",
            Method::GetInterruptionFilter => "getInterruptionFilter",
            Method::SetInterruptionFilter => "setInterruptionFilter",
        }
    }

    /// Look up a method by its wire name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

/// A single invocation arriving from the shared layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub args: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }

    pub fn without_args(method: impl Into<String>) -> Self {
        Self::new(method, Value::Null)
    }

    /// Named integer argument, or `None` if absent, null, or not a 32-bit integer.
    pub fn argument_i32(&self, name: &str) -> Option<i32> {
        self.args
            .get(name)
            .and_then(Value::as_i64)
            .and_then(|v| i32::try_from(v).ok())
    }
}

/// Outcome of a method call, as the shared layer sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    Success(Value),
    Error {
        code: String,
        message: String,
        details: Value,
    },
    /// The method is unknown; distinct from both success and failure.
    NotImplemented,
}

impl MethodResponse {
    pub fn success(value: impl Into<Value>) -> Self {
        MethodResponse::Success(value.into())
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        MethodResponse::Error {
            code: code.into(),
            message: message.into(),
            details: Value::Null,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodResponse::Success(_))
    }

    /// Error code, if this is an error response.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            MethodResponse::Error { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<crate::PolicyError> for MethodResponse {
    fn from(err: crate::PolicyError) -> Self {
        match err {
            crate::PolicyError::Unimplemented { .. } => MethodResponse::NotImplemented,
            other => MethodResponse::error(other.code(), other.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "method_tests.rs"]
mod tests;
