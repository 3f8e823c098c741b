// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Method-channel dispatcher.
//!
//! Every call re-queries the port. Nothing about authority or the filter is
//! cached between calls, and no call is retried.

use crate::codec::{self, CodecError};
use dnd_adapters::PolicyPort;
use dnd_core::{FilterLevel, Method, MethodCall, MethodResponse, PolicyError, FILTER_ARG};
use serde_json::Value;
use tracing::{debug, warn};

/// Policy operations exposed to the shared app layer
#[derive(Clone)]
pub struct PolicyChannel<P> {
    port: P,
}

impl<P: PolicyPort> PolicyChannel<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Whether policy control exists on this OS. Pure and infallible.
    pub fn supports_policy_control(&self) -> bool {
        self.port.supports_policy_control()
    }

    pub async fn has_authority(&self) -> Result<bool, PolicyError> {
        if !self.supports_policy_control() {
            return Ok(false);
        }
        Ok(self.port.has_authority().await?)
    }

    /// Open the OS authority screen and report authority as it stood
    /// *before* the user saw that screen.
    ///
    /// The launch is not awaited. Callers that need the outcome poll
    /// [`PolicyChannel::has_authority`] once the user comes back.
    pub async fn request_authority(&self) -> Result<bool, PolicyError> {
        if !self.supports_policy_control() {
            return Ok(false);
        }
        self.port.open_authority_settings().await?;
        Ok(self.port.has_authority().await?)
    }

    /// Current filter, or `None` when the OS has no policy control.
    pub async fn get_filter(&self) -> Result<Option<FilterLevel>, PolicyError> {
        if !self.supports_policy_control() {
            return Ok(None);
        }
        Ok(Some(self.port.current_filter().await?))
    }

    /// Apply a filter level. The OS is never touched without authority.
    pub async fn set_filter(&self, level: FilterLevel) -> Result<(), PolicyError> {
        if !self.supports_policy_control() {
            return Ok(());
        }
        if !self.port.has_authority().await? {
            return Err(PolicyError::PermissionDenied);
        }
        Ok(self.port.set_filter(level).await?)
    }

    async fn set_filter_from(&self, call: &MethodCall) -> Result<(), PolicyError> {
        if !self.supports_policy_control() {
            return Ok(());
        }
        let level = call
            .argument_i32(FILTER_ARG)
            .map(FilterLevel::from)
            .ok_or_else(|| PolicyError::invalid_argument(FILTER_ARG))?;
        self.set_filter(level).await
    }

    /// Dispatch one call by wire name.
    pub async fn handle(&self, call: &MethodCall) -> MethodResponse {
        let Some(method) = Method::from_name(&call.method) else {
            debug!(method = %call.method, "unknown method");
            return MethodResponse::NotImplemented;
        };

        debug!(method = method.name(), "handling call");
        let result = match method {
            Method::HasPolicyAccess => self.has_authority().await.map(Value::Bool),
            Method::RequestPolicyAccess => self.request_authority().await.map(Value::Bool),
            Method::GetInterruptionFilter => self
                .get_filter()
                .await
                .map(|level| level.map_or(Value::Null, |l| Value::from(l.as_i32()))),
            Method::SetInterruptionFilter => self.set_filter_from(call).await.map(|()| Value::Null),
        };

        match result {
            Ok(value) => MethodResponse::Success(value),
            Err(e) => {
                warn!(
                    method = method.name(),
                    code = e.code(),
                    user_fixable = e.is_recoverable_by_user(),
                    error = %e,
                    "call failed",
                );
                MethodResponse::from(e)
            }
        }
    }

    /// Decode a JSON method call, dispatch it, and encode the reply envelope.
    pub async fn handle_message(&self, message: &[u8]) -> Result<Vec<u8>, CodecError> {
        let call = codec::decode_call(message)?;
        let response = self.handle(&call).await;
        codec::encode_response(&response)
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
