// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::policy::{PolicyPort, PortError};
use async_trait::async_trait;
use dnd_core::FilterLevel;
use tracing::Instrument;

/// Wrapper that adds tracing to any PolicyPort
#[derive(Clone)]
pub struct TracedPolicy<P> {
    inner: P,
}

impl<P> TracedPolicy<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: PolicyPort> PolicyPort for TracedPolicy<P> {
    fn supports_policy_control(&self) -> bool {
        let supported = self.inner.supports_policy_control();
        tracing::trace!(supported, "policy control gate");
        supported
    }

    async fn has_authority(&self) -> Result<bool, PortError> {
        let result = self.inner.has_authority().await;
        tracing::info_span!("policy.authority").in_scope(|| match &result {
            Ok(granted) => tracing::debug!(granted, "checked"),
            Err(e) => tracing::error!(error = %e, "authority check failed"),
        });
        result
    }

    async fn open_authority_settings(&self) -> Result<(), PortError> {
        async {
            tracing::info!("opening authority settings");
            let result = self.inner.open_authority_settings().await;
            if let Err(ref e) = result {
                tracing::error!(error = %e, "settings launch failed");
            }
            result
        }
        .instrument(tracing::info_span!("policy.request"))
        .await
    }

    async fn current_filter(&self) -> Result<FilterLevel, PortError> {
        let result = self.inner.current_filter().await;
        tracing::info_span!("policy.get_filter").in_scope(|| match &result {
            Ok(level) => tracing::debug!(%level, "read"),
            Err(e) => tracing::error!(error = %e, "filter read failed"),
        });
        result
    }

    async fn set_filter(&self, level: FilterLevel) -> Result<(), PortError> {
        async {
            tracing::info!("applying");
            let start = std::time::Instant::now();
            let result = self.inner.set_filter(level).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "filter applied"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "set_filter rejected"),
            }
            result
        }
        .instrument(tracing::info_span!("policy.set_filter", %level))
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
