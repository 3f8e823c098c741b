// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Policy port selection for the host machine.

use async_trait::async_trait;
use dnd_adapters::{GnomePolicyAdapter, NoOpPolicyAdapter, PolicyPort, PortError, TracedPolicy};
use dnd_core::FilterLevel;

use crate::env::AdapterKind;

/// The policy adapter this process runs against
#[derive(Clone, Debug)]
pub enum HostPolicy {
    Gnome(GnomePolicyAdapter),
    NoOp(NoOpPolicyAdapter),
}

impl HostPolicy {
    pub async fn select(kind: AdapterKind) -> Self {
        match kind {
            AdapterKind::NoOp => HostPolicy::NoOp(NoOpPolicyAdapter::new()),
            AdapterKind::Gnome => HostPolicy::Gnome(GnomePolicyAdapter::detect().await),
            AdapterKind::Auto => {
                let gnome = GnomePolicyAdapter::detect().await;
                if gnome.supports_policy_control() {
                    HostPolicy::Gnome(gnome)
                } else {
                    tracing::debug!("no desktop policy control found, using noop adapter");
                    HostPolicy::NoOp(NoOpPolicyAdapter::new())
                }
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HostPolicy::Gnome(_) => "gnome",
            HostPolicy::NoOp(_) => "noop",
        }
    }

    pub fn traced(self) -> TracedPolicy<Self> {
        TracedPolicy::new(self)
    }
}

#[async_trait]
impl PolicyPort for HostPolicy {
    fn supports_policy_control(&self) -> bool {
        match self {
            HostPolicy::Gnome(p) => p.supports_policy_control(),
            HostPolicy::NoOp(p) => p.supports_policy_control(),
        }
    }

    async fn has_authority(&self) -> Result<bool, PortError> {
        match self {
            HostPolicy::Gnome(p) => p.has_authority().await,
            HostPolicy::NoOp(p) => p.has_authority().await,
        }
    }

    async fn open_authority_settings(&self) -> Result<(), PortError> {
        match self {
            HostPolicy::Gnome(p) => p.open_authority_settings().await,
            HostPolicy::NoOp(p) => p.open_authority_settings().await,
        }
    }

    async fn current_filter(&self) -> Result<FilterLevel, PortError> {
        match self {
            HostPolicy::Gnome(p) => p.current_filter().await,
            HostPolicy::NoOp(p) => p.current_filter().await,
        }
    }

    async fn set_filter(&self, level: FilterLevel) -> Result<(), PortError> {
        match self {
            HostPolicy::Gnome(p) => p.set_filter(level).await,
            HostPolicy::NoOp(p) => p.set_filter(level).await,
        }
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
