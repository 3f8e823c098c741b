// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::policy::{FakePolicyAdapter, PolicyCall};
use serial_test::{parallel, serial};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a test with captured tracing output
fn with_tracing<F, Fut>(f: F) -> (String, Fut::Output)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future,
{
    let logs = CapturedLogs::default();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(f())
    });

    (logs.contents(), result)
}

fn assert_log(logs: &str, label: &str, expected: &str) {
    assert!(logs.contains(expected), "Should log {label}. Logs:\n{logs}",);
}

// =============================================================================
// Tracing output verification tests
// =============================================================================

#[test]
#[serial(tracing)]
fn set_filter_logs_entry_and_completion() {
    let (logs, result) = with_tracing(|| async {
        let traced = TracedPolicy::new(FakePolicyAdapter::granted());
        traced.set_filter(FilterLevel::Priority).await
    });

    assert!(result.is_ok(), "set_filter should succeed: {:?}", result);
    assert_log(&logs, "span name", "policy.set_filter");
    assert_log(&logs, "level", "priority");
    assert_log(&logs, "entry message", "applying");
    assert_log(&logs, "completion", "filter applied");
    assert_log(&logs, "timing", "elapsed_ms");
}

#[test]
#[serial(tracing)]
fn set_filter_logs_security_rejection() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakePolicyAdapter::granted();
        fake.reject_with_security("blocked by policy");
        TracedPolicy::new(fake).set_filter(FilterLevel::None).await
    });

    assert!(result.is_err());
    assert_log(&logs, "rejection", "set_filter rejected");
    assert_log(&logs, "os message", "blocked by policy");
}

#[test]
#[serial(tracing)]
fn open_authority_settings_logs_launch() {
    let (logs, _) = with_tracing(|| async {
        TracedPolicy::new(FakePolicyAdapter::new())
            .open_authority_settings()
            .await
    });

    assert_log(&logs, "span", "policy.request");
    assert_log(&logs, "entry", "opening authority settings");
}

#[test]
#[serial(tracing)]
fn current_filter_logs_level() {
    let (logs, _) = with_tracing(|| async {
        let fake = FakePolicyAdapter::granted();
        fake.set_os_filter(FilterLevel::Alarms);
        TracedPolicy::new(fake).current_filter().await
    });

    assert_log(&logs, "span", "policy.get_filter");
    assert_log(&logs, "level", "alarms");
}

#[test]
#[serial(tracing)]
fn authority_failure_logs_error() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakePolicyAdapter::new();
        fake.set_unavailable("service gone");
        TracedPolicy::new(fake).has_authority().await
    });

    assert!(result.is_err());
    assert_log(&logs, "failure", "authority check failed");
}

// =============================================================================
// Delegation tests - verify traced wrapper delegates to inner adapter
// =============================================================================

#[tokio::test]
#[parallel(tracing)]
async fn delegates_every_call_in_order() {
    let fake = FakePolicyAdapter::granted();
    let traced = TracedPolicy::new(fake.clone());

    assert!(traced.supports_policy_control());
    assert!(traced.has_authority().await.unwrap());
    traced.open_authority_settings().await.unwrap();
    traced.set_filter(FilterLevel::Priority).await.unwrap();
    assert_eq!(traced.current_filter().await.unwrap(), FilterLevel::Priority);

    assert_eq!(
        fake.calls(),
        vec![
            PolicyCall::HasAuthority,
            PolicyCall::OpenAuthoritySettings,
            PolicyCall::SetFilter {
                level: FilterLevel::Priority
            },
            PolicyCall::CurrentFilter,
        ]
    );
}

#[tokio::test]
#[parallel(tracing)]
async fn gate_reflects_inner_adapter() {
    let traced = TracedPolicy::new(FakePolicyAdapter::unsupported());
    assert!(!traced.supports_policy_control());
    assert!(!traced.inner().supports_policy_control());
}
