//! Access-gate outcomes against a scripted identity collaborator.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use careview::access::{DENIED_NO_TOKEN, DENIED_NOT_ADMIN, DENIED_UNREACHABLE};
use careview::{AccessDecision, AccessGate, CareviewConfig, CurrentUser, IdentityProvider};
use futures::future::BoxFuture;

/// Scripted collaborator: resolves a fixed role, fails, or stalls.
struct FakeIdentity {
    role: Option<&'static str>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl FakeIdentity {
    fn with_role(role: &'static str) -> Self {
        Self {
            role: Some(role),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            role: None,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn stalled(role: &'static str, delay: Duration) -> Self {
        Self {
            role: Some(role),
            delay: Some(delay),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IdentityProvider for FakeIdentity {
    fn current_user<'a>(&'a self, _token: &'a str) -> BoxFuture<'a, anyhow::Result<CurrentUser>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            match self.role {
                Some(role) => Ok(CurrentUser {
                    role: role.to_string(),
                    name: "Dana Reeve".to_string(),
                    email: "dana@agency.example".to_string(),
                }),
                None => Err(anyhow::anyhow!("identity endpoint returned 503")),
            }
        })
    }
}

#[tokio::test]
async fn missing_token_denies_without_a_lookup() {
    let provider = Arc::new(FakeIdentity::with_role("admin"));
    let gate = AccessGate::new(Arc::clone(&provider));

    for token in [None, Some(""), Some("   ")] {
        let decision = gate.evaluate(token).await;
        assert_eq!(decision, AccessDecision::Denied(DENIED_NO_TOKEN.to_string()));
    }

    // The collaborator was never consulted.
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn admin_role_is_authorized() {
    let gate = AccessGate::new(FakeIdentity::with_role("admin"));

    let decision = gate.evaluate(Some("token-1")).await;
    assert_eq!(decision, AccessDecision::Authorized);
    assert!(decision.is_authorized());
}

#[tokio::test]
async fn non_admin_role_is_denied() {
    let gate = AccessGate::new(FakeIdentity::with_role("caregiver"));

    let decision = gate.evaluate(Some("token-1")).await;
    assert_eq!(
        decision,
        AccessDecision::Denied(DENIED_NOT_ADMIN.to_string())
    );
}

#[tokio::test]
async fn lookup_failure_is_denied_not_propagated() {
    let gate = AccessGate::new(FakeIdentity::failing());

    let decision = gate.evaluate(Some("token-1")).await;
    assert_eq!(
        decision,
        AccessDecision::Denied(DENIED_UNREACHABLE.to_string())
    );
}

#[tokio::test]
async fn admin_role_name_comes_from_config() {
    let config = CareviewConfig {
        admin_role: "coordinator".to_string(),
        ..CareviewConfig::default()
    };

    let gate = AccessGate::from_config(FakeIdentity::with_role("coordinator"), &config);
    assert_eq!(gate.evaluate(Some("token-1")).await, AccessDecision::Authorized);

    let gate = AccessGate::from_config(FakeIdentity::with_role("admin"), &config);
    assert_eq!(
        gate.evaluate(Some("token-1")).await,
        AccessDecision::Denied(DENIED_NOT_ADMIN.to_string())
    );
}

#[tokio::test]
async fn stalled_lookup_hits_the_deadline() {
    let gate = AccessGate::new(FakeIdentity::stalled("admin", Duration::from_secs(5)))
        .with_deadline(Duration::from_millis(10));

    let decision = gate.evaluate(Some("token-1")).await;
    assert_eq!(
        decision,
        AccessDecision::Denied(DENIED_UNREACHABLE.to_string())
    );
}

#[tokio::test]
async fn concurrent_evaluations_are_independent() {
    let provider = Arc::new(FakeIdentity::with_role("admin"));
    let gate = AccessGate::new(Arc::clone(&provider));

    let (first, second) = futures::join!(gate.evaluate(Some("t1")), gate.evaluate(Some("t2")));
    assert_eq!(first, AccessDecision::Authorized);
    assert_eq!(second, AccessDecision::Authorized);

    // Each navigation attempt re-queried the collaborator.
    assert_eq!(provider.call_count(), 2);
}

#[test]
fn pending_is_neither_authorized_nor_denied() {
    assert!(!AccessDecision::Pending.is_authorized());
    assert!(!AccessDecision::Pending.is_denied());
    assert!(AccessDecision::Denied("no token".to_string()).is_denied());
}
