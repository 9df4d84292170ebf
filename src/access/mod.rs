//! Role-gated access checks for protected views
//!
//! Entering an admin-only view triggers a single asynchronous "who am I"
//! round trip against the identity collaborator. The check has exactly three
//! outcomes: authorized, denied with a displayable reason, or still pending
//! while the round trip is in flight. Nothing is cached between navigations;
//! a session's role can change mid-visit, so a stale authorization must
//! never be served.

pub mod http;

use std::time::Duration;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

pub use http::HttpIdentityProvider;

/// Denial reason when no session token is present
pub const DENIED_NO_TOKEN: &str = "no token";

/// Denial reason when the session belongs to a non-admin role
pub const DENIED_NOT_ADMIN: &str = "admins only";

/// Denial reason when the identity lookup itself fails
pub const DENIED_UNREACHABLE: &str = "unauthorized access";

/// The identity payload returned by the "who am I" collaborator
///
/// Unknown fields in the wire payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// Role name, compared against the configured admin role
    pub role: String,
    /// Display name
    pub name: String,
    /// Account email
    pub email: String,
}

/// Outcome of one protected-navigation check
///
/// `Pending` is the state a view holds between issuing the check and its
/// resolution; [`AccessGate::evaluate`] itself only resolves to the two
/// terminal states. Every non-authorized outcome is terminal for that
/// navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// The round trip has not resolved yet
    Pending,
    /// The session belongs to an admin
    Authorized,
    /// Entry refused, with a displayable reason
    Denied(String),
}

impl AccessDecision {
    /// Whether the protected view may render
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized)
    }

    /// Whether the caller should redirect away
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied(_))
    }
}

/// Collaborator resolving a bearer token to the current user
///
/// Implementations perform the actual transport; the gate only interprets
/// the outcome. See [`HttpIdentityProvider`] for the REST implementation.
pub trait IdentityProvider: Send + Sync {
    /// Resolve the user the token belongs to
    fn current_user<'a>(&'a self, token: &'a str) -> BoxFuture<'a, anyhow::Result<CurrentUser>>;
}

// A shared provider is a provider, so one client can back several gates.
impl<P: IdentityProvider + ?Sized> IdentityProvider for std::sync::Arc<P> {
    fn current_user<'a>(&'a self, token: &'a str) -> BoxFuture<'a, anyhow::Result<CurrentUser>> {
        (**self).current_user(token)
    }
}

/// Single-shot authorization check for admin-only views
pub struct AccessGate<P> {
    provider: P,
    admin_role: String,
    deadline: Option<Duration>,
}

impl<P: IdentityProvider> AccessGate<P> {
    /// Create a gate admitting the default `"admin"` role
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            admin_role: "admin".to_string(),
            deadline: None,
        }
    }

    /// Create a gate admitting the role configured in [`crate::CareviewConfig`]
    #[must_use]
    pub fn from_config(provider: P, config: &crate::config::CareviewConfig) -> Self {
        Self {
            provider,
            admin_role: config.admin_role.clone(),
            deadline: None,
        }
    }

    /// Bound the identity round trip
    ///
    /// A lookup exceeding the deadline counts as a collaborator failure and
    /// resolves to the `unauthorized access` denial.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Evaluate one protected-navigation attempt
    ///
    /// Absent, empty or whitespace-only tokens are denied immediately with
    /// no collaborator call. Otherwise the token is resolved once; an admin
    /// role authorizes, any other role or any lookup failure denies. Errors
    /// never propagate out of the gate.
    pub async fn evaluate(&self, token: Option<&str>) -> AccessDecision {
        let token = token.map(str::trim).filter(|token| !token.is_empty());
        let Some(token) = token else {
            log::info!("access denied before identity lookup: no session token");
            return AccessDecision::Denied(DENIED_NO_TOKEN.to_string());
        };

        let lookup = self.provider.current_user(token);
        let outcome = match self.deadline {
            Some(limit) => match tokio::time::timeout(limit, lookup).await {
                Ok(outcome) => outcome,
                Err(_) => Err(anyhow::anyhow!(
                    "identity lookup exceeded {}ms",
                    limit.as_millis()
                )),
            },
            None => lookup.await,
        };

        match outcome {
            Ok(user) if user.role == self.admin_role => {
                log::debug!("access granted to {}", user.email);
                AccessDecision::Authorized
            }
            Ok(user) => {
                log::info!("access denied for role '{}'", user.role);
                AccessDecision::Denied(DENIED_NOT_ADMIN.to_string())
            }
            Err(error) => {
                log::warn!("identity lookup failed: {error:#}");
                AccessDecision::Denied(DENIED_UNREACHABLE.to_string())
            }
        }
    }
}
