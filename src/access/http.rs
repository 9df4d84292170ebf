//! REST implementation of the identity collaborator.

use anyhow::Context;
use futures::future::BoxFuture;

use super::{CurrentUser, IdentityProvider};

/// Identity provider backed by the console's REST API
///
/// Calls `GET {base_url}/auth/me` with the session's bearer token. Any
/// non-2xx status, transport failure or malformed payload surfaces as an
/// error for the gate to fold into a denial.
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpIdentityProvider {
    /// Create a provider for the given API base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a provider reusing an existing client
    ///
    /// Lets the caller keep one connection pool (and its timeout settings)
    /// across all API access.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl IdentityProvider for HttpIdentityProvider {
    fn current_user<'a>(&'a self, token: &'a str) -> BoxFuture<'a, anyhow::Result<CurrentUser>> {
        Box::pin(async move {
            let url = format!("{}/auth/me", self.base_url);
            log::debug!("resolving current user via {url}");

            let response = self
                .client
                .get(&url)
                .bearer_auth(token)
                .send()
                .await
                .with_context(|| format!("identity request to {url} failed"))?;

            let user = response
                .error_for_status()
                .context("identity endpoint rejected the session")?
                .json::<CurrentUser>()
                .await
                .context("malformed identity payload")?;

            Ok(user)
        })
    }
}
