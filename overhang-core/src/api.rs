//! REST gateway for the Overhang backend.
//!
//! Thin wrapper over `reqwest` that attaches the bearer token from an
//! injected [`TokenStore`] to every request. One fixed timeout per call; no
//! retry, no backoff, no refresh flow. Failures come back as
//! [`OverhangError`] for the caller to render inline.

use crate::error::{OverhangError, Result};
use crate::filter::FilterState;
use crate::models::{
    AggregateStats, AuthResponse, DistributionMap, Location, LocationStats, LoginCredentials,
    Period, ProgressData, RegisterCredentials, Session, SessionCreate, User, UserUpdate,
};
use crate::token::TokenStore;
use log::{debug, info, warn};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Scheme and host, e.g. `http://localhost:8000`. No trailing slash needed.
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
    tokens: Arc<dyn TokenStore>,
}

fn map_transport(e: reqwest::Error) -> OverhangError {
    if e.is_timeout() {
        OverhangError::Timeout
    } else if e.is_decode() {
        OverhangError::Decode(e.to_string())
    } else {
        OverhangError::Network(e.to_string())
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            client: Client::new(),
            config,
            tokens,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Start a request, attaching the bearer token when one is stored.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(self.config.timeout);
        match self.tokens.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await.map_err(map_transport)?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url());
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = OverhangError::from_status(status.as_u16(), &body);
        warn!("request failed: {}", err);
        Err(err)
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send(builder).await?;
        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                OverhangError::Timeout
            } else {
                OverhangError::Decode(e.to_string())
            }
        })
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
        self.send(builder).await.map(|_| ())
    }

    // --- authentication ---

    /// Exchange credentials for a token (form-encoded) and store it.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse> {
        let builder = self.request(Method::POST, "/auth/login").form(credentials);
        let auth: AuthResponse = self.send_json(builder).await?;
        self.tokens.set_token(&auth.access_token);
        info!("signed in as {}", credentials.username);
        Ok(auth)
    }

    /// Create an account and store the returned token.
    pub async fn register(&self, credentials: &RegisterCredentials) -> Result<AuthResponse> {
        let builder = self.request(Method::POST, "/auth/register").json(credentials);
        let auth: AuthResponse = self.send_json(builder).await?;
        self.tokens.set_token(&auth.access_token);
        info!("registered {}", credentials.username);
        Ok(auth)
    }

    /// Forget the token locally. The backend is not told.
    pub fn logout(&self) {
        self.tokens.clear_token();
        info!("signed out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.token().is_some()
    }

    pub async fn current_user(&self) -> Result<User> {
        self.send_json(self.request(Method::GET, "/api/auth/me")).await
    }

    pub async fn update_user(&self, update: &UserUpdate) -> Result<User> {
        let builder = self.request(Method::PATCH, "/api/auth/me").json(update);
        self.send_json(builder).await
    }

    // --- locations ---

    pub async fn locations(&self) -> Result<Vec<Location>> {
        self.send_json(self.request(Method::GET, "/api/locations")).await
    }

    pub async fn location_by_slug(&self, slug: &str) -> Result<Location> {
        let path = format!("/locations/{slug}");
        self.send_json(self.request(Method::GET, &path)).await
    }

    // --- sessions ---

    pub async fn sessions(&self) -> Result<Vec<Session>> {
        self.send_json(self.request(Method::GET, "/api/sessions")).await
    }

    pub async fn create_session(&self, session: &SessionCreate) -> Result<Session> {
        let builder = self.request(Method::POST, "/api/sessions").json(session);
        self.send_json(builder).await
    }

    pub async fn delete_session(&self, session_id: i64) -> Result<()> {
        let path = format!("/api/sessions/{session_id}");
        self.send_empty(self.request(Method::DELETE, &path)).await
    }

    // --- stats ---

    /// Personal grade distribution for the filter's location and period.
    pub async fn user_distribution(&self, filter: &FilterState) -> Result<DistributionMap> {
        let builder = self
            .request(Method::GET, "/api/stats/user/distribution")
            .query(&filter.distribution_query());
        self.send_json(builder).await
    }

    /// Personal completed climbs within the filter's date bounds.
    pub async fn user_progress(&self, filter: &FilterState) -> Result<ProgressData> {
        let builder = self
            .request(Method::GET, "/api/stats/user/progress")
            .query(&filter.progress_query());
        self.send_json(builder).await
    }

    pub async fn aggregate_stats(
        &self,
        period: Period,
        location_id: Option<i64>,
    ) -> Result<AggregateStats> {
        let mut params = vec![("period", period.as_str().to_string())];
        if let Some(id) = location_id {
            params.push(("location_id", id.to_string()));
        }
        let builder = self.request(Method::GET, "/stats/aggregate").query(&params);
        self.send_json(builder).await
    }

    /// Network-wide grade distribution for the filter's location and period.
    pub async fn aggregate_distribution(&self, filter: &FilterState) -> Result<DistributionMap> {
        let stats = self
            .aggregate_stats(filter.distribution_period(), filter.location_id)
            .await?;
        Ok(stats.grade_distribution)
    }

    pub async fn aggregate_progress(&self, filter: &FilterState) -> Result<ProgressData> {
        let builder = self
            .request(Method::GET, "/stats/aggregate/progress")
            .query(&filter.progress_query());
        self.send_json(builder).await
    }

    pub async fn location_stats(&self, location_id: i64) -> Result<LocationStats> {
        let path = format!("/stats/location/{location_id}");
        self.send_json(self.request(Method::GET, &path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::MemoryTokenStore;
    use reqwest::header::AUTHORIZATION;

    fn client(store: MemoryTokenStore) -> ApiClient {
        ApiClient::new(ApiConfig::new("http://localhost:8000/"), Arc::new(store))
    }

    #[test]
    fn test_bearer_attached_when_token_present() {
        let api = client(MemoryTokenStore::with_token("t0ken"));
        let request = api.request(Method::GET, "/api/sessions").build().unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:8000/api/sessions");
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer t0ken"
        );
        assert_eq!(request.timeout(), Some(&DEFAULT_TIMEOUT));
    }

    #[test]
    fn test_no_header_without_token() {
        let api = client(MemoryTokenStore::new());
        let request = api.request(Method::GET, "/api/sessions").build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert!(!api.is_authenticated());
    }

    #[test]
    fn test_logout_clears_token_only_locally() {
        let api = client(MemoryTokenStore::with_token("t0ken"));
        assert!(api.is_authenticated());
        api.logout();
        assert!(!api.is_authenticated());
        let request = api.request(Method::GET, "/api/auth/me").build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }
}
