//! RTT HTTP client.
//!
//! Async methods for querying the Realtime Trains API. Handles endpoint
//! resolution, basic authentication, and decoding responses into the wire
//! model.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::RttError;
use crate::path;
use crate::types::{Lineup, Service};

/// Default root URL for the RTT JSON API.
const DEFAULT_BASE_URL: &str = "https://api.rtt.io/api/v1/json/";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Policy for attaching basic auth when a credential is empty.
///
/// RTT always requires authentication, so [`CredentialPolicy::Always`] is
/// the default; [`CredentialPolicy::SkipWhenEmpty`] exists for callers that
/// prefer an anonymous request over sending a blank `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialPolicy {
    /// Attach the Authorization header on every request.
    #[default]
    Always,
    /// Omit the Authorization header when either credential is empty.
    SkipWhenEmpty,
}

/// Configuration for the RTT client.
#[derive(Debug, Clone)]
pub struct RttConfig {
    /// RTT API account username
    pub username: String,
    /// RTT API account password
    pub password: String,
    /// Root URL the search and service endpoints are resolved against
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// When to attach basic auth
    pub credential_policy: CredentialPolicy,
}

impl RttConfig {
    /// Create a new config with the given credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            credential_policy: CredentialPolicy::default(),
        }
    }

    /// Set a custom root URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the empty-credential policy.
    pub fn with_credential_policy(mut self, policy: CredentialPolicy) -> Self {
        self.credential_policy = policy;
        self
    }
}

/// The RTT API surface.
///
/// Implemented by [`RttClient`] over a real HTTP transport and by
/// [`MockRttClient`](crate::mock::MockRttClient) for tests, so code that
/// consumes departure data can be written against `dyn RttApi`.
#[async_trait]
pub trait RttApi {
    /// All departures from an origin station.
    async fn get_departures(&self, origin: &str) -> Result<Lineup, RttError>;

    /// Departures from an origin filtered to services calling at a destination.
    async fn get_departures_between(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Lineup, RttError>;

    /// Services at an origin on a given date.
    async fn get_services_on_date(
        &self,
        origin: &str,
        date: NaiveDate,
    ) -> Result<Lineup, RttError>;

    /// Services at an origin around a given time.
    async fn get_services_at_time(
        &self,
        origin: &str,
        at: NaiveDateTime,
    ) -> Result<Lineup, RttError>;

    /// Full details of a single service by UID and running date/time.
    async fn get_service_info(
        &self,
        service_uid: &str,
        at: NaiveDateTime,
    ) -> Result<Service, RttError>;
}

/// RTT API client.
///
/// Holds the credentials, the two resolved endpoint bases, and the HTTP
/// transport. Immutable after construction; cheap to clone and safe to
/// share across tasks.
#[derive(Debug, Clone)]
pub struct RttClient {
    http: reqwest::Client,
    username: String,
    password: String,
    search: Url,
    service: Url,
    credential_policy: CredentialPolicy,
}

impl RttClient {
    /// Create a new RTT client from the given configuration.
    ///
    /// The search and service bases are derived by URL resolution against
    /// the configured root, so a root with a path (e.g. the default
    /// `/api/v1/json/`) keeps that path.
    pub fn new(config: RttConfig) -> Result<Self, RttError> {
        // Relative paths resolve against the last path segment, so the
        // root must end in a slash.
        let mut root = config.base_url;
        if !root.ends_with('/') {
            root.push('/');
        }
        let root = Url::parse(&root)?;
        let search = root.join("search/")?;
        let service = root.join("service/")?;

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            username: config.username,
            password: config.password,
            search,
            service,
            credential_policy: config.credential_policy,
        })
    }

    /// The resolved base URL for search queries.
    pub fn search_endpoint(&self) -> &Url {
        &self.search
    }

    /// The resolved base URL for single-service lookups.
    pub fn service_endpoint(&self) -> &Url {
        &self.service
    }

    fn attach_auth(&self) -> bool {
        match self.credential_policy {
            CredentialPolicy::Always => true,
            CredentialPolicy::SkipWhenEmpty => {
                !self.username.is_empty() && !self.password.is_empty()
            }
        }
    }

    /// Shared request path: GET the URL, map 401 to `AuthenticationFailed`,
    /// other error statuses to `Api`, and decode the body on success.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, RttError> {
        debug!(%url, "requesting RTT resource");

        let mut request = self.http.get(url);
        if self.attach_auth() {
            request = request.basic_auth(&self.username, Some(&self.password));
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(RttError::AuthenticationFailed);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RttError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| RttError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

#[async_trait]
impl RttApi for RttClient {
    async fn get_departures(&self, origin: &str) -> Result<Lineup, RttError> {
        let path = path::departures(origin)?;
        self.get_json(self.search.join(&path)?).await
    }

    async fn get_departures_between(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Lineup, RttError> {
        let path = path::departures_between(origin, destination)?;
        self.get_json(self.search.join(&path)?).await
    }

    async fn get_services_on_date(
        &self,
        origin: &str,
        date: NaiveDate,
    ) -> Result<Lineup, RttError> {
        let path = path::services_on_date(origin, date)?;
        self.get_json(self.search.join(&path)?).await
    }

    async fn get_services_at_time(
        &self,
        origin: &str,
        at: NaiveDateTime,
    ) -> Result<Lineup, RttError> {
        let path = path::services_at_time(origin, at)?;
        self.get_json(self.search.join(&path)?).await
    }

    async fn get_service_info(
        &self,
        service_uid: &str,
        at: NaiveDateTime,
    ) -> Result<Service, RttError> {
        let path = path::service_info(service_uid, at)?;
        self.get_json(self.service.join(&path)?).await
    }
}
