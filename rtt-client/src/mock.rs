//! Mock RTT client for testing without API access.
//!
//! Serves canned lineups and services as if they were live API responses,
//! either registered programmatically or loaded from JSON fixture files.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::client::RttApi;
use crate::error::RttError;
use crate::path;
use crate::types::{Lineup, Service};

/// Mock RTT client backed by in-memory data.
///
/// Performs the same pre-flight validation as
/// [`RttClient`](crate::client::RttClient), then answers from registered
/// data. Date, time, and destination parameters are ignored when looking up
/// a lineup - mock data is static.
#[derive(Debug, Clone, Default)]
pub struct MockRttClient {
    /// Lineups keyed by origin location code.
    lineups: HashMap<String, Lineup>,
    /// Services keyed by service UID.
    services: HashMap<String, Service>,
}

impl MockRttClient {
    /// Create an empty mock client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a lineup served for every search query at `origin`.
    pub fn with_lineup(mut self, origin: impl Into<String>, lineup: Lineup) -> Self {
        self.lineups.insert(origin.into(), lineup);
        self
    }

    /// Register a service served for lookups of `service_uid`.
    pub fn with_service(mut self, service_uid: impl Into<String>, service: Service) -> Self {
        self.services.insert(service_uid.into(), service);
        self
    }

    /// Create a mock client by loading lineup fixtures from a directory.
    ///
    /// Expects files named `{CODE}.json` (e.g. `MAN.json`, `EUS.json`),
    /// each containing one lineup document.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, RttError> {
        let data_dir = data_dir.as_ref();
        let mut lineups = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| RttError::Api {
            status: 0,
            message: format!("failed to read fixture directory {data_dir:?}: {e}"),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| RttError::Api {
                status: 0,
                message: format!("failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let origin = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| RttError::Api {
                    status: 0,
                    message: format!("invalid fixture filename: {path:?}"),
                })?
                .to_string();

            let json = std::fs::read_to_string(&path).map_err(|e| RttError::Api {
                status: 0,
                message: format!("failed to read {path:?}: {e}"),
            })?;

            let lineup: Lineup = serde_json::from_str(&json).map_err(|e| RttError::Json {
                message: format!("failed to parse {path:?}: {e}"),
                body: None,
            })?;

            lineups.insert(origin, lineup);
        }

        if lineups.is_empty() {
            return Err(RttError::Api {
                status: 0,
                message: format!("no lineup fixtures found in {data_dir:?}"),
            });
        }

        Ok(Self {
            lineups,
            services: HashMap::new(),
        })
    }

    /// Origins with a registered lineup.
    pub fn available_origins(&self) -> Vec<&str> {
        self.lineups.keys().map(String::as_str).collect()
    }

    fn lineup(&self, origin: &str) -> Result<Lineup, RttError> {
        self.lineups
            .get(origin)
            .cloned()
            .ok_or_else(|| RttError::Api {
                status: 404,
                message: format!("no mock lineup registered for {origin}"),
            })
    }
}

#[async_trait]
impl RttApi for MockRttClient {
    async fn get_departures(&self, origin: &str) -> Result<Lineup, RttError> {
        path::departures(origin)?;
        self.lineup(origin)
    }

    async fn get_departures_between(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Lineup, RttError> {
        path::departures_between(origin, destination)?;
        self.lineup(origin)
    }

    async fn get_services_on_date(
        &self,
        origin: &str,
        date: NaiveDate,
    ) -> Result<Lineup, RttError> {
        path::services_on_date(origin, date)?;
        self.lineup(origin)
    }

    async fn get_services_at_time(
        &self,
        origin: &str,
        at: NaiveDateTime,
    ) -> Result<Lineup, RttError> {
        path::services_at_time(origin, at)?;
        self.lineup(origin)
    }

    async fn get_service_info(
        &self,
        service_uid: &str,
        at: NaiveDateTime,
    ) -> Result<Service, RttError> {
        path::service_info(service_uid, at)?;
        self.services
            .get(service_uid)
            .cloned()
            .ok_or_else(|| RttError::Api {
                status: 404,
                message: format!("no mock service registered for {service_uid}"),
            })
    }
}
