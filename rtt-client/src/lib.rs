//! Realtime Trains (RTT) API client.
//!
//! Builds endpoint paths from station codes, dates, and service
//! identifiers, performs authenticated GET requests against the RTT
//! JSON API, and decodes responses into typed values.
//!
//! The API surface is the [`RttApi`] trait, implemented by
//! [`RttClient`] over a real HTTP transport and by [`MockRttClient`]
//! for tests.

pub mod client;
pub mod error;
pub mod mock;
pub mod path;
pub mod types;

pub use client::{CredentialPolicy, RttApi, RttClient, RttConfig};
pub use error::RttError;
pub use mock::MockRttClient;
pub use types::{
    Lineup, LocationDetail, LocationHeader, Pair, Service, ServiceSummary, ServiceType,
};
