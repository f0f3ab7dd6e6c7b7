//! RTT API response DTOs.
//!
//! These types map directly to the RTT JSON API responses. Every field is
//! `Option` because RTT omits fields rather than sending null values, and
//! serialization skips `None` so a decoded value re-encodes to the same
//! document. `Serialize` support exists so fixtures and mock responses can
//! be produced from typed values.

use serde::{Deserialize, Serialize};

/// Response from a search query: services departing or passing a location,
/// optionally filtered to a destination.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lineup {
    /// The location the search was made against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationHeader>,

    /// Destination filter locations, when the search was `{origin}/to/{dest}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Vec<LocationDetail>>,

    /// Matching services, in the order RTT returned them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceSummary>>,
}

/// Shorthand description of the location used in a search query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationHeader {
    /// Human-readable station name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Three-letter customer-facing station code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crs: Option<String>,

    /// Timetable location code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiploc: Option<String>,
}

/// One service row in a [`Lineup`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSummary {
    /// How this service calls at the searched location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_detail: Option<LocationDetail>,

    /// RTT service unique identifier, e.g. "W16631".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_uid: Option<String>,

    /// Date the service runs, "YYYY-MM-DD".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_date: Option<String>,

    /// Headcode, e.g. "1A23".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub train_identity: Option<String>,

    /// Identity the service is currently running under, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_identity: Option<String>,

    /// Operator ATOC code, e.g. "VT".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atoc_code: Option<String>,

    /// Operator name, e.g. "Avanti West Coast".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atoc_name: Option<String>,

    /// Whether this is a train, bus, or ship service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,

    /// Whether the service carries passengers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_passenger: Option<bool>,

    /// Whether the service is cancelled in the plan of the day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_cancel: Option<bool>,

    /// Origin(s) of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Vec<Pair>>,

    /// Destination(s) of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Vec<Pair>>,

    /// Minutes until the service is due at the searched location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown_minutes: Option<i32>,
}

/// Response from a single-service lookup: identity, operator, and the full
/// calling pattern.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// RTT service unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_uid: Option<String>,

    /// Date the service runs, "YYYY-MM-DD".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_passenger: Option<bool>,

    /// Headcode, e.g. "1A23".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub train_identity: Option<String>,

    /// Traction, e.g. "EMU".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub train_class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleeper: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub atoc_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub atoc_name: Option<String>,

    /// Whether the service counts towards performance statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_monitored: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Vec<Pair>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Vec<Pair>>,

    /// Every location the service calls at or passes, in running order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<LocationDetail>>,

    /// Whether real-time data has been activated for this run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_activated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_identity: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_cancel: Option<bool>,
}

impl Service {
    /// Whether `other` carries different (assumed more up-to-date) data.
    pub fn fresher_than(&self, other: &Service) -> bool {
        self != other
    }
}

/// A start or end point of a service's journey.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    /// Timetable location code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiploc: Option<String>,

    /// Human-readable location name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Working timetable time, "HHMMSS".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_time: Option<String>,

    /// Public timetable time, "HHMM".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_time: Option<String>,
}

/// A calling point: one location on a service's schedule, with booked and
/// real-time arrival/departure/pass information.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_activated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiploc: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crs: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Working timetable booked arrival, "HHMMSS".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wtt_booked_arrival: Option<String>,

    /// Working timetable booked departure, "HHMMSS".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wtt_booked_departure: Option<String>,

    /// Working timetable booked pass time, for non-calling locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wtt_booked_pass: Option<String>,

    /// Public timetable booked arrival, "HHMM".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gbtt_booked_arrival: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gbtt_booked_arrival_next_day: Option<bool>,

    /// Public timetable booked departure, "HHMM".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gbtt_booked_departure: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gbtt_booked_departure_next_day: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Vec<Pair>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Vec<Pair>>,

    /// Whether the service calls here at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_call: Option<bool>,

    /// Whether the call is advertised to the public.
    #[serde(rename = "isPublicCall", skip_serializing_if = "Option::is_none")]
    pub is_public_call: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_arrival: Option<String>,

    /// True once the arrival has actually been reported, rather than estimated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_arrival_actual: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_arrival_no_report: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_arrival_next_day: Option<bool>,

    /// Lateness against the public timetable, in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_gbtt_arrival_lateness: Option<i32>,

    /// Lateness against the working timetable, in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_wtt_arrival_lateness: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_wtt_departure_lateness: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_departure: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_departure_actual: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_departure_no_report: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_departure_next_day: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_pass: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_pass_actual: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime_pass_no_report: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_confirmed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_changed: Option<bool>,

    /// Line the service takes through this location, e.g. "Fast".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_confirmed: Option<bool>,

    /// Path the service arrives on, where signalled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_confirmed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason_short_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason_long_text: Option<String>,

    /// How RTT displays this location, e.g. "CALL", "ORIGIN", "CANCELLED_CALL".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_as: Option<String>,

    /// Where the service currently is relative to this location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_location: Option<String>,
}

/// Mode of transport for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Train,
    Bus,
    Ship,
}
