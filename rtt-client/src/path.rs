//! Relative path construction for RTT endpoints.
//!
//! Pure functions: each validates its inputs and returns the relative path
//! that [`RttClient`](crate::client::RttClient) resolves against its search
//! or service base. No path is built when validation fails.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::RttError;

/// Path for all departures from an origin station.
///
/// # Examples
///
/// ```
/// use rtt_client::path;
///
/// assert_eq!(path::departures("MAN").unwrap(), "MAN");
/// assert!(path::departures("").is_err());
/// ```
pub fn departures(origin: &str) -> Result<String, RttError> {
    if origin.is_empty() {
        return Err(RttError::EmptyLocation);
    }
    Ok(origin.to_string())
}

/// Path for departures from an origin, filtered to services calling at a
/// destination.
///
/// Fails with [`RttError::EmptyLocation`] if either code is empty, and with
/// [`RttError::OriginEqualsDestination`] if the two are the same station.
pub fn departures_between(origin: &str, destination: &str) -> Result<String, RttError> {
    if origin.is_empty() || destination.is_empty() {
        return Err(RttError::EmptyLocation);
    }
    if origin == destination {
        return Err(RttError::OriginEqualsDestination(origin.to_string()));
    }
    Ok(format!("{origin}/to/{destination}"))
}

/// Path for services at an origin on a given date: `{origin}/{YYYY}/{MM}/{DD}`.
pub fn services_on_date(origin: &str, date: NaiveDate) -> Result<String, RttError> {
    if origin.is_empty() {
        return Err(RttError::EmptyLocation);
    }
    Ok(format!("{origin}/{}", date.format("%Y/%m/%d")))
}

/// Path for services at an origin around a given time:
/// `{origin}/{YYYY}/{MM}/{DD}/{HHMM}`.
pub fn services_at_time(origin: &str, at: NaiveDateTime) -> Result<String, RttError> {
    if origin.is_empty() {
        return Err(RttError::EmptyLocation);
    }
    Ok(format!("{origin}/{}", at.format("%Y/%m/%d/%H%M")))
}

/// Path for a single-service lookup by UID and running date/time:
/// `{uid}/{YYYY}/{MM}/{DD}/{HHMM}`.
pub fn service_info(service_uid: &str, at: NaiveDateTime) -> Result<String, RttError> {
    if service_uid.is_empty() {
        return Err(RttError::EmptyLocation);
    }
    Ok(format!("{service_uid}/{}", at.format("%Y/%m/%d/%H%M")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 2, 3).unwrap()
    }

    fn datetime() -> NaiveDateTime {
        date().and_hms_opt(4, 5, 0).unwrap()
    }

    #[test]
    fn departures_path() {
        assert_eq!(departures("MAN").unwrap(), "MAN");
    }

    #[test]
    fn departures_rejects_empty() {
        assert!(matches!(departures(""), Err(RttError::EmptyLocation)));
    }

    #[test]
    fn between_path() {
        assert_eq!(departures_between("MAN", "EUS").unwrap(), "MAN/to/EUS");
    }

    #[test]
    fn between_rejects_empty() {
        assert!(matches!(
            departures_between("", "EUS"),
            Err(RttError::EmptyLocation)
        ));
        assert!(matches!(
            departures_between("MAN", ""),
            Err(RttError::EmptyLocation)
        ));
        // Two empties are an emptiness error, not an equality error
        assert!(matches!(
            departures_between("", ""),
            Err(RttError::EmptyLocation)
        ));
    }

    #[test]
    fn between_rejects_matching_stations() {
        match departures_between("MAN", "MAN") {
            Err(RttError::OriginEqualsDestination(loc)) => assert_eq!(loc, "MAN"),
            other => panic!("expected OriginEqualsDestination, got {other:?}"),
        }
    }

    #[test]
    fn on_date_path_zero_pads() {
        assert_eq!(services_on_date("MAN", date()).unwrap(), "MAN/2020/02/03");
    }

    #[test]
    fn on_date_rejects_empty() {
        assert!(matches!(
            services_on_date("", date()),
            Err(RttError::EmptyLocation)
        ));
    }

    #[test]
    fn at_time_path_zero_pads() {
        assert_eq!(
            services_at_time("MAN", datetime()).unwrap(),
            "MAN/2020/02/03/0405"
        );
    }

    #[test]
    fn at_time_rejects_empty() {
        assert!(matches!(
            services_at_time("", datetime()),
            Err(RttError::EmptyLocation)
        ));
    }

    #[test]
    fn service_info_path() {
        assert_eq!(
            service_info("W16631", datetime()).unwrap(),
            "W16631/2020/02/03/0405"
        );
    }

    #[test]
    fn service_info_rejects_empty() {
        assert!(matches!(
            service_info("", datetime()),
            Err(RttError::EmptyLocation)
        ));
    }

    #[test]
    fn late_evening_time() {
        let at = NaiveDate::from_ymd_opt(2020, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        assert_eq!(services_at_time("PAD", at).unwrap(), "PAD/2020/12/31/2359");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty origin builds a departures path equal to itself
        #[test]
        fn departures_identity(origin in "[A-Z]{3}") {
            prop_assert_eq!(departures(&origin).unwrap(), origin);
        }

        /// Matching non-empty origin and destination always fail
        #[test]
        fn matching_stations_rejected(code in "[A-Z]{3,7}") {
            prop_assert!(matches!(
                departures_between(&code, &code),
                Err(RttError::OriginEqualsDestination(_))
            ));
        }

        /// Distinct station codes always produce "{origin}/to/{destination}"
        #[test]
        fn distinct_stations_joined(origin in "[A-Z]{3}", destination in "[a-z]{3}") {
            let path = departures_between(&origin, &destination).unwrap();
            prop_assert_eq!(path, format!("{origin}/to/{destination}"));
        }

        /// Date segments are always zero-padded to fixed width
        #[test]
        fn date_segments_fixed_width(y in 2000i32..2100, m in 1u32..=12, d in 1u32..=28) {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            let path = services_on_date("MAN", date).unwrap();
            let segments: Vec<&str> = path.split('/').collect();
            prop_assert_eq!(segments.len(), 4);
            prop_assert_eq!(segments[1].len(), 4);
            prop_assert_eq!(segments[2].len(), 2);
            prop_assert_eq!(segments[3].len(), 2);
        }

        /// Time segment is always four digits
        #[test]
        fn time_segment_fixed_width(h in 0u32..24, min in 0u32..60) {
            let at = NaiveDate::from_ymd_opt(2020, 2, 3)
                .unwrap()
                .and_hms_opt(h, min, 0)
                .unwrap();
            let path = services_at_time("MAN", at).unwrap();
            let last = path.rsplit('/').next().unwrap();
            prop_assert_eq!(last.len(), 4);
            prop_assert!(last.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
