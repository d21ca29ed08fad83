use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

const STATUS_OK: &str = "OK";

/// ISO-8601 local date-time, no offset. Fractional seconds only when non-zero.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self::at(Local::now().naive_local())
    }

    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

pub fn health_check() -> HealthStatus {
    HealthStatus::ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_health_status_at() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(7, 5, 3, 250)
            .unwrap();
        let status = HealthStatus::at(now);
        assert_eq!(status.status, "OK");
        assert_eq!(status.timestamp, "2024-03-09T07:05:03.250");
    }

    #[test]
    fn test_whole_seconds_have_no_fraction() {
        let now = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(HealthStatus::at(now).timestamp, "2024-12-31T23:59:59");
    }

    #[test]
    fn test_health_check_timestamp_parses() {
        let status = health_check();
        assert_eq!(status.status, "OK");
        assert!(NaiveDateTime::parse_from_str(&status.timestamp, TIMESTAMP_FORMAT).is_ok());
        assert!(!status.timestamp.contains('+'));
        assert!(!status.timestamp.ends_with('Z'));
    }

    #[test]
    fn test_timestamp_changes_over_time() {
        let first = health_check();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = health_check();
        assert_ne!(first.timestamp, second.timestamp);
    }
}
