//! Liveness reporting for deployment health probes.
use serde::Serialize;
use time::OffsetDateTime;

use crate::constants::api::{HEALTH_STATUS, PROJECT_NAME};

/// The payload returned by the health check.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// The project this service belongs to.
    pub project: &'static str,
    /// Always the fixed success string while the process is alive.
    pub status: &'static str,
    /// When the report was produced.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Produce a report stamped with the current time.
pub fn report() -> HealthReport {
    HealthReport {
        project: PROJECT_NAME,
        status: HEALTH_STATUS,
        timestamp: OffsetDateTime::now_utc(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_rfc3339_timestamp() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["project"], "Ojasritu Wellness");
        assert_eq!(json["status"], "Backend running successfully");
        let timestamp = json["timestamp"].as_str().unwrap();
        assert!(timestamp.ends_with('Z'), "{timestamp}");
        assert!(timestamp.contains('T'), "{timestamp}");
    }
}
