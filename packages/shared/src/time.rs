use chrono::{DateTime, SecondsFormat, Utc};

/// Current UTC time as ISO-8601 with second precision and a `Z` suffix,
/// e.g. `2025-11-26T00:00:00Z`.
pub fn utc_now_iso8601() -> String {
    to_iso8601_seconds(Utc::now())
}

/// Format a UTC instant as ISO-8601 with second precision and a `Z` suffix.
pub fn to_iso8601_seconds(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
