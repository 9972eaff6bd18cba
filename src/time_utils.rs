use chrono::{DateTime, SecondsFormat, Utc};

/// Current UTC time.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// ISO 8601 timestamp with second precision and a `Z` suffix.
pub fn to_iso8601(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Timestamp for feedback records and style profiles.
pub fn now_iso8601() -> String {
    to_iso8601(&now())
}
