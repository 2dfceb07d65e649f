//! ISO-8601 timestamps as stored in developer records and returned by the
//! catalog (`releaseDate`).

use chrono::{DateTime, SecondsFormat, Utc};

/// Format an instant the way saved records carry it:
/// `2024-05-01T09:30:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The current instant, formatted for a new record.
pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Parse a stored or catalog timestamp to an absolute instant.
///
/// Returns `None` for anything that isn't RFC 3339.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_uses_millis_and_z_suffix() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        assert_eq!(format_timestamp(at), "2024-05-01T09:30:00.000Z");
    }

    #[test]
    fn parse_accepts_catalog_release_dates() {
        let parsed = parse_timestamp("2019-03-12T07:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2019, 3, 12, 7, 0, 0).unwrap());
    }

    #[test]
    fn parse_normalizes_offsets() {
        let parsed = parse_timestamp("2019-03-12T16:00:00+09:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2019, 3, 12, 7, 0, 0).unwrap());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
