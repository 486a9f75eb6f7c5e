use chrono::DateTime;

/// Render an archive timestamp for display. The export stores RFC 3339
/// strings; anything unparseable passes through as-is.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}
