use reqwest::header::HeaderValue;

/// Sent when the local timezone cannot be determined.
pub const FALLBACK_TIMEZONE: &str = "UTC";

/// Resolve the IANA timezone name reported to the backend.
///
/// A configured value wins over detection. Anything empty or unusable as a
/// header value falls through to the next candidate, ending at `UTC`.
pub fn resolve_client_timezone(configured: Option<&str>) -> String {
    configured
        .and_then(usable)
        .or_else(|| {
            iana_time_zone::get_timezone()
                .map_err(|e| tracing::debug!(error = %e, "Could not detect local timezone"))
                .ok()
                .as_deref()
                .and_then(usable)
        })
        .unwrap_or_else(|| FALLBACK_TIMEZONE.to_string())
}

fn usable(candidate: &str) -> Option<String> {
    let candidate = candidate.trim();
    if candidate.is_empty() || HeaderValue::from_str(candidate).is_err() {
        return None;
    }
    Some(candidate.to_string())
}
