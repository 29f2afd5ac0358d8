use std::time::Duration;
use url::form_urlencoded;

/// Percent-encodes a single query value using form-urlencoded rules.
///
/// Reserved characters such as `,`, `:` and `+` are escaped; spaces become `+`.
pub fn encode_query_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();
    let seconds = total_ms / 1000;
    let millis = total_ms % 1000;
    format!("{seconds}.{millis:03}s")
}
