//! Primitive encodings shared by the extension encoders.

use base64::{
    engine::general_purpose::{STANDARD as BASE64, URL_SAFE_NO_PAD as BASE64_URL},
    Engine as _,
};
use chrono::{DateTime, Utc};

/// Timestamp layout used in data forms and entity time (`yyyy-MM-ddTHH:mm:ss.SSSZ`).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Base64 with the standard alphabet and padding, no line wraps.
pub fn base64_standard(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Base64 with the URL-safe alphabet, no padding, no line wraps.
pub fn base64_url_safe(bytes: &[u8]) -> String {
    BASE64_URL.encode(bytes)
}

/// Format a UTC instant with millisecond precision.
pub fn timestamp(instant: DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Format a UTC offset in seconds as `±HH:MM`.
pub fn timezone_offset(offset_seconds: i32) -> String {
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let magnitude = offset_seconds.unsigned_abs();
    let hours = magnitude / 3600;
    let minutes = (magnitude % 3600) / 60;
    format!("{sign}{hours:02}:{minutes:02}")
}
