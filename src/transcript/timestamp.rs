//! Subtitle timestamp formatting.

/// Format a position in seconds as an SRT timestamp: `HH:MM:SS,mmm`.
///
/// Every component is truncated, never rounded, so `59.999` renders as
/// `00:00:59,999` and not `00:01:00,000`. Negative input is not a supported
/// position; it is clamped to zero.
pub fn format_timestamp(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let hours = (seconds / 3600.0) as u64;
    let minutes = ((seconds % 3600.0) / 60.0) as u64;
    let secs = (seconds % 60.0) as u64;
    let millis = ((seconds * 1000.0) % 1000.0) as u64;
    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}
