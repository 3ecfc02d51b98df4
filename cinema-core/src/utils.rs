//! Utility functions for converting and formatting time values.
//!
//! ffprobe reports durations as decimal seconds and ffmpeg expects offsets in
//! the same form, so these helpers sit on both sides of the `Duration` type.

use std::time::Duration;

/// Converts probed seconds into a `Duration`, rounding half up to the nearest
/// nanosecond. Returns None for negative or non-finite input.
#[must_use]
pub fn duration_from_secs(secs: f64) -> Option<Duration> {
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    let nanos = secs * 1_000_000_000.0 + 0.5;
    if nanos >= u64::MAX as f64 {
        return None;
    }
    Some(Duration::from_nanos(nanos as u64))
}

/// Formats a duration as seconds with the shortest decimal representation:
/// no exponent and no trailing zeros (e.g. `10`, `1.5`, `0.001`).
#[must_use]
pub fn format_seconds(duration: Duration) -> String {
    format!("{}", duration.as_secs_f64())
}

/// Formats a duration as HH:MM:SS.mmm (e.g. 3725.5s -> "01:02:05.500").
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    let millis = duration.subsec_millis();
    format!("{hours:02}:{minutes:02}:{secs:02}.{millis:03}")
}

/// Parses FFmpeg time string (HH:MM:SS.MS) to seconds. Returns None if invalid
/// or if any field is negative.
#[must_use]
pub fn parse_ffmpeg_time(time: &str) -> Option<f64> {
    let parts: Vec<&str> = time.split(':').collect();
    if parts.len() == 3 {
        let hours = parse_time_field(parts[0])?;
        let minutes = parse_time_field(parts[1])?;
        let seconds = parse_time_field(parts[2])?;
        Some(hours * 3600.0 + minutes * 60.0 + seconds)
    } else {
        None
    }
}

// A leading '-' is refused outright so that "-0" is not accepted as zero.
fn parse_time_field(field: &str) -> Option<f64> {
    if field.starts_with('-') {
        return None;
    }
    let value = field.parse::<f64>().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Parses either plain seconds (`12.5`) or an FFmpeg timestamp (`00:00:12.5`)
/// into a `Duration`. Negative and non-finite values are rejected.
#[must_use]
pub fn parse_time_offset(value: &str) -> Option<Duration> {
    let value = value.trim();
    let secs = if value.contains(':') {
        parse_ffmpeg_time(value)?
    } else {
        parse_time_field(value)?
    };
    duration_from_secs(secs)
}
