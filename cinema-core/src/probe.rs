//! Interpretation of ffprobe's JSON output.
//!
//! Only a handful of fields are read: the first stream's dimensions and
//! optional `rotate` tag, and the container duration. A stream rotated by an
//! odd multiple of 90 degrees reports its dimensions before rotation, so width
//! and height are swapped to describe the picture as it is displayed.

use crate::error::{CoreError, CoreResult};
use crate::external::FfprobeExecutor;
use crate::utils::duration_from_secs;

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Metadata read from one probe, with dimensions in displayed orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbedMetadata {
    pub width: i64,
    pub height: i64,
    pub duration: Duration,
    /// Rotation tag of the first stream in degrees, if it carried one
    pub rotation: Option<i64>,
}

// ffprobe prints numeric tags and the duration as strings, but a JSON number
// is accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumericField {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Debug, Deserialize)]
struct ProbeDocument {
    #[serde(default)]
    streams: Vec<ProbeStream>,
    #[serde(default)]
    format: Option<ProbeFormat>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    #[serde(default)]
    width: i64,
    #[serde(default)]
    height: i64,
    #[serde(default)]
    tags: Option<StreamTags>,
}

#[derive(Debug, Deserialize)]
struct StreamTags {
    #[serde(default)]
    rotate: Option<NumericField>,
}

#[derive(Debug, Deserialize)]
struct ProbeFormat {
    #[serde(default)]
    duration: Option<NumericField>,
}

/// Runs the probe for `input_path` and interprets the result.
///
/// The tool check happens before the path is touched, so a missing ffprobe
/// is reported as `ToolNotFound` even when the file does not exist either.
pub fn probe_metadata<E: FfprobeExecutor>(
    executor: &E,
    input_path: &Path,
) -> CoreResult<ProbedMetadata> {
    executor.ensure_available()?;

    std::fs::metadata(input_path).map_err(|e| CoreError::FileNotFound {
        path: input_path.display().to_string(),
        reason: e.to_string(),
    })?;

    let output = executor.probe(input_path)?;
    let metadata = parse_probe_output(&output, input_path)?;

    log::debug!(
        "Probed {}: {}x{}, duration {:?}, rotation {:?}",
        input_path.display(),
        metadata.width,
        metadata.height,
        metadata.duration,
        metadata.rotation
    );
    Ok(metadata)
}

/// Interprets a raw ffprobe JSON document describing `input_path`.
pub fn parse_probe_output(output: &[u8], input_path: &Path) -> CoreResult<ProbedMetadata> {
    let document: ProbeDocument = serde_json::from_slice(output)
        .map_err(|e| CoreError::MalformedMetadata(e.to_string()))?;

    let stream = document
        .streams
        .first()
        .ok_or_else(|| CoreError::NoStreams(input_path.display().to_string()))?;

    let duration = parse_duration(
        document
            .format
            .as_ref()
            .and_then(|format| format.duration.as_ref()),
    )?;

    let rotation = stream
        .tags
        .as_ref()
        .and_then(|tags| tags.rotate.as_ref())
        .map(parse_rotation)
        .transpose()?;

    let (width, height) = displayed_dimensions(stream.width, stream.height, rotation);

    Ok(ProbedMetadata {
        width,
        height,
        duration,
        rotation,
    })
}

/// Swaps width and height when `rotation` is an odd multiple of 90 degrees.
#[must_use]
pub fn displayed_dimensions(width: i64, height: i64, rotation: Option<i64>) -> (i64, i64) {
    match rotation {
        Some(degrees) if (degrees / 90) % 2 != 0 => (height, width),
        _ => (width, height),
    }
}

fn parse_duration(field: Option<&NumericField>) -> CoreResult<Duration> {
    let secs = match field {
        Some(NumericField::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|e| CoreError::InvalidDuration(format!("{text:?}: {e}")))?,
        Some(NumericField::Number(number)) => number.as_f64().ok_or_else(|| {
            CoreError::InvalidDuration(format!("{number} is not representable"))
        })?,
        None => {
            return Err(CoreError::InvalidDuration(
                "format.duration is missing".to_string(),
            ));
        }
    };

    duration_from_secs(secs).ok_or_else(|| {
        CoreError::InvalidDuration(format!("{secs} is not a non-negative number of seconds"))
    })
}

fn parse_rotation(field: &NumericField) -> CoreResult<i64> {
    match field {
        NumericField::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|e| CoreError::InvalidRotation(format!("{text:?}: {e}"))),
        NumericField::Number(number) => number
            .as_i64()
            .ok_or_else(|| CoreError::InvalidRotation(format!("{number} is not an integer"))),
    }
}
