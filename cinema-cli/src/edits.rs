//! Parsing of `--edit` values and applying them to a video.
//!
//! Edits are applied in the order they appear on the command line, because
//! each geometric filter operates on the output of the previous one.

use cinema_core::{Video, parse_time_offset};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// One edit requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Trim { start: Duration, end: Duration },
    Start(Duration),
    End(Duration),
    Size { width: i64, height: i64 },
    Crop {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    },
    Fps(i32),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid edit '{input}': {reason}")]
pub struct ParseEditError {
    input: String,
    reason: String,
}

impl ParseEditError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl Edit {
    /// Applies the edit to `video`.
    pub fn apply(&self, video: &mut Video) {
        match *self {
            Edit::Trim { start, end } => {
                if !video.trim(start, end) {
                    log::warn!(
                        "Ignoring trim with start {:?} after end {:?}",
                        start,
                        end
                    );
                }
            }
            Edit::Start(start) => video.set_start(start),
            Edit::End(end) => video.set_end(end),
            Edit::Size { width, height } => video.set_size(width, height),
            Edit::Crop {
                x,
                y,
                width,
                height,
            } => video.crop(x, y, width, height),
            Edit::Fps(fps) => video.set_fps(fps),
        }
    }
}

impl FromStr for Edit {
    type Err = ParseEditError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (name, value) = input
            .split_once('=')
            .ok_or_else(|| ParseEditError::new(input, "expected NAME=VALUE"))?;

        match name.trim() {
            "trim" => {
                let (start, end) = value
                    .split_once("..")
                    .ok_or_else(|| ParseEditError::new(input, "expected START..END"))?;
                Ok(Edit::Trim {
                    start: parse_time(input, start)?,
                    end: parse_time(input, end)?,
                })
            }
            "start" => Ok(Edit::Start(parse_time(input, value)?)),
            "end" => Ok(Edit::End(parse_time(input, value)?)),
            "size" | "scale" => {
                let (width, height) = value
                    .split_once('x')
                    .ok_or_else(|| ParseEditError::new(input, "expected WIDTHxHEIGHT"))?;
                Ok(Edit::Size {
                    width: parse_int(input, width)?,
                    height: parse_int(input, height)?,
                })
            }
            "crop" => parse_crop(input, value),
            "fps" => Ok(Edit::Fps(parse_int(input, value)?)),
            other => Err(ParseEditError::new(
                input,
                format!("unknown edit '{other}', expected trim, start, end, size, crop or fps"),
            )),
        }
    }
}

// Accepts X,Y,W,H or the geometry form WxH+X+Y.
fn parse_crop(input: &str, value: &str) -> Result<Edit, ParseEditError> {
    if let Some((size, offset)) = value.split_once('+') {
        let (width, height) = size
            .split_once('x')
            .ok_or_else(|| ParseEditError::new(input, "expected WxH+X+Y"))?;
        let (x, y) = offset
            .split_once('+')
            .ok_or_else(|| ParseEditError::new(input, "expected WxH+X+Y"))?;
        return Ok(Edit::Crop {
            x: parse_int(input, x)?,
            y: parse_int(input, y)?,
            width: parse_int(input, width)?,
            height: parse_int(input, height)?,
        });
    }

    let parts: Vec<&str> = value.split(',').collect();
    match parts.as_slice() {
        [x, y, width, height] => Ok(Edit::Crop {
            x: parse_int(input, x)?,
            y: parse_int(input, y)?,
            width: parse_int(input, width)?,
            height: parse_int(input, height)?,
        }),
        _ => Err(ParseEditError::new(input, "expected X,Y,W,H")),
    }
}

fn parse_time(input: &str, value: &str) -> Result<Duration, ParseEditError> {
    parse_time_offset(value).ok_or_else(|| {
        ParseEditError::new(
            input,
            format!("'{}' is not a non-negative time in seconds or HH:MM:SS", value.trim()),
        )
    })
}

fn parse_int<T: FromStr>(input: &str, value: &str) -> Result<T, ParseEditError> {
    value
        .trim()
        .parse()
        .map_err(|_| ParseEditError::new(input, format!("'{}' is not an integer", value.trim())))
}
