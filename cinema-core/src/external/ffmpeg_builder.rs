//! FFmpeg filter expression utilities
//!
//! Geometric edits are stored as ffmpeg filter expressions and joined into a
//! single `-vf` chain at render time. Every chain ends with the same two
//! stages: sample aspect ratio normalization, then the output frame rate.

/// Expression that resizes the video to `width`x`height`.
#[must_use]
pub fn scale_filter(width: i64, height: i64) -> String {
    format!("scale={width}:{height}")
}

/// Expression that keeps the `width`x`height` rectangle whose top-left corner
/// is at (`x`, `y`). Size precedes offset in ffmpeg's crop grammar.
#[must_use]
pub fn crop_filter(x: i64, y: i64, width: i64, height: i64) -> String {
    format!("crop={width}:{height}:{x}:{y}")
}

/// Stage forcing square pixels on the output.
pub const SAR_NORMALIZATION_FILTER: &str = "setsar=1";

/// Builder for constructing video filter chains
#[derive(Debug, Clone, Default)]
pub struct VideoFilterChain {
    filters: Vec<String>,
}

impl VideoFilterChain {
    /// Creates a new empty filter chain
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter to the chain; empty expressions are ignored
    #[must_use]
    pub fn add_filter(mut self, filter: impl Into<String>) -> Self {
        let filter = filter.into();
        if !filter.is_empty() {
            self.filters.push(filter);
        }
        self
    }

    /// Adds every filter from `filters`, in order
    #[must_use]
    pub fn add_filters<I, S>(self, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        filters
            .into_iter()
            .fold(self, |chain, filter| chain.add_filter(filter))
    }

    /// Builds the user filters into a single filter string
    #[must_use]
    pub fn build(self) -> Option<String> {
        if self.filters.is_empty() {
            None
        } else {
            Some(self.filters.join(","))
        }
    }

    /// Builds the complete `-vf` value: user filters followed by `setsar=1`
    /// and `fps=fps=<fps>`.
    #[must_use]
    pub fn build_with_output_stages(self, fps: i32) -> String {
        self.add_filter(SAR_NORMALIZATION_FILTER)
            .add_filter(format!("fps=fps={fps}"))
            .build()
            .unwrap_or_default()
    }
}
