use crate::error::WebpError;
use crate::info::ImageDimensions;
use crate::webp::layout::OutputLayout;

/// Caps on what a decode may allocate, checked after the header probe and
/// before the output buffer exists.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the output buffer, mipmap headroom included.
    pub max_memory_bytes: Option<u64>,
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), WebpError> {
    match limit {
        Some(max) if value > max => Err(WebpError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Check probed dimensions.
    pub(crate) fn check_dimensions(&self, dims: ImageDimensions) -> Result<(), WebpError> {
        exceeds("width", u64::from(dims.width), self.max_width)?;
        exceeds("height", u64::from(dims.height), self.max_height)?;
        exceeds("pixel count", dims.pixel_count(), self.max_pixels)
    }

    /// Check the buffer a layout would allocate, mipmap headroom included.
    pub(crate) fn check_layout(&self, layout: &OutputLayout) -> Result<(), WebpError> {
        exceeds(
            "output buffer bytes",
            layout.buffer_len() as u64,
            self.max_memory_bytes,
        )
    }
}
