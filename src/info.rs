use crate::error::WebpError;
use crate::webp;

/// Nominal pixel grid of a WebP image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count, widened so it cannot overflow.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Whether both sides are non-zero.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl From<(u32, u32)> for ImageDimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Compression used by the image bitstream.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitstreamFormat {
    /// Mixed, or not reported by the container (e.g. animations).
    Undefined,
    /// VP8 lossy.
    Lossy,
    /// VP8L lossless.
    Lossless,
}

/// Container metadata read without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub has_alpha: bool,
    pub has_animation: bool,
    pub format: BitstreamFormat,
}

impl ImageInfo {
    /// Probe container features (dimensions, alpha, animation, compression).
    ///
    /// Any non-OK status from the feature parser is reported as
    /// [`WebpError::MalformedHeader`].
    pub fn from_bytes(data: &[u8]) -> Result<Self, WebpError> {
        webp::probe_info(data)
    }

    pub fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.width, self.height)
    }
}
