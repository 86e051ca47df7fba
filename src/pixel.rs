/// Pixel memory layout of a decoded raster.
///
/// The decoder always targets interleaved RGBA; the enum exists so callers
/// can match on the layout the same way they would for other codecs.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// 4 channels, 8-bit RGBA.
    Rgba8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgba8 => 4,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        match self {
            Self::Rgba8 => 4,
        }
    }
}

/// Order in which image rows are laid out in the output buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RowOrder {
    /// Memory row 0 holds the bottom image row (texture origin at bottom-left).
    ///
    /// The codec writes through a negative stride starting at the last
    /// memory row, so no separate flip pass is needed.
    #[default]
    BottomUp,
    /// Memory row 0 holds the top image row, as the codec emits it natively.
    TopDown,
}
