//! Output buffer geometry: size, stride and where the codec starts writing.
//!
//! All arithmetic is checked; anything that does not fit is reported as
//! [`WebpError::DimensionsTooLarge`].

use crate::error::WebpError;
use crate::info::ImageDimensions;
use crate::pixel::{PixelLayout, RowOrder};

/// Buffer length with room for a mipmap chain: `ceil(len * 4 / 3)`.
///
/// The downstream mipmap generator expects exactly this size; it is not
/// guaranteed to be the tightest bound for every image shape.
pub(crate) fn with_mip_headroom(len: usize) -> Option<usize> {
    Some(len.checked_mul(4)?.checked_add(2)? / 3)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct OutputLayout {
    width: u32,
    height: u32,
    stride: usize,
    image_len: usize,
    buffer_len: usize,
    first_row_offset: usize,
    codec_stride: i32,
}

impl OutputLayout {
    pub(crate) fn new(
        dims: ImageDimensions,
        order: RowOrder,
        mipmaps: bool,
    ) -> Result<Self, WebpError> {
        if !dims.is_valid() {
            return Err(WebpError::MalformedHeader);
        }
        let ImageDimensions { width, height } = dims;
        let too_large = || WebpError::DimensionsTooLarge { width, height };

        let stride = (width as usize)
            .checked_mul(PixelLayout::Rgba8.bytes_per_pixel())
            .ok_or_else(too_large)?;
        let signed_stride = i32::try_from(stride).map_err(|_| too_large())?;
        i32::try_from(height).map_err(|_| too_large())?;

        let image_len = stride
            .checked_mul(height as usize)
            .ok_or_else(too_large)?;
        let buffer_len = if mipmaps {
            with_mip_headroom(image_len).ok_or_else(too_large)?
        } else {
            image_len
        };

        let (first_row_offset, codec_stride) = match order {
            // `height >= 1` and `stride * height` fit, so this cannot overflow.
            RowOrder::BottomUp => ((height as usize - 1) * stride, -signed_stride),
            RowOrder::TopDown => (0, signed_stride),
        };

        Ok(Self {
            width,
            height,
            stride,
            image_len,
            buffer_len,
            first_row_offset,
            codec_stride,
        })
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row in memory (always positive).
    pub(crate) fn stride(&self) -> usize {
        self.stride
    }

    /// Bytes covered by the decoded image, `width * height * 4`.
    pub(crate) fn image_len(&self) -> usize {
        self.image_len
    }

    /// Bytes to allocate, mipmap headroom included.
    pub(crate) fn buffer_len(&self) -> usize {
        self.buffer_len
    }

    /// Offset of the memory row that receives the codec's first image row.
    pub(crate) fn first_row_offset(&self) -> usize {
        self.first_row_offset
    }

    /// Signed stride handed to the codec; negative for bottom-up.
    pub(crate) fn codec_stride(&self) -> i32 {
        self.codec_stride
    }
}
