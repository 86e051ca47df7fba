use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::error::WebpError;
use crate::info::ImageDimensions;
use crate::limits::Limits;
use crate::pixel::{PixelLayout, RowOrder};
use crate::webp::{self, DecodeOptions};

/// Builder for a single WebP decode.
///
/// Defaults: dimensions probed from the header, no limits, no mipmap
/// headroom, [`RowOrder::BottomUp`], threaded decoding.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    dimensions: Option<ImageDimensions>,
    limits: Option<&'a Limits>,
    mipmaps: bool,
    row_order: RowOrder,
    threads: bool,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            dimensions: None,
            limits: None,
            mipmaps: false,
            row_order: RowOrder::BottomUp,
            threads: true,
        }
    }

    /// Use dimensions from an earlier probe instead of probing again.
    ///
    /// They must match the bitstream, otherwise decoding fails with
    /// [`WebpError::DimensionsMismatch`].
    pub fn with_dimensions(mut self, dims: ImageDimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Reserve `ceil(size * 4 / 3)` bytes so a mipmap chain can be built in place.
    pub fn with_mipmaps(mut self, mipmaps: bool) -> Self {
        self.mipmaps = mipmaps;
        self
    }

    pub fn with_row_order(mut self, row_order: RowOrder) -> Self {
        self.row_order = row_order;
        self
    }

    /// Hint the codec to use worker threads. Output is identical either way.
    pub fn with_threads(mut self, threads: bool) -> Self {
        self.threads = threads;
        self
    }

    pub fn decode(self) -> Result<RasterBuffer, WebpError> {
        let dims = match self.dimensions {
            Some(dims) => dims,
            None => webp::probe(self.data)?,
        };
        let options = DecodeOptions {
            mipmaps: self.mipmaps,
            row_order: self.row_order,
            threads: self.threads,
        };
        webp::decode(self.data, dims, options, self.limits)
    }
}

/// Decoded RGBA raster, owned by the caller.
///
/// The allocation is `width * height * 4` bytes, followed by zeroed mipmap
/// headroom when it was requested. Rows are stored in [`Self::row_order`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterBuffer {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    row_order: RowOrder,
    stride: usize,
    image_len: usize,
}

impl RasterBuffer {
    pub(crate) fn owned(
        pixels: Vec<u8>,
        dims: ImageDimensions,
        row_order: RowOrder,
        stride: usize,
        image_len: usize,
    ) -> Self {
        debug_assert!(image_len <= pixels.len());
        Self {
            pixels,
            width: dims.width,
            height: dims.height,
            row_order,
            stride,
            image_len,
        }
    }

    pub fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.width, self.height)
    }

    pub fn layout(&self) -> PixelLayout {
        PixelLayout::Rgba8
    }

    pub fn row_order(&self) -> RowOrder {
        self.row_order
    }

    /// Bytes per memory row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The whole allocation, mipmap headroom included.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable access to the whole allocation, for a downstream mipmap pass.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Just the decoded image, without headroom.
    pub fn image_bytes(&self) -> &[u8] {
        &self.pixels[..self.image_len]
    }

    /// Memory row `index`, counted in [`Self::row_order`].
    pub fn row(&self, index: u32) -> Option<&[u8]> {
        if index >= self.height {
            return None;
        }
        let start = index as usize * self.stride;
        self.pixels.get(start..start + self.stride)
    }

    /// Length of the whole allocation.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Bytes reserved after the image for mipmaps.
    pub fn headroom(&self) -> usize {
        self.pixels.len() - self.image_len
    }

    pub fn has_mip_headroom(&self) -> bool {
        self.headroom() > 0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.pixels
    }

    /// Reinterpret the image (headroom excluded) as typed RGBA pixels.
    #[cfg(feature = "rgb")]
    pub fn as_pixels(&self) -> &[rgb::RGBA8] {
        self.image_bytes().as_pixels()
    }

    /// Zero-copy view as an [`imgref::ImgRef`], rows in [`Self::row_order`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGBA8> {
        imgref::ImgRef::new(self.as_pixels(), self.width as usize, self.height as usize)
    }

    /// Copy the image into an [`imgref::ImgVec`], rows in [`Self::row_order`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGBA8> {
        imgref::ImgVec::new(
            self.as_pixels().to_vec(),
            self.width as usize,
            self.height as usize,
        )
    }
}
