//! WebP probe and decode orchestration over libwebp (internal).
//!
//! Use top-level [`crate::probe_dimensions`], [`crate::decode_to_raster`] or
//! [`crate::DecodeRequest`].

#[allow(unsafe_code)]
mod ffi;
pub(crate) mod layout;

use alloc::vec;

use crate::decode::RasterBuffer;
use crate::error::WebpError;
use crate::info::{ImageDimensions, ImageInfo};
use crate::limits::Limits;
use crate::pixel::RowOrder;
use ffi::{DecoderConfig, ExternalRgba};
use layout::OutputLayout;

/// Per-call decode switches.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DecodeOptions {
    pub(crate) mipmaps: bool,
    pub(crate) row_order: RowOrder,
    pub(crate) threads: bool,
}

/// Header-only probe: width and height, no pixel buffer.
pub(crate) fn probe(data: &[u8]) -> Result<ImageDimensions, WebpError> {
    ffi::get_info(data).ok_or(WebpError::MalformedHeader)
}

pub(crate) fn probe_info(data: &[u8]) -> Result<ImageInfo, WebpError> {
    if data.is_empty() {
        return Err(WebpError::MalformedHeader);
    }
    let info = ffi::get_features(data).map_err(|_| WebpError::MalformedHeader)?;
    if !info.dimensions().is_valid() {
        return Err(WebpError::MalformedHeader);
    }
    Ok(info)
}

/// Decode `data` into a freshly allocated RGBA buffer sized for `dims`.
pub(crate) fn decode(
    data: &[u8],
    dims: ImageDimensions,
    options: DecodeOptions,
    limits: Option<&Limits>,
) -> Result<RasterBuffer, WebpError> {
    if data.is_empty() {
        return Err(WebpError::MalformedHeader);
    }
    if let Some(limits) = limits {
        limits.check_dimensions(dims)?;
    }
    let layout = OutputLayout::new(dims, options.row_order, options.mipmaps)?;
    if let Some(limits) = limits {
        limits.check_layout(&layout)?;
    }

    let mut pixels = vec![0u8; layout.buffer_len()];

    let mut config = DecoderConfig::new()?;
    config.set_threads(options.threads);
    // OutputLayout has already checked that both sides fit a c_int.
    config.set_scaled_size(dims.width as i32, dims.height as i32);

    let actual = config
        .read_features(data)
        .map_err(|status| WebpError::UnsupportedFeatures { status })?;
    if actual != dims {
        return Err(WebpError::DimensionsMismatch {
            probed: dims,
            actual,
        });
    }

    let target = ExternalRgba::new(&mut pixels, &layout)?;
    config
        .decode_into(data, target)
        .map_err(|status| WebpError::DecodeFailed { status })?;

    Ok(RasterBuffer::owned(
        pixels,
        dims,
        options.row_order,
        layout.stride(),
        layout.image_len(),
    ))
}
