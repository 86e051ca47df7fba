//! Binding layer over libwebp's decode API.
//!
//! Every `unsafe` call in the crate lives here. Callers only ever hand in
//! slices; raw pointers are derived from them for the duration of a single
//! foreign call.

use core::ffi::c_int;
use core::marker::PhantomData;
use core::mem::MaybeUninit;

use libwebp_sys::{
    VP8StatusCode, WEBP_CSP_MODE, WebPBitstreamFeatures, WebPDecode, WebPDecoderConfig,
    WebPGetFeatures, WebPGetInfo, WebPInitDecoderConfig, WebPRGBABuffer,
};

use super::layout::OutputLayout;
use crate::error::{DecodeStatus, WebpError};
use crate::info::{BitstreamFormat, ImageDimensions, ImageInfo};

fn status_result(status: VP8StatusCode) -> Result<(), DecodeStatus> {
    if status == VP8StatusCode::VP8_STATUS_OK {
        Ok(())
    } else {
        Err(DecodeStatus(status as i32))
    }
}

/// Read width and height from the container header.
///
/// Returns `None` when libwebp rejects the header or reports a non-positive size.
pub(crate) fn get_info(data: &[u8]) -> Option<ImageDimensions> {
    if data.is_empty() {
        return None;
    }
    let mut width: c_int = 0;
    let mut height: c_int = 0;
    // SAFETY: `data` is a live slice and its exact length is passed alongside;
    // `width`/`height` are valid for writes.
    let ok = unsafe { WebPGetInfo(data.as_ptr(), data.len(), &mut width, &mut height) };
    if ok == 0 {
        return None;
    }
    let dims = ImageDimensions::new(u32::try_from(width).ok()?, u32::try_from(height).ok()?);
    dims.is_valid().then_some(dims)
}

/// Read the full bitstream feature set.
pub(crate) fn get_features(data: &[u8]) -> Result<ImageInfo, DecodeStatus> {
    // SAFETY: `WebPBitstreamFeatures` is a plain C struct of integers, for
    // which all-zero is a valid value.
    let mut features: WebPBitstreamFeatures = unsafe { MaybeUninit::zeroed().assume_init() };
    // SAFETY: `data` is a live slice with its exact length; `features` is
    // valid for writes.
    let status = unsafe { WebPGetFeatures(data.as_ptr(), data.len(), &mut features) };
    status_result(status)?;
    Ok(ImageInfo {
        width: u32::try_from(features.width).unwrap_or(0),
        height: u32::try_from(features.height).unwrap_or(0),
        has_alpha: features.has_alpha != 0,
        has_animation: features.has_animation != 0,
        format: match features.format {
            1 => BitstreamFormat::Lossy,
            2 => BitstreamFormat::Lossless,
            _ => BitstreamFormat::Undefined,
        },
    })
}

/// Caller-owned RGBA destination, borrowed for one decode call.
///
/// Holding the `&'a mut [u8]` borrow keeps the buffer alive, unmoved and
/// unaliased until the guard is consumed by [`DecoderConfig::decode_into`].
pub(crate) struct ExternalRgba<'a> {
    first_row: *mut u8,
    stride: c_int,
    size: usize,
    width: c_int,
    height: c_int,
    _buffer: PhantomData<&'a mut [u8]>,
}

impl<'a> ExternalRgba<'a> {
    pub(crate) fn new(buffer: &'a mut [u8], layout: &OutputLayout) -> Result<Self, WebpError> {
        let too_large = || WebpError::DimensionsTooLarge {
            width: layout.width(),
            height: layout.height(),
        };
        let region = buffer.get_mut(..layout.image_len()).ok_or_else(too_large)?;
        // Rows are written at `first_row + y * stride`; with a negative stride
        // they walk back towards the start of `region`, so the pointer keeps
        // the provenance of the whole region.
        let first_row = region.as_mut_ptr().wrapping_add(layout.first_row_offset());
        Ok(Self {
            first_row,
            stride: layout.codec_stride(),
            size: layout.image_len(),
            width: c_int::try_from(layout.width()).map_err(|_| too_large())?,
            height: c_int::try_from(layout.height()).map_err(|_| too_large())?,
            _buffer: PhantomData,
        })
    }
}

/// A decoder configuration that lives for exactly one decode.
pub(crate) struct DecoderConfig(WebPDecoderConfig);

impl DecoderConfig {
    pub(crate) fn new() -> Result<Self, WebpError> {
        let mut config = MaybeUninit::<WebPDecoderConfig>::uninit();
        // SAFETY: the pointer is valid for writes of a whole config.
        if !unsafe { WebPInitDecoderConfig(config.as_mut_ptr()) } {
            return Err(WebpError::ConfigInitFailed);
        }
        // SAFETY: a successful init clears and fills every field.
        Ok(Self(unsafe { config.assume_init() }))
    }

    pub(crate) fn set_threads(&mut self, enabled: bool) {
        self.0.options.use_threads = c_int::from(enabled);
    }

    /// Request output at the probed size. `use_scaling` stays off, so the
    /// codec never rescales.
    pub(crate) fn set_scaled_size(&mut self, width: c_int, height: c_int) {
        self.0.options.scaled_width = width;
        self.0.options.scaled_height = height;
    }

    /// Parse container features into the config's input section.
    pub(crate) fn read_features(&mut self, data: &[u8]) -> Result<ImageDimensions, DecodeStatus> {
        // SAFETY: `data` is a live slice with its exact length; the input
        // section is owned by `self` and valid for writes.
        let status = unsafe { WebPGetFeatures(data.as_ptr(), data.len(), &mut self.0.input) };
        status_result(status)?;
        Ok(ImageDimensions::new(
            u32::try_from(self.0.input.width).unwrap_or(0),
            u32::try_from(self.0.input.height).unwrap_or(0),
        ))
    }

    /// Run the full decode into `target`. The codec must not allocate its
    /// own output.
    pub(crate) fn decode_into(
        mut self,
        data: &[u8],
        target: ExternalRgba<'_>,
    ) -> Result<(), DecodeStatus> {
        let output = &mut self.0.output;
        output.colorspace = WEBP_CSP_MODE::MODE_RGBA;
        output.width = target.width;
        output.height = target.height;
        output.is_external_memory = 1;
        output.u.RGBA = WebPRGBABuffer {
            rgba: target.first_row,
            stride: target.stride,
            size: target.size,
        };
        // SAFETY: `data` is a live slice with its exact length. The output
        // pointer, stride and size describe memory borrowed by `target`, which
        // outlives this call; libwebp checks `|stride| * (height - 1) +
        // width * 4 <= size` before writing.
        let status = unsafe { WebPDecode(data.as_ptr(), data.len(), &mut self.0) };
        status_result(status)
    }
}
