//! # webp-atlas
//!
//! WebP import for asset pipelines: probe a container header, decode it into
//! an RGBA raster laid out for textures, and optionally slice the raster into
//! named sprites from a JSON manifest.
//!
//! ## Decoding
//!
//! The codec is libwebp. This crate only orchestrates it: it sizes the output
//! buffer, points the codec at the last row with a negative stride so rows
//! land bottom-up (texture origin at the bottom-left), and optionally reserves
//! `ceil(size * 4 / 3)` bytes so a later pass can build mipmaps in place.
//! Every failure is returned as a [`WebpError`]; no partially decoded raster
//! is ever handed out.
//!
//! ## Importer (`import` feature, on by default)
//!
//! [`import::Importer`] reads a `.webp` file, wraps the raster in a
//! [`import::Texture`] and, when a sibling `.json` manifest exists, cuts it
//! into [`import::Sprite`]s.
//!
//! ## Non-Goals
//!
//! - Rescaling, cropping or colorspaces other than RGBA
//! - Animated WebP
//! - Generating the mipmap chain itself
//!
//! ## Usage
//!
//! ```no_run
//! use webp_atlas::{DecodeRequest, RowOrder, decode_to_raster, probe_dimensions};
//!
//! let data: &[u8] = &[]; // your WebP bytes
//!
//! let dims = probe_dimensions(data)?;
//! let raster = decode_to_raster(data, dims, false)?;
//! assert_eq!(raster.len(), dims.width as usize * dims.height as usize * 4);
//!
//! // Top-down rows, with mipmap headroom
//! let raster = DecodeRequest::new(data)
//!     .with_row_order(RowOrder::TopDown)
//!     .with_mipmaps(true)
//!     .decode()?;
//! # Ok::<(), webp_atlas::WebpError>(())
//! ```

#![deny(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod info;
mod limits;
mod pixel;
mod webp;

#[cfg(feature = "import")]
pub mod import;

// Re-exports
pub use decode::{DecodeRequest, RasterBuffer};
pub use error::{DecodeStatus, WebpError};
pub use info::{BitstreamFormat, ImageDimensions, ImageInfo};
pub use limits::Limits;
pub use pixel::{PixelLayout, RowOrder};

/// Read width and height from the container header without decoding.
///
/// Empty, truncated or unrecognized input is [`WebpError::MalformedHeader`].
pub fn probe_dimensions(data: &[u8]) -> Result<ImageDimensions, WebpError> {
    webp::probe(data)
}

/// Decode into a bottom-up RGBA raster sized for `dims`.
///
/// `dims` should come from [`probe_dimensions`]. With `mipmaps`, the buffer
/// is grown to `ceil(width * height * 4 * 4 / 3)` bytes; the extra tail is
/// left zeroed.
///
/// Memory row 0 is the bottom image row, the layout textures upload from.
/// For the top row at offset 0, decode through [`DecodeRequest`] with
/// [`RowOrder::TopDown`].
pub fn decode_to_raster(
    data: &[u8],
    dims: ImageDimensions,
    mipmaps: bool,
) -> Result<RasterBuffer, WebpError> {
    DecodeRequest::new(data)
        .with_dimensions(dims)
        .with_mipmaps(mipmaps)
        .decode()
}

/// Probe and decode with default settings.
pub fn decode(data: &[u8]) -> Result<RasterBuffer, WebpError> {
    DecodeRequest::new(data).decode()
}
