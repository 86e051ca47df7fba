//! Objects produced by an import: the atlas texture and its sprites.

use super::manifest::SpriteRect;
use super::settings::{FilterMode, Pivot, SpriteMeshType, WrapMode};
use crate::{RasterBuffer, RowOrder};

/// GPU pixel format of the atlas.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureFormat {
    /// 8-bit RGBA, 32 bits per pixel.
    Rgba32,
}

/// The decoded atlas, ready to upload.
#[derive(Clone, Debug)]
pub struct Texture {
    pub name: String,
    pub format: TextureFormat,
    pub wrap_mode: WrapMode,
    pub filter_mode: FilterMode,
    /// Whether the raster carries mipmap headroom.
    pub mipmaps: bool,
    pub linear: bool,
    raster: RasterBuffer,
}

impl Texture {
    pub(crate) fn new(
        name: impl Into<String>,
        raster: RasterBuffer,
        wrap_mode: WrapMode,
        filter_mode: FilterMode,
        linear: bool,
    ) -> Self {
        Self {
            name: name.into(),
            format: TextureFormat::Rgba32,
            wrap_mode,
            filter_mode,
            mipmaps: raster.has_mip_headroom(),
            linear,
            raster,
        }
    }

    pub fn width(&self) -> u32 {
        self.raster.width
    }

    pub fn height(&self) -> u32 {
        self.raster.height
    }

    pub fn raster(&self) -> &RasterBuffer {
        &self.raster
    }

    pub fn into_raster(self) -> RasterBuffer {
        self.raster
    }

    /// Copy the pixels under `rect` (bottom-up coordinates), bottom row first.
    ///
    /// Returns `None` if the rectangle does not fit the texture.
    pub fn region(&self, rect: SpriteRect) -> Option<Vec<u8>> {
        let bpp = self.raster.layout().bytes_per_pixel();
        let right = rect.x.checked_add(rect.width)?;
        let top = rect.y.checked_add(rect.height)?;
        if right > self.width() || top > self.height() {
            return None;
        }

        let start = rect.x as usize * bpp;
        let end = right as usize * bpp;
        let mut out = Vec::with_capacity((end - start) * rect.height as usize);
        for y in rect.y..top {
            let memory_row = match self.raster.row_order() {
                RowOrder::BottomUp => y,
                RowOrder::TopDown => self.height() - 1 - y,
            };
            out.extend_from_slice(&self.raster.row(memory_row)?[start..end]);
        }
        Some(out)
    }
}

/// A named sub-rectangle of the atlas.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub name: String,
    pub rect: SpriteRect,
    pub pivot: Pivot,
    pub pixels_per_unit: f32,
    pub mesh_type: SpriteMeshType,
}
