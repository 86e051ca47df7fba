//! Per-asset import settings, serialized alongside the asset.

use serde::{Deserialize, Serialize};

use crate::Limits;

/// How texture coordinates outside `[0, 1]` are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    Repeat,
    #[default]
    Clamp,
    Mirror,
    MirrorOnce,
}

/// Texture sampling filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    #[default]
    Point,
    Bilinear,
    Trilinear,
}

/// Mesh generated for each sprite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpriteMeshType {
    /// A quad covering the whole rectangle.
    #[default]
    FullRect,
    /// A mesh hugging the opaque pixels.
    Tight,
}

/// Sprite pivot in normalized rectangle coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pivot {
    pub x: f32,
    pub y: f32,
}

impl Default for Pivot {
    fn default() -> Self {
        Self { x: 0.5, y: 0.5 }
    }
}

/// Settings applied to every `.webp` import.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    pub pixels_per_unit: f32,
    pub sprite_mesh_type: SpriteMeshType,
    pub pivot: Pivot,
    pub wrap_mode: WrapMode,
    pub filter_mode: FilterMode,
    /// Reserve mipmap headroom in the decoded raster.
    pub generate_mipmaps: bool,
    /// Pixel data is linear rather than sRGB.
    pub linear: bool,
    /// Reject atlases with more pixels than this.
    pub max_pixels: Option<u64>,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            pixels_per_unit: 100.0,
            sprite_mesh_type: SpriteMeshType::FullRect,
            pivot: Pivot::default(),
            wrap_mode: WrapMode::Clamp,
            filter_mode: FilterMode::Point,
            generate_mipmaps: false,
            linear: true,
            max_pixels: None,
        }
    }
}

impl ImportSettings {
    pub(crate) fn limits(&self) -> Limits {
        Limits {
            max_pixels: self.max_pixels,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings: ImportSettings =
            serde_json::from_str(r#"{ "wrap_mode": "repeat", "pixels_per_unit": 32 }"#).unwrap();
        assert_eq!(settings.wrap_mode, WrapMode::Repeat);
        assert_eq!(settings.pixels_per_unit, 32.0);
        assert_eq!(settings.filter_mode, FilterMode::Point);
        assert_eq!(settings.pivot, Pivot { x: 0.5, y: 0.5 });
        assert!(settings.linear);
        assert!(!settings.generate_mipmaps);
    }

    #[test]
    fn settings_roundtrip() {
        let settings = ImportSettings {
            sprite_mesh_type: SpriteMeshType::Tight,
            filter_mode: FilterMode::Bilinear,
            max_pixels: Some(4096),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains(r#""sprite_mesh_type":"tight""#));
        let back: ImportSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
        assert_eq!(back.limits().max_pixels, Some(4096));
    }
}
