//! Sprite sheet manifest: named frames on the atlas.
//!
//! The manifest is a JSON object mapping keys to `{ "frame": { x, y, width,
//! height } }`, optionally nested under a `"sprites"` object. Frame
//! coordinates are top-down (origin at the top-left of the atlas). Keys carry
//! a two-character packer prefix (such as `"./"`) that is stripped from the
//! sprite name.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::ImportError;

/// A manifest rectangle in top-down atlas coordinates.
///
/// Values must be JSON integers. Floats such as `10.0` and numeric strings
/// such as `"10"` are rejected as [`ImportError::InvalidSpriteEntry`], which
/// is stricter than packers that coerce any number-like value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Frame {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

#[derive(Deserialize)]
struct Entry {
    frame: Frame,
}

/// One named frame, in manifest order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestEntry {
    pub name: String,
    pub frame: Frame,
}

/// A sprite rectangle in bottom-up texture coordinates (origin bottom-left).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Parse manifest text into entries, keeping the file's order.
pub fn parse_manifest(text: &str) -> Result<Vec<ManifestEntry>, ImportError> {
    let mut root: Map<String, Value> = serde_json::from_str(text)
        .map_err(|source| ImportError::Manifest { path: None, source })?;

    let nested = matches!(root.get("sprites"), Some(Value::Object(_)));
    let entries = if nested {
        match root.remove("sprites") {
            Some(Value::Object(sprites)) => sprites,
            _ => Map::new(),
        }
    } else {
        root
    };

    entries
        .into_iter()
        .map(|(key, value)| {
            let name = sprite_name(&key)?;
            let entry: Entry =
                serde_json::from_value(value).map_err(|err| ImportError::InvalidSpriteEntry {
                    key: key.clone(),
                    reason: err.to_string(),
                })?;
            Ok(ManifestEntry {
                name,
                frame: entry.frame,
            })
        })
        .collect()
}

fn sprite_name(key: &str) -> Result<String, ImportError> {
    if key.chars().count() < 2 {
        return Err(ImportError::InvalidSpriteEntry {
            key: key.into(),
            reason: "key is shorter than its two-character prefix".into(),
        });
    }
    Ok(key.chars().skip(2).collect())
}

/// Convert a top-down frame to a bottom-up rectangle: `y' = atlas_height - height - y`.
///
/// The result must lie inside the atlas.
pub fn to_sprite_rect(
    name: &str,
    frame: Frame,
    atlas_width: u32,
    atlas_height: u32,
) -> Result<SpriteRect, ImportError> {
    let Frame {
        x,
        y,
        width,
        height,
    } = frame;
    if width <= 0 || height <= 0 {
        return Err(ImportError::InvalidSpriteEntry {
            key: name.into(),
            reason: format!("frame size {width}x{height} is not positive"),
        });
    }
    let within = |start: i64, len: i64, limit: u32| {
        start >= 0 && start.checked_add(len).is_some_and(|end| end <= i64::from(limit))
    };
    if !within(x, width, atlas_width) || !within(y, height, atlas_height) {
        return Err(ImportError::SpriteOutOfBounds {
            name: name.into(),
            x,
            y: i64::from(atlas_height).saturating_sub(height).saturating_sub(y),
            width,
            height,
            atlas_width,
            atlas_height,
        });
    }

    // 0 <= y and y + height <= atlas_height, so the flip stays in 0..atlas_height.
    let flipped_y = i64::from(atlas_height) - height - y;
    Ok(SpriteRect {
        x: x as u32,
        y: flipped_y as u32,
        width: width as u32,
        height: height as u32,
    })
}
