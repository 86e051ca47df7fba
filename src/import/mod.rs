//! Asset importer for `.webp` files.
//!
//! Reads the file, decodes it bottom-up into an RGBA32 [`Texture`] named
//! `"atlas"`, and when a `.json` manifest with the same stem sits next to it,
//! slices the atlas into [`Sprite`]s. Any failure aborts the whole import.

mod error;
mod manifest;
mod settings;
mod texture;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use error::ImportError;
pub use manifest::{Frame, ManifestEntry, SpriteRect, parse_manifest, to_sprite_rect};
pub use settings::{FilterMode, ImportSettings, Pivot, SpriteMeshType, WrapMode};
pub use texture::{Sprite, Texture, TextureFormat};

use crate::{DecodeRequest, RowOrder};

/// Name of the main texture object in an [`ImportedAsset`].
pub const ATLAS_NAME: &str = "atlas";

/// Result of a successful import.
#[derive(Clone, Debug)]
pub struct ImportedAsset {
    /// The main object: the full atlas texture.
    pub main: Texture,
    /// Sprites in manifest order; empty without a manifest.
    pub sprites: Vec<Sprite>,
}

/// Location of the sprite manifest for an asset: same path, `.json` extension.
pub fn manifest_path(asset: &Path) -> PathBuf {
    asset.with_extension("json")
}

/// Imports `.webp` assets with fixed settings.
#[derive(Clone, Debug, Default)]
pub struct Importer {
    settings: ImportSettings,
}

impl Importer {
    pub fn new(settings: ImportSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ImportSettings {
        &self.settings
    }

    /// Import a file from disk, picking up its manifest if present.
    pub fn import_file(&self, path: impl AsRef<Path>) -> Result<ImportedAsset, ImportError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let manifest_path = manifest_path(path);
        let manifest = match fs::read_to_string(&manifest_path) {
            Ok(text) => {
                log::debug!("using sprite manifest {}", manifest_path.display());
                Some(text)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no sprite manifest at {}", manifest_path.display());
                None
            }
            Err(source) => {
                return Err(ImportError::Io {
                    path: manifest_path,
                    source,
                });
            }
        };

        let asset = self
            .import_bytes(&bytes, manifest.as_deref())
            .map_err(|err| match err {
                ImportError::Manifest { path: None, source } => ImportError::Manifest {
                    path: Some(manifest_path),
                    source,
                },
                other => other,
            })?;
        log::info!(
            "imported {} ({}x{}, {} sprites)",
            path.display(),
            asset.main.width(),
            asset.main.height(),
            asset.sprites.len()
        );
        Ok(asset)
    }

    /// Import from memory. `manifest` is the manifest's JSON text, if any.
    pub fn import_bytes(
        &self,
        bytes: &[u8],
        manifest: Option<&str>,
    ) -> Result<ImportedAsset, ImportError> {
        let limits = self.settings.limits();
        let dims = crate::probe_dimensions(bytes)?;
        log::debug!("probed {}x{} webp", dims.width, dims.height);

        let raster = DecodeRequest::new(bytes)
            .with_dimensions(dims)
            .with_limits(&limits)
            .with_mipmaps(self.settings.generate_mipmaps)
            .with_row_order(RowOrder::BottomUp)
            .decode()?;

        let main = Texture::new(
            ATLAS_NAME,
            raster,
            self.settings.wrap_mode,
            self.settings.filter_mode,
            self.settings.linear,
        );

        let sprites = match manifest {
            Some(text) => self.slice(&main, text)?,
            None => Vec::new(),
        };

        Ok(ImportedAsset { main, sprites })
    }

    fn slice(&self, atlas: &Texture, manifest: &str) -> Result<Vec<Sprite>, ImportError> {
        let entries = parse_manifest(manifest)?;
        if entries.is_empty() {
            log::warn!("sprite manifest for {} has no entries", atlas.name);
        }
        entries
            .into_iter()
            .map(|entry| {
                let rect = to_sprite_rect(&entry.name, entry.frame, atlas.width(), atlas.height())?;
                Ok(Sprite {
                    name: entry.name,
                    rect,
                    pivot: self.settings.pivot,
                    pixels_per_unit: self.settings.pixels_per_unit,
                    mesh_type: self.settings.sprite_mesh_type,
                })
            })
            .collect()
    }
}
