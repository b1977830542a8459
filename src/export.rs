//! PNG export for decoded icons
//!
//! Thin downstream layer over the core decoder: re-encodes RGBA rasters as
//! standalone PNG files. File naming follows the `{name}_{w}x{h}.png`
//! convention so a bulk export of a whole library is self-describing.

use crate::decoder::models::{DecodedImage, IconCollection};
use crate::utils::error::IconError;
use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use std::fs;
use std::path::Path;
use tracing::info;

impl DecodedImage {
    /// Re-encode this raster as a standalone PNG.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, IconError> {
        let mut out = Vec::new();
        let encoder = PngEncoder::new(&mut out);
        encoder.write_image(
            self.pixels.as_raw(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )?;
        Ok(out)
    }

    /// Write this raster to `path` as a PNG file.
    pub fn write_png(&self, path: &Path) -> Result<(), IconError> {
        fs::write(path, self.to_png_bytes()?)?;
        Ok(())
    }
}

/// Export every variant of every group as PNG files under `dir`.
///
/// Files are named `{group-name-or-icon_<id>}_{w}x{h}.png`. Returns the
/// number of files written; the directory must already exist.
pub fn export_collection(collection: &IconCollection, dir: &Path) -> Result<usize, IconError> {
    let mut written = 0;

    for group in collection {
        let base = group.display_name();
        for variant in &group.variants {
            let filename = format!(
                "{}_{}x{}.png",
                base, variant.image.width, variant.image.height
            );
            variant.image.write_png(&dir.join(filename))?;
            written += 1;
        }
    }

    info!("exported {} icon(s) to {}", written, dir.display());
    Ok(written)
}
