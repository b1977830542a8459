//! PNG passthrough decoder
//!
//! Vista-era icons store their large sizes (commonly 256x256) as whole PNG
//! files inside the RT_ICON resource. Those are handed to the PNG codec
//! untouched; the PNG's own header dimensions are authoritative, even when
//! the group directory entry disagrees.

use crate::utils::error::DecodeError;
use image::RgbaImage;

/// The 8-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// True when the resource is an embedded PNG rather than a legacy DIB.
pub fn is_png(data: &[u8]) -> bool {
    data.len() >= PNG_SIGNATURE.len() && data[..PNG_SIGNATURE.len()] == PNG_SIGNATURE
}

/// Decode an embedded PNG resource into an RGBA raster.
pub fn decode_png(data: &[u8]) -> Result<RgbaImage, DecodeError> {
    let img = image::load_from_memory_with_format(data, image::ImageFormat::Png)?;
    Ok(img.to_rgba8())
}
