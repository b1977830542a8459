//! Legacy icon bitmap decoder
//!
//! An RT_ICON resource that is not an embedded PNG is a headerless DIB: a
//! BITMAPINFOHEADER, an optional palette, then two stacked bitmaps back to
//! back: the XOR (color) bitmap and a 1-bit-per-pixel AND (transparency)
//! mask. The header's height field covers both stacked bitmaps, so the true
//! image height is half the declared value.
//!
//! The decode strategy mirrors what icon viewers have always done: patch the
//! height, prepend a synthetic 14-byte BMP file header, hand the result to a
//! regular BMP codec, then punch the AND mask into the alpha channel.

use crate::decoder::bytes::{read_i32, read_u16, read_u32};
use crate::utils::error::DecodeError;
use image::RgbaImage;
use tracing::debug;

/// BITMAPFILEHEADER: "BM", size u32, two reserved u16s, pixel offset u32.
const FILE_HEADER_LEN: usize = 14;
/// Smallest input this decoder accepts: a full BITMAPINFOHEADER, since the
/// colors-used field sits at offset 32.
const MIN_INFO_HEADER_LEN: usize = 40;

/// Decode a raw legacy icon-image resource into an RGBA raster.
///
/// Returns a recoverable [`DecodeError`] for any malformed input; the caller
/// drops the image and moves on.
pub fn decode_legacy_bitmap(data: &[u8]) -> Result<RgbaImage, DecodeError> {
    if data.len() < MIN_INFO_HEADER_LEN {
        return Err(DecodeError::HeaderTooSmall(data.len()));
    }

    // The header's own declared size is trusted over the usual 40; some
    // resources carry BITMAPV4/V5 headers.
    let header_size = read_u32(data, 0) as usize;
    let width = read_i32(data, 4);
    let doubled_height = read_i32(data, 8);
    let bit_count = read_u16(data, 14);

    if width <= 0 || doubled_height == 0 || header_size < MIN_INFO_HEADER_LEN {
        return Err(DecodeError::BadGeometry {
            width,
            height: doubled_height,
        });
    }

    // The declared height describes XOR bitmap + AND mask stacked together.
    let true_height = (doubled_height.unsigned_abs() / 2) as usize;
    if true_height == 0 {
        return Err(DecodeError::BadGeometry {
            width,
            height: doubled_height,
        });
    }

    // Corrected header: only the height field changes.
    let mut dib = data.to_vec();
    dib[8..12].copy_from_slice(&(true_height as i32).to_le_bytes());

    // Zero colors-used at <= 8 bpp means a full palette.
    let mut colors_used = read_u32(data, 32) as usize;
    if colors_used == 0 && bit_count <= 8 {
        colors_used = 1usize << bit_count;
    }
    let palette_bytes = colors_used * 4;

    let pixel_offset = u32::try_from(FILE_HEADER_LEN + header_size + palette_bytes)
        .map_err(|_| DecodeError::LayoutOverflow)?;
    let file_size =
        u32::try_from(FILE_HEADER_LEN + dib.len()).map_err(|_| DecodeError::LayoutOverflow)?;

    // Synthesize a standalone BMP: file header + corrected DIB.
    let mut bmp = Vec::with_capacity(FILE_HEADER_LEN + dib.len());
    bmp.extend_from_slice(b"BM");
    bmp.extend_from_slice(&file_size.to_le_bytes());
    bmp.extend_from_slice(&0u16.to_le_bytes());
    bmp.extend_from_slice(&0u16.to_le_bytes());
    bmp.extend_from_slice(&pixel_offset.to_le_bytes());
    bmp.extend_from_slice(&dib);

    let mut raster = image::load_from_memory_with_format(&bmp, image::ImageFormat::Bmp)?.to_rgba8();

    // 32 bpp already carries per-pixel alpha in the color data; everything
    // below that only has the binary AND mask.
    if bit_count < 32 {
        apply_and_mask(
            &mut raster,
            data,
            header_size,
            palette_bytes,
            width as usize,
            true_height,
            bit_count,
        );
    }

    Ok(raster)
}

/// Overwrite the raster's alpha channel from the AND mask section.
///
/// Mask rows are stored bottom-up and padded to 4-byte boundaries; a set bit
/// means fully transparent. If the buffer does not reach the end of the mask
/// section the image is left fully opaque, which is not an error.
fn apply_and_mask(
    raster: &mut RgbaImage,
    data: &[u8],
    header_size: usize,
    palette_bytes: usize,
    width: usize,
    height: usize,
    bit_count: u16,
) {
    if raster.width() as usize != width || raster.height() as usize != height {
        debug!(
            "raster is {}x{} but header declares {}x{}; skipping AND mask",
            raster.width(),
            raster.height(),
            width,
            height
        );
        return;
    }

    // Both sections pad rows to 32-bit boundaries.
    let xor_stride = (width * bit_count as usize + 31) / 32 * 4;
    let mask_stride = (width + 31) / 32 * 4;
    let mask_offset = header_size + palette_bytes + xor_stride * height;

    let mask_end = match mask_offset.checked_add(mask_stride * height) {
        Some(end) => end,
        None => return,
    };
    if mask_end > data.len() {
        debug!(
            "mask section [{}, {}) exceeds resource size {}; leaving image opaque",
            mask_offset,
            mask_end,
            data.len()
        );
        return;
    }

    for y in 0..height {
        // Image row y lives at mask row height-1-y (bottom-up storage).
        let row_start = mask_offset + (height - 1 - y) * mask_stride;
        let row = &data[row_start..row_start + mask_stride];

        for x in 0..width {
            let transparent = (row[x / 8] >> (7 - (x % 8))) & 1 == 1;
            raster.get_pixel_mut(x as u32, y as u32).0[3] = if transparent { 0 } else { 255 };
        }
    }
}
