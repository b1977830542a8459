//! Icon group assembler
//!
//! Joins parsed group-directory entries to their raw image resources by
//! numeric id, decodes each blob, and collects the survivors into an
//! [`IconCollection`]. Per-item failure is policy, not exception: a missing
//! or undecodable image drops that one entry and never disturbs its
//! siblings.

use crate::decoder::bitmap::decode_legacy_bitmap;
use crate::decoder::directory::parse_group_directory;
use crate::decoder::models::{
    DecodedImage, GroupDirectoryEntry, IconCollection, IconGroup, IconVariant, RawGroupResource,
};
use crate::decoder::png::{decode_png, is_png};
use crate::decoder::traits::ResourceSource;
use crate::utils::config::DecodeConfig;
use crate::utils::error::{DecodeError, IconError};
use image::RgbaImage;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Decode every icon group a resource source exposes.
///
/// The only fatal outcome is the source failing to supply bytes at all; a
/// binary with no icon resources yields an empty collection, not an error.
pub fn decode_icons<S: ResourceSource>(
    source: &S,
    config: &DecodeConfig,
) -> Result<IconCollection, IconError> {
    let groups = source.group_resources()?;
    let images = source.image_resources()?;
    Ok(assemble(&groups, &images, config))
}

/// Assemble an icon collection from raw group and image resources.
///
/// Groups come out in the order supplied; variants come out in directory
/// order. With `config.parallel` set, variants decode on the rayon pool but
/// are collected back into the same deterministic order.
pub fn assemble(
    groups: &[RawGroupResource],
    images: &HashMap<u16, Vec<u8>>,
    config: &DecodeConfig,
) -> IconCollection {
    let groups = groups
        .iter()
        .map(|raw| assemble_group(raw, images, config))
        .collect();
    IconCollection { groups }
}

fn assemble_group(
    raw: &RawGroupResource,
    images: &HashMap<u16, Vec<u8>>,
    config: &DecodeConfig,
) -> IconGroup {
    let entries = parse_group_directory(&raw.data);

    let variants: Vec<IconVariant> = if config.parallel {
        use rayon::prelude::*;
        entries
            .par_iter()
            .filter_map(|entry| decode_entry(*entry, images))
            .collect()
    } else {
        entries
            .iter()
            .filter_map(|entry| decode_entry(*entry, images))
            .collect()
    };

    debug!(
        "assembled group {}: {} of {} entries decoded",
        raw.id,
        variants.len(),
        entries.len()
    );

    IconGroup {
        group_id: raw.id,
        group_name: raw.name.clone(),
        variants,
    }
}

/// Resolve one directory entry against the image map and decode it.
/// Returns `None` for every recoverable failure.
fn decode_entry(
    entry: GroupDirectoryEntry,
    images: &HashMap<u16, Vec<u8>>,
) -> Option<IconVariant> {
    let raw = match images.get(&entry.image_id) {
        Some(raw) => raw,
        None => {
            debug!("no image resource with id {}; dropping entry", entry.image_id);
            return None;
        }
    };

    let from_png = is_png(raw);
    let raster = match decode_image(raw) {
        Ok(raster) => raster,
        Err(e) => {
            debug!("image resource {} undecodable: {}", entry.image_id, e);
            return None;
        }
    };

    if from_png
        && (raster.width() != u32::from(entry.width) || raster.height() != u32::from(entry.height))
    {
        // The PNG header wins; the directory entry was lying.
        warn!(
            "image resource {}: PNG is {}x{} but directory entry declares {}x{}",
            entry.image_id,
            raster.width(),
            raster.height(),
            entry.width,
            entry.height
        );
    }

    Some(IconVariant {
        entry,
        image: DecodedImage {
            width: raster.width(),
            height: raster.height(),
            bit_depth: entry.bit_count,
            source_byte_size: entry.bytes_in_resource,
            source_image_id: entry.image_id,
            pixels: raster,
        },
    })
}

/// Route a raw image resource to the PNG or legacy bitmap decoder.
pub fn decode_image(data: &[u8]) -> Result<RgbaImage, DecodeError> {
    if is_png(data) {
        decode_png(data)
    } else {
        decode_legacy_bitmap(data)
    }
}
