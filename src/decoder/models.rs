//! Data structures for decoded icon resources

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// One raw RT_GROUP_ICON resource as supplied by the resource source.
///
/// The numeric id and optional name come from the host binary's resource
/// directory; `data` is the undecoded directory blob.
#[derive(Debug, Clone)]
pub struct RawGroupResource {
    pub id: u16,
    pub name: Option<String>,
    pub data: Vec<u8>,
}

/// One entry of a parsed icon-group directory.
///
/// Width and height are already resolved: the on-disk byte value 0 (the
/// Windows convention for 256, which does not fit an 8-bit field) is mapped
/// to 256 at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDirectoryEntry {
    pub width: u16,
    pub height: u16,
    pub color_count: u8,
    pub planes: u16,
    pub bit_count: u16,
    pub bytes_in_resource: u32,
    pub image_id: u16,
}

/// A fully decoded icon image: metadata from the directory entry plus the
/// RGBA raster. For PNG-sourced images `width`/`height` come from the PNG
/// header itself, which is authoritative over the directory entry.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u16,
    pub source_byte_size: u32,
    pub source_image_id: u16,
    pub pixels: RgbaImage,
}

impl DecodedImage {
    /// Raw RGBA bytes in row-major order, 4 bytes per pixel.
    pub fn rgba_bytes(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}

/// A directory entry paired with its successfully decoded image.
///
/// Variants are only ever built from a real raster; entries whose image
/// resource is missing or undecodable produce no variant at all.
#[derive(Debug, Clone)]
pub struct IconVariant {
    pub entry: GroupDirectoryEntry,
    pub image: DecodedImage,
}

/// One logical icon: all size/depth variants that decoded successfully,
/// in directory order. A group with zero variants is still meaningful
/// ("resource present but unusable") and is kept in the collection.
#[derive(Debug, Clone)]
pub struct IconGroup {
    pub group_id: u16,
    pub group_name: Option<String>,
    pub variants: Vec<IconVariant>,
}

impl IconGroup {
    /// Display name for the group: the resource name if present, otherwise
    /// `icon_<id>`.
    pub fn display_name(&self) -> String {
        match &self.group_name {
            Some(name) => name.clone(),
            None => format!("icon_{}", self.group_id),
        }
    }

    /// Pick the variant closest to `preferred` pixels on a side.
    ///
    /// Exact matches win; otherwise a larger variant beats a smaller one
    /// (downscaling looks better than upscaling), smallest excess first.
    pub fn best_variant_for_size(&self, preferred: u32) -> Option<&IconVariant> {
        let mut best: Option<&IconVariant> = None;
        let mut best_diff = u32::MAX;

        for variant in &self.variants {
            let side = variant.image.width.max(variant.image.height);
            if side == preferred {
                return Some(variant);
            }
            let diff = if side >= preferred {
                side - preferred
            } else {
                (preferred - side) + 1000
            };
            if diff < best_diff {
                best_diff = diff;
                best = Some(variant);
            }
        }
        best
    }

    /// Variants ordered largest-first by width, ties kept in directory order.
    pub fn variants_largest_first(&self) -> Vec<&IconVariant> {
        let mut sorted: Vec<&IconVariant> = self.variants.iter().collect();
        sorted.sort_by(|a, b| b.image.width.cmp(&a.image.width));
        sorted
    }

    /// Serializable summary of this group's decoded variants.
    pub fn manifest(&self) -> GroupManifest {
        GroupManifest {
            group_id: self.group_id,
            group_name: self.group_name.clone(),
            entries: self.variants.iter().map(|v| v.entry).collect(),
        }
    }
}

/// Metadata listing for one icon group, without pixel data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupManifest {
    pub group_id: u16,
    pub group_name: Option<String>,
    pub entries: Vec<GroupDirectoryEntry>,
}

/// All icon groups decoded from one binary, in source-encounter order.
#[derive(Debug, Clone, Default)]
pub struct IconCollection {
    pub groups: Vec<IconGroup>,
}

impl IconCollection {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IconGroup> {
        self.groups.iter()
    }

    /// Total number of decoded variants across all groups.
    pub fn total_variants(&self) -> usize {
        self.groups.iter().map(|g| g.variants.len()).sum()
    }
}

impl<'a> IntoIterator for &'a IconCollection {
    type Item = &'a IconGroup;
    type IntoIter = std::slice::Iter<'a, IconGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
