use crate::decoder::models::RawGroupResource;
use anyhow::Result;
use std::collections::HashMap;

/// Seam to the resource-tree reader that walks the host binary.
///
/// This trait isolates the decoder from the container format (PE, NE, a raw
/// dump on disk, a test fixture). Implementations hand over raw bytes keyed
/// by numeric id; everything after that is pure decoding.
///
/// When a binary carries several language variants under one image id, the
/// implementation must pick one deterministically before exposing it here;
/// which one is its policy, not the decoder's.
pub trait ResourceSource {
    /// All RT_GROUP_ICON resources, in the order they appear in the binary.
    fn group_resources(&self) -> Result<Vec<RawGroupResource>>;

    /// All RT_ICON resources, keyed by numeric id.
    fn image_resources(&self) -> Result<HashMap<u16, Vec<u8>>>;
}
