//! Icon-group directory parser
//!
//! An RT_GROUP_ICON resource is a 6-byte GRPICONDIR header followed by one
//! 14-byte GRPICONDIRENTRY per image variant, all little-endian. The entry
//! array is the join table from a logical icon to its RT_ICON resources.

use crate::decoder::bytes::{read_u16, read_u32};
use crate::decoder::models::GroupDirectoryEntry;
use tracing::debug;

/// GRPICONDIR: reserved u16, type u16, count u16.
pub const DIRECTORY_HEADER_LEN: usize = 6;
/// GRPICONDIRENTRY: width u8, height u8, color_count u8, reserved u8,
/// planes u16, bit_count u16, bytes_in_resource u32, image_id u16.
pub const DIRECTORY_ENTRY_LEN: usize = 14;

/// Resource-type field value for icon groups.
const RES_TYPE_ICON: u16 = 1;

/// Parse an icon-group directory into its entries, in directory order.
///
/// Degrades gracefully on malformed input: a buffer shorter than the header
/// yields an empty list, and a buffer shorter than the declared entry count
/// yields every complete 14-byte entry that fits. Neither case is an error.
pub fn parse_group_directory(data: &[u8]) -> Vec<GroupDirectoryEntry> {
    if data.len() < DIRECTORY_HEADER_LEN {
        return Vec::new();
    }

    let resource_type = read_u16(data, 2);
    if resource_type != RES_TYPE_ICON {
        // Real-world files are occasionally non-conformant here; keep going.
        debug!(
            "group directory declares resource type {} instead of {}",
            resource_type, RES_TYPE_ICON
        );
    }

    let declared_count = read_u16(data, 4) as usize;
    let mut entries = Vec::with_capacity(declared_count.min(64));

    for i in 0..declared_count {
        let off = DIRECTORY_HEADER_LEN + i * DIRECTORY_ENTRY_LEN;
        if off + DIRECTORY_ENTRY_LEN > data.len() {
            debug!(
                "group directory truncated: {} of {} declared entries present",
                entries.len(),
                declared_count
            );
            break;
        }

        entries.push(GroupDirectoryEntry {
            width: resolve_dimension(data[off]),
            height: resolve_dimension(data[off + 1]),
            color_count: data[off + 2],
            // data[off + 3] is reserved
            planes: read_u16(data, off + 4),
            bit_count: read_u16(data, off + 6),
            bytes_in_resource: read_u32(data, off + 8),
            image_id: read_u16(data, off + 12),
        });
    }

    entries
}

/// A dimension byte of 0 means 256 (too large for the 8-bit field).
fn resolve_dimension(byte: u8) -> u16 {
    if byte == 0 {
        256
    } else {
        byte as u16
    }
}
