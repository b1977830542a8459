//! Icoharvest library
//!
//! Decodes RT_GROUP_ICON / RT_ICON resources pulled out of Windows-format
//! binaries (.icl, .dll, .exe) into resolution-indexed collections of RGBA
//! images. Resource-tree traversal is not done here; a [`ResourceSource`]
//! implementation supplies the raw bytes and this crate turns them into
//! [`IconCollection`]s.

pub mod decoder;
pub mod export;
pub mod utils;

// Re-export main types for easier use
pub use decoder::{
    assemble, decode_icons, parse_group_directory, DecodedImage, GroupDirectoryEntry,
    IconCollection, IconGroup, IconVariant, MemorySource, RawGroupResource, ResourceSource,
};
pub use utils::{DecodeConfig, DecodeError, IconError};
