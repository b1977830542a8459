pub mod assembler;
pub mod bitmap;
mod bytes;
pub mod directory;
pub mod memory;
pub mod models;
pub mod png;
pub mod traits;

pub use assembler::{assemble, decode_icons, decode_image};
pub use directory::parse_group_directory;
pub use memory::MemorySource;
pub use models::{
    DecodedImage, GroupDirectoryEntry, GroupManifest, IconCollection, IconGroup, IconVariant,
    RawGroupResource,
};
pub use traits::ResourceSource;
