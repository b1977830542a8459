//! In-memory resource source
//!
//! Backs tests and embedding callers that already hold the raw resource
//! blobs (for example, dumped out of a binary by an external tool).

use crate::decoder::models::RawGroupResource;
use crate::decoder::traits::ResourceSource;
use anyhow::Result;
use std::collections::HashMap;

/// A [`ResourceSource`] over byte blobs held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    groups: Vec<RawGroupResource>,
    images: HashMap<u16, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group resource; groups keep insertion order.
    pub fn add_group(&mut self, id: u16, name: Option<&str>, data: Vec<u8>) -> &mut Self {
        self.groups.push(RawGroupResource {
            id,
            name: name.map(str::to_string),
            data,
        });
        self
    }

    /// Insert an image resource. Inserting the same id twice replaces the
    /// earlier blob; a caller juggling language variants decides which one
    /// to keep before calling this.
    pub fn insert_image(&mut self, id: u16, data: Vec<u8>) -> &mut Self {
        self.images.insert(id, data);
        self
    }
}

impl ResourceSource for MemorySource {
    fn group_resources(&self) -> Result<Vec<RawGroupResource>> {
        Ok(self.groups.clone())
    }

    fn image_resources(&self) -> Result<HashMap<u16, Vec<u8>>> {
        Ok(self.images.clone())
    }
}
