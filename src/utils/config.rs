//! Decoder configuration

use serde::{Deserialize, Serialize};

/// Knobs for one decode run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Decode a group's variants on the rayon pool. Results are always
    /// reassembled into directory order, so output is identical either way.
    pub parallel: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self { parallel: false }
    }
}
