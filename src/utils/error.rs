//! Error handling for Icoharvest
//!
//! Two severities exist: [`IconError`] is fatal to a whole decode attempt
//! (the resource source could not supply bytes, or an export could not be
//! written); [`DecodeError`] covers one malformed image and is always
//! recoverable: the assembler drops that item and continues.

use thiserror::Error;

/// Whole-operation errors surfaced to the caller.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to read icon resources: {0}")]
    Source(#[from] anyhow::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Per-image decode failures. These never abort sibling images or groups;
/// the failing image is silently omitted from its group.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("resource too small for a bitmap header ({0} bytes)")]
    HeaderTooSmall(usize),

    #[error("invalid bitmap geometry ({width}x{height})")]
    BadGeometry { width: i32, height: i32 },

    #[error("declared palette does not fit a bitmap file layout")]
    LayoutOverflow,

    #[error("raster decode failed: {0}")]
    Raster(#[from] image::ImageError),
}
