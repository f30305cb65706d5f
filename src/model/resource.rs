//! Embedded image resources.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// PNG file signature.
const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// A PNG image embedded into the document package.
///
/// Only the IHDR header is inspected; the bytes are carried into
/// `word/media/` verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResource {
    /// Original filename (if known)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Binary data
    #[serde(skip)]
    pub data: Vec<u8>,

    /// Width in pixels
    pub width_px: u32,

    /// Height in pixels
    pub height_px: u32,
}

impl ImageResource {
    /// Create an image resource from PNG bytes.
    ///
    /// Reads the pixel dimensions from the IHDR chunk. Returns
    /// `Error::InvalidImage` if the bytes are not a PNG.
    pub fn from_png_bytes(data: Vec<u8>) -> Result<Self> {
        if data.len() < 24 || data[..8] != PNG_SIGNATURE {
            return Err(Error::InvalidImage("missing PNG signature".to_string()));
        }
        if &data[12..16] != b"IHDR" {
            return Err(Error::InvalidImage("missing IHDR chunk".to_string()));
        }

        let width_px = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
        let height_px = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
        if width_px == 0 || height_px == 0 {
            return Err(Error::InvalidImage("zero-sized image".to_string()));
        }

        Ok(Self {
            filename: None,
            data,
            width_px,
            height_px,
        })
    }

    /// Load an image resource from a PNG file.
    pub fn from_png_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let mut resource = Self::from_png_bytes(data)?;
        resource.filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        Ok(resource)
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Scale to a target width in EMUs, preserving the aspect ratio.
    ///
    /// Returns `(width, height)` extents for `wp:extent`.
    pub fn scaled_to_width(&self, width_emu: u32) -> (u32, u32) {
        let height_emu =
            (width_emu as u64 * self.height_px as u64 / self.width_px as u64) as u32;
        (width_emu, height_emu)
    }
}
