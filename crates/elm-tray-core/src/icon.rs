use std::path::Path;

use tracing::{debug, instrument};

/// Edge length of the generated placeholder icon.
pub const FALLBACK_ICON_SIZE: u32 = 64;

const FALLBACK_RGB: [u8; 3] = [30, 30, 30];

/// Decoded RGBA icon pixels, ready for the tray backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    /// Row-major RGBA8 pixels.
    pub rgba: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl IconImage {
    /// Solid dark square used when no icon file is usable.
    pub fn fallback() -> Self {
        let [r, g, b] = FALLBACK_RGB;
        let pixels = (FALLBACK_ICON_SIZE * FALLBACK_ICON_SIZE) as usize;
        let rgba = [r, g, b, u8::MAX].repeat(pixels);

        Self {
            rgba,
            width: FALLBACK_ICON_SIZE,
            height: FALLBACK_ICON_SIZE,
        }
    }
}

/// Load the icon at `path`, falling back to a generated placeholder.
///
/// Never fails: a missing or undecodable file is logged and replaced.
#[instrument]
pub fn load_icon_image(path: &Path) -> IconImage {
    match image::open(path) {
        Ok(img) => {
            let rgba = img.into_rgba8();
            let (width, height) = (rgba.width(), rgba.height());
            debug!(width, height, "Icon loaded");
            IconImage {
                rgba: rgba.into_raw(),
                width,
                height,
            }
        }
        Err(e) => {
            debug!(error = %e, "Icon unavailable, using fallback");
            IconImage::fallback()
        }
    }
}
