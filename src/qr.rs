//! QR bitmaps for the barcode payload.

use crate::PDFError;
use image::{GrayImage, Luma};
use qrcode::{Color, QrCode};

const LIGHT: Luma<u8> = Luma([255]);
const DARK: Luma<u8> = Luma([0]);

/// How a QR code is rasterized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrOptions {
    /// Target bitmap width in pixels. Each module is scaled by a whole number of
    /// pixels, so the bitmap is the largest multiple of the module count that
    /// fits, and never smaller than one pixel per module. The bitmap can come
    /// out narrower than `width` (27 px for a 25-module symbol at the default
    /// 30); it is stretched over its placement box either way.
    pub width: u32,
    /// Quiet zone around the symbol, in modules
    pub margin: u32,
}

impl Default for QrOptions {
    fn default() -> Self {
        QrOptions {
            width: 30,
            margin: 1,
        }
    }
}

/// Encode `payload` as a QR code and rasterize it to a greyscale bitmap, dark
/// modules black on a white quiet zone.
///
/// Fails if the payload is too long for any QR version.
pub fn encode(payload: &str, options: &QrOptions) -> Result<GrayImage, PDFError> {
    let code = QrCode::new(payload.as_bytes())?;
    let modules = code.width() as u32;
    let colours = code.to_colors();

    let span = modules + 2 * options.margin;
    let scale = (options.width / span).max(1);
    let size = span * scale;

    let bitmap = GrayImage::from_fn(size, size, |x, y| {
        let (mx, my) = (x / scale, y / scale);
        let inside = |m: u32| m >= options.margin && m < options.margin + modules;
        if !inside(mx) || !inside(my) {
            return LIGHT;
        }
        let index = (my - options.margin) * modules + (mx - options.margin);
        match colours[index as usize] {
            Color::Dark => DARK,
            Color::Light => LIGHT,
        }
    });

    log::trace!(
        "encoded {} byte payload as {modules}x{modules} QR, {size}px bitmap",
        payload.len()
    );
    Ok(bitmap)
}
