//! Text-to-QR encoding

use crate::constants::QR_PREVIEW_SIZE;
use crate::error::{Error, Result};
use image::{DynamicImage, Luma, RgbaImage};
use qrcode::{EcLevel, QrCode};

/// Reject empty or whitespace-only input before the encoder ever runs.
/// Returns the trimmed text on success.
pub fn validate_input(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(trimmed)
}

/// Encode `text` into a two-tone QR bitmap sized for the preview surface.
///
/// The rendered image is square and at least `QR_PREVIEW_SIZE` on each side;
/// the renderer rounds up so every module is a whole number of pixels, which
/// keeps the code crisp when scanned off the screen. A quiet-zone border is
/// included.
pub fn generate_qr(text: &str) -> Result<RgbaImage> {
    let code = QrCode::with_error_correction_level(text, EcLevel::M)
        .map_err(|e| Error::QrEncode(e.to_string()))?;

    let luma = code
        .render::<Luma<u8>>()
        .min_dimensions(QR_PREVIEW_SIZE, QR_PREVIEW_SIZE)
        .build();

    Ok(DynamicImage::ImageLuma8(luma).to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(validate_input(""), Err(Error::EmptyInput)));
        assert!(matches!(validate_input("   \t\n"), Err(Error::EmptyInput)));
    }

    #[test]
    fn validate_trims_surrounding_whitespace() {
        assert_eq!(validate_input("  hello  ").unwrap(), "hello");
    }

    #[test]
    fn generates_square_preview_sized_bitmap() {
        let img = generate_qr("https://example.com").unwrap();
        assert_eq!(img.width(), img.height());
        assert!(img.width() >= QR_PREVIEW_SIZE);
    }

    #[test]
    fn generated_bitmap_is_two_tone() {
        let img = generate_qr("two-tone check").unwrap();
        for pixel in img.pixels() {
            let [r, g, b, a] = pixel.0;
            assert_eq!(a, 255);
            assert!(r == g && g == b, "gray pixel expected, got {:?}", pixel.0);
            assert!(r == 0 || r == 255, "pure black or white expected, got {}", r);
        }
    }

    #[test]
    fn over_capacity_text_fails_with_encode_error() {
        // Version 40 tops out below 3000 bytes at medium error correction
        let text = "x".repeat(5000);
        match generate_qr(&text) {
            Err(Error::QrEncode(_)) => {}
            other => panic!("expected QrEncode error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn different_text_produces_different_bitmaps() {
        let first = generate_qr("first").unwrap();
        let second = generate_qr("second").unwrap();
        assert_ne!(first.as_raw(), second.as_raw());
    }
}
