//! The two form actions: Generate and Save

use super::App;
use crate::constants::DEFAULT_EXPORT_NAME;
use crate::export::export_bitmap;
use crate::qr;
use crate::types::{GeneratedQr, Notice, QrPreview};
use eframe::egui;
use tracing::{debug, error, info, warn};

impl App {
    /// Generate action: validate the input, encode, upload the preview
    /// texture. Failures leave the current preview untouched.
    pub fn generate(&mut self, ctx: &egui::Context) {
        let text = match qr::validate_input(&self.input_text) {
            Ok(t) => t.to_string(),
            Err(e) => {
                warn!("Generate requested with empty input");
                self.notice = Some(Notice::warning("Input Error", e.to_string()));
                return;
            }
        };

        match qr::generate_qr(&text) {
            Ok(bitmap) => {
                let size = [bitmap.width() as usize, bitmap.height() as usize];
                let texture = ctx.load_texture(
                    "qr_preview",
                    egui::ColorImage::from_rgba_unmultiplied(size, bitmap.as_raw()),
                    egui::TextureOptions::NEAREST,
                );
                info!(chars = text.len(), side = bitmap.width(), "QR code generated");
                self.preview = QrPreview::Ready(GeneratedQr {
                    text,
                    bitmap,
                    texture,
                });
            }
            Err(e) => {
                error!(error = %e, "QR generation failed");
                self.notice = Some(Notice::error(
                    "Error",
                    format!("Failed to generate QR code: {}", e),
                ));
            }
        }
    }

    /// Save action: pick a path via the native dialog, write the bitmap.
    /// Icon formats (.ico, .icns) downgrade to PNG with a notice.
    pub fn save(&mut self) {
        if !self.preview.is_ready() {
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .set_title("Save QR code")
            .set_file_name(DEFAULT_EXPORT_NAME)
            .add_filter("PNG image", &["png"])
            .add_filter(
                "All images",
                &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "webp", "gif"],
            )
            .save_file()
        else {
            debug!("Save dialog dismissed");
            return;
        };

        let result = match self.preview.ready() {
            Some(qr_item) => export_bitmap(&qr_item.bitmap, &path),
            None => return,
        };

        match result {
            Ok(resolved) => {
                info!(path = %resolved.path.display(), format = ?resolved.format, "QR code saved");
                let message = match &resolved.fallback_from {
                    Some(ext) => format!(
                        ".{} export is not supported; saved as PNG to {}",
                        ext,
                        resolved.path.display()
                    ),
                    None => format!("QR code saved to {}", resolved.path.display()),
                };
                self.notice = Some(Notice::info("Saved", message));
            }
            Err(e) => {
                error!(error = %e, path = %path.display(), "Save failed");
                self.notice = Some(Notice::error(
                    "Error",
                    format!("Failed to save QR code: {}", e),
                ));
            }
        }
    }
}
