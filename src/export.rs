//! Bitmap export: format resolution and file writing
//!
//! The user picks the path through a native save dialog; the format is
//! implied by the extension. Platform icon formats (.ico, .icns) are
//! deliberately unsupported and downgrade to PNG, with the rewritten path
//! reported back so the UI can tell the user.

use crate::error::Result;
use image::{DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};

/// Raster formats the exporter can write via the `image` crate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Bmp,
    Tiff,
    WebP,
    Gif,
}

impl ExportFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "bmp" => Some(Self::Bmp),
            "tif" | "tiff" => Some(Self::Tiff),
            "webp" => Some(Self::WebP),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }
}

/// Outcome of resolving a user-chosen path to a writable format.
pub struct ResolvedExport {
    pub path: PathBuf,
    pub format: ExportFormat,
    /// Set when the requested extension was unsupported and the export fell
    /// back to PNG.
    pub fallback_from: Option<String>,
}

/// Resolve the export format from the path's extension. Unsupported
/// extensions (icon formats in particular) fall back to PNG with the
/// extension rewritten; a missing extension gets `.png` appended.
pub fn resolve_export(path: &Path) -> ResolvedExport {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => match ExportFormat::from_extension(ext) {
            Some(format) => ResolvedExport {
                path: path.to_path_buf(),
                format,
                fallback_from: None,
            },
            None => ResolvedExport {
                path: path.with_extension("png"),
                format: ExportFormat::Png,
                fallback_from: Some(ext.to_ascii_lowercase()),
            },
        },
        None => ResolvedExport {
            path: path.with_extension("png"),
            format: ExportFormat::Png,
            fallback_from: None,
        },
    }
}

/// Write `bitmap` to `path`, downgrading unsupported formats to PNG.
/// Returns the resolution so the caller can report a fallback to the user.
pub fn export_bitmap(bitmap: &RgbaImage, path: &Path) -> Result<ResolvedExport> {
    let resolved = resolve_export(path);
    if let Some(parent) = resolved.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    match resolved.format {
        // JPEG has no alpha channel; the image crate rejects Rgba8 input
        ExportFormat::Jpeg => DynamicImage::ImageRgba8(bitmap.clone())
            .to_rgb8()
            .save(&resolved.path)?,
        _ => bitmap.save(&resolved.path)?,
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::generate_qr;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("qr-studio-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn supported_extensions_pass_through() {
        for (ext, format) in [
            ("png", ExportFormat::Png),
            ("JPG", ExportFormat::Jpeg),
            ("jpeg", ExportFormat::Jpeg),
            ("bmp", ExportFormat::Bmp),
            ("tiff", ExportFormat::Tiff),
            ("webp", ExportFormat::WebP),
            ("gif", ExportFormat::Gif),
        ] {
            let path = PathBuf::from(format!("out.{}", ext));
            let resolved = resolve_export(&path);
            assert_eq!(resolved.format, format);
            assert_eq!(resolved.path, path);
            assert!(resolved.fallback_from.is_none());
        }
    }

    #[test]
    fn icon_formats_fall_back_to_png() {
        for ext in ["ico", "icns", "ICNS"] {
            let resolved = resolve_export(&PathBuf::from(format!("icon.{}", ext)));
            assert_eq!(resolved.format, ExportFormat::Png);
            assert_eq!(resolved.path, PathBuf::from("icon.png"));
            assert_eq!(resolved.fallback_from.as_deref(), Some(ext.to_ascii_lowercase().as_str()));
        }
    }

    #[test]
    fn missing_extension_gets_png_appended() {
        let resolved = resolve_export(&PathBuf::from("bare"));
        assert_eq!(resolved.format, ExportFormat::Png);
        assert_eq!(resolved.path, PathBuf::from("bare.png"));
        assert!(resolved.fallback_from.is_none());
    }

    #[test]
    fn png_round_trip_preserves_pixels() {
        let bitmap = generate_qr("round trip").unwrap();
        let path = temp_path("roundtrip.png");

        let resolved = export_bitmap(&bitmap, &path).unwrap();
        assert!(resolved.fallback_from.is_none());

        let reloaded = image::open(&resolved.path).unwrap().to_rgba8();
        std::fs::remove_file(&resolved.path).ok();

        assert_eq!(reloaded.dimensions(), bitmap.dimensions());
        assert_eq!(reloaded.as_raw(), bitmap.as_raw());
    }

    #[test]
    fn icns_export_writes_a_readable_png() {
        let bitmap = generate_qr("fallback").unwrap();
        let path = temp_path("fallback.icns");

        let resolved = export_bitmap(&bitmap, &path).unwrap();
        assert_eq!(resolved.fallback_from.as_deref(), Some("icns"));
        assert_eq!(resolved.path.extension().and_then(|e| e.to_str()), Some("png"));

        let reloaded = image::open(&resolved.path).unwrap().to_rgba8();
        std::fs::remove_file(&resolved.path).ok();

        assert_eq!(reloaded.dimensions(), bitmap.dimensions());
    }

    #[test]
    fn jpeg_export_drops_alpha_and_writes() {
        let bitmap = generate_qr("jpeg export").unwrap();
        let path = temp_path("export.jpg");

        let resolved = export_bitmap(&bitmap, &path).unwrap();
        assert!(resolved.fallback_from.is_none());

        let reloaded = image::open(&resolved.path).unwrap();
        std::fs::remove_file(&resolved.path).ok();

        assert_eq!(reloaded.width(), bitmap.width());
        assert_eq!(reloaded.height(), bitmap.height());
    }
}
