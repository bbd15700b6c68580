//! Common types and data structures

use eframe::egui;
use image::RgbaImage;

/// A successfully generated QR code. The bitmap is the export source of
/// truth; the texture is what the preview surface draws.
pub struct GeneratedQr {
    pub text: String,
    pub bitmap: RgbaImage,
    pub texture: egui::TextureHandle,
}

/// Preview state machine: an image exists only after a successful generate,
/// and Save is available only while one exists. A successful generate
/// replaces the whole `Ready` value; a failed one leaves it untouched.
#[derive(Default)]
pub enum QrPreview {
    #[default]
    None,
    Ready(GeneratedQr),
}

impl QrPreview {
    pub fn ready(&self) -> Option<&GeneratedQr> {
        match self {
            QrPreview::Ready(qr) => Some(qr),
            QrPreview::None => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready().is_some()
    }
}

/// Severity of a modal notice
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A modal message awaiting dismissal
#[derive(Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}
