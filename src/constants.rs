//! Application constants and configuration

pub const APP_NAME: &str = "QR Studio";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Side length the QR preview is displayed at, in logical pixels.
pub const QR_PREVIEW_SIZE: u32 = 300;

/// Default file name offered by the save dialog.
pub const DEFAULT_EXPORT_NAME: &str = "qr-code.png";

pub const WINDOW_WIDTH: f32 = 420.0;
pub const WINDOW_HEIGHT: f32 = 540.0;
