//! App module - contains the main application state and logic

mod actions;
mod modals;

use crate::theme;
use crate::types::{Notice, QrPreview};
use eframe::egui;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    /// Text the user is editing; trimmed and validated on Generate
    pub(crate) input_text: String,
    /// Current QR image, replaced wholesale on each successful generate
    pub(crate) preview: QrPreview,
    /// Pending modal notice, if any
    pub(crate) notice: Option<Notice>,
    /// Focus the text field on the first frame
    pub(crate) focus_input: bool,
}

// ============================================================================
// APP INITIALIZATION
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self {
            input_text: String::new(),
            preview: QrPreview::None,
            notice: None,
            focus_input: true,
        }
    }
}
