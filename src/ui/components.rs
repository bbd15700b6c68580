//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::theme;
use eframe::egui;

/// Placeholder painted where the QR preview will appear before the first
/// successful generate.
pub fn preview_placeholder(ui: &mut egui::Ui, side: f32) {
    let (rect, _response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_ELEVATED);
        painter.rect_stroke(
            rect,
            theme::RADIUS_DEFAULT,
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_DEFAULT),
            egui::StrokeKind::Inside,
        );
        painter.text(
            rect.center() - egui::vec2(0.0, 16.0),
            egui::Align2::CENTER_CENTER,
            egui_phosphor::regular::QR_CODE,
            egui::FontId::proportional(48.0),
            theme::TEXT_DIM,
        );
        painter.text(
            rect.center() + egui::vec2(0.0, 24.0),
            egui::Align2::CENTER_CENTER,
            "Generated QR code will appear here",
            egui::FontId::proportional(theme::FONT_LABEL),
            theme::TEXT_DIM,
        );
    }
}
