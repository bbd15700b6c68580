//! Modal notice dialog (input warnings, operation errors, save results)

use super::App;
use crate::theme;
use crate::types::NoticeLevel;
use eframe::egui;

impl App {
    pub fn render_notice_modal(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.notice.clone() else {
            return;
        };

        // Built-in Modal with backdrop, escape-to-close, click-outside handling
        let modal_area = egui::Modal::default_area(egui::Id::new("notice_modal"))
            .default_width(300.0 + theme::SPACING_XL * 2.0);
        let modal = egui::Modal::new(egui::Id::new("notice_modal"))
            .area(modal_area)
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(300.0);
            ui.set_max_width(300.0);

            let (icon, icon_color) = match notice.level {
                NoticeLevel::Info => (egui_phosphor::regular::CHECK_CIRCLE, theme::STATUS_SUCCESS),
                NoticeLevel::Warning => (egui_phosphor::regular::WARNING, theme::STATUS_WARNING),
                NoticeLevel::Error => (egui_phosphor::regular::X_CIRCLE, theme::STATUS_ERROR),
            };

            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(egui::RichText::new(icon).size(36.0).color(icon_color));
                ui.add_space(8.0);
                ui.label(egui::RichText::new(&notice.title).size(16.0).strong());
                ui.add_space(4.0);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(&notice.message)
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_MUTED),
                    )
                    .wrap(),
                );
                ui.add_space(16.0);
                let ok_btn = ui.add(theme::button_accent(format!(
                    "{}  OK",
                    egui_phosphor::regular::CHECK
                )));
                if ok_btn.clicked() {
                    self.notice = None;
                }
            });
        });
        if modal_response.should_close() {
            self.notice = None;
        }
    }
}
