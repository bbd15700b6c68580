#![windows_subsystem = "windows"]
//! QR Studio - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod error;
mod export;
mod qr;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use tracing::info;
use ui::components::preview_placeholder;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "qr-studio.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,qr_studio=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "QR Studio starting");

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
        .with_min_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
        .with_resizable(false)
        .with_title(APP_NAME);

    // Set window/taskbar icon from the embedded SVG logo
    {
        let (rgba, w, h) = utils::rasterize_icon(64);
        let icon = egui::IconData {
            rgba,
            width: w,
            height: h,
        };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        ..Default::default()
    };

    eframe::run_native(APP_NAME, options, Box::new(|cc| Ok(Box::new(App::new(cc)))))
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Render pending notice modal (blocks interaction underneath)
        self.render_notice_modal(ctx);

        let mut generate_requested = false;
        let mut save_requested = false;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!(
                            "{}  {}",
                            egui_phosphor::regular::QR_CODE,
                            APP_NAME
                        ))
                        .size(theme::FONT_TITLE)
                        .strong(),
                    );
                    ui.add_space(12.0);

                    // Input row
                    ui.label(
                        egui::RichText::new("Enter the text to encode")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    );
                    ui.add_space(4.0);
                    let edit_response = ui.add(
                        egui::TextEdit::singleline(&mut self.input_text)
                            .hint_text("https://example.com")
                            .desired_width(300.0)
                            .horizontal_align(egui::Align::Center),
                    );
                    if self.focus_input {
                        self.focus_input = false;
                        edit_response.request_focus();
                    }
                    // Enter in the field triggers Generate
                    if edit_response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                    {
                        generate_requested = true;
                    }

                    ui.add_space(12.0);

                    // Action row: Generate always, Save only while an image exists
                    ui.horizontal(|ui| {
                        let row_width = 200.0;
                        ui.add_space((ui.available_width() - row_width).max(0.0) / 2.0);

                        let gen_btn = ui.add(theme::button_accent(format!(
                            "{}  Generate",
                            egui_phosphor::regular::QR_CODE
                        )));
                        if gen_btn.clicked() {
                            generate_requested = true;
                        }

                        ui.add_space(theme::SPACING_MD);

                        let save_btn = ui.add_enabled(
                            self.preview.is_ready(),
                            theme::button(format!(
                                "{}  Save",
                                egui_phosphor::regular::FLOPPY_DISK
                            )),
                        );
                        if save_btn.clicked() {
                            save_requested = true;
                        }
                    });

                    ui.add_space(16.0);

                    // Preview surface
                    match self.preview.ready() {
                        Some(qr_item) => {
                            let size =
                                egui::vec2(QR_PREVIEW_SIZE as f32, QR_PREVIEW_SIZE as f32);
                            egui::Frame::new()
                                .fill(egui::Color32::WHITE)
                                .corner_radius(theme::RADIUS_DEFAULT)
                                .inner_margin(egui::Margin::same(6))
                                .show(ui, |ui| {
                                    ui.image(egui::load::SizedTexture::new(
                                        qr_item.texture.id(),
                                        size,
                                    ));
                                });
                            ui.add_space(6.0);
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(&qr_item.text)
                                        .size(theme::FONT_SMALL)
                                        .color(theme::TEXT_DIM),
                                )
                                .truncate(),
                            );
                        }
                        None => preview_placeholder(ui, QR_PREVIEW_SIZE as f32),
                    }
                });
            });

        if generate_requested {
            self.generate(ctx);
        }
        if save_requested {
            self.save();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
    }
}
