#![windows_subsystem = "windows"]
//! SkripsiSakti - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod settings;
mod text;
mod theme;
mod transform;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use std::time::Instant;
use tracing::info;
use types::ToastKind;
use ui::components;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "skripsi-sakti.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,skripsi_sakti=debug"));

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
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "SkripsiSakti starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1100.0, 760.0)))
        .with_min_inner_size([860.0, 620.0])
        .with_title(APP_NAME);

    // Window/taskbar icon rasterized from the embedded logo
    {
        let (rgba, w, h) = utils::rasterize_logo(128);
        let icon = egui::IconData {
            rgba,
            width: w,
            height: h,
        };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Consume a finished submission before drawing this frame
        self.poll_submit_result();

        self.render_header(ctx);
        self.render_footer(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| {
                // Store panel rect for toast positioning
                self.central_panel_rect = Some(ui.max_rect());

                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(1000.0);

                        // Two column layout: input left, output right
                        ui.columns(2, |cols| {
                            self.render_input_column(&mut cols[0]);
                            self.render_output_column(&mut cols[1]);
                        });

                        ui.add_space(theme::SPACING_XL * 2.0);
                        self.render_action_row(ctx, ui);

                        ui.add_space(theme::SPACING_XL * 2.0);
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(420.0);
                            components::premium_cta(ui);
                        });
                    });
                });
            });

        self.render_toasts(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Shutting down");
        self.save_settings();
    }
}

impl App {
    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::symmetric(24, 14)),
            )
            .show_separator_line(true)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let texture = self.logo_texture.get_or_insert_with(|| {
                        let (pixels, w, h) = utils::rasterize_logo(64);
                        ctx.load_texture(
                            "logo",
                            egui::ColorImage::from_rgba_unmultiplied(
                                [w as usize, h as usize],
                                &pixels,
                            ),
                            egui::TextureOptions::LINEAR,
                        )
                    });
                    ui.image(egui::load::SizedTexture::new(
                        texture.id(),
                        egui::vec2(30.0, 30.0),
                    ));

                    ui.add_space(theme::SPACING_SM);
                    ui.vertical(|ui| {
                        ui.spacing_mut().item_spacing.y = 2.0;
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(APP_NAME)
                                    .size(theme::FONT_TITLE)
                                    .strong()
                                    .color(theme::TEXT_PRIMARY),
                            )
                            .selectable(false),
                        );
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(
                                    "Ubah teks biasa menjadi bahasa skripsi yang formal dan natural.",
                                )
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_MUTED),
                            )
                            .selectable(false),
                        );
                    });
                });
            });
    }

    fn render_footer(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(24, 10)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(
                                "Dibuat untuk membantu mahasiswa Indonesia. Gunakan dengan bijak.",
                            )
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                });
            });
    }

    fn render_input_column(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Teks Asli")
                        .size(theme::FONT_LABEL)
                        .strong()
                        .color(theme::TEXT_SECONDARY),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_SM);

            theme::input_frame().show(ui, |ui| {
                ui.add_enabled(
                    !self.processing,
                    egui::TextEdit::multiline(&mut self.input_text)
                        .hint_text("Tempelkan teks kamu di sini (hasil ChatGPT, draft skripsi, dll)")
                        .desired_rows(14)
                        .desired_width(f32::INFINITY)
                        .frame(false)
                        .font(egui::FontId::proportional(theme::FONT_BODY)),
                );
            });

            ui.add_space(theme::SPACING_SM);
            components::word_counter(ui, self.word_count(), WORD_LIMIT);
        });
    }

    fn render_output_column(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Hasil Bahasa Akademik")
                            .size(theme::FONT_LABEL)
                            .strong()
                            .color(theme::TEXT_SECONDARY),
                    )
                    .selectable(false),
                );
                if !self.output_text.is_empty() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let copied = self.is_copied();
                        if copied {
                            // repaint when the window ends so the check flips back
                            if let Some(at) = self.copied_at {
                                ui.ctx()
                                    .request_repaint_after(COPIED_WINDOW.saturating_sub(at.elapsed()));
                            }
                        }
                        if components::copy_chip(ui, copied).clicked() {
                            self.copy_output();
                        }
                    });
                }
            });
            ui.add_space(theme::SPACING_SM);

            theme::input_frame().show(ui, |ui| {
                let mut output = self.output_text.as_str();
                ui.add(
                    egui::TextEdit::multiline(&mut output)
                        .hint_text("Hasil parafrase bahasa skripsi akan muncul di sini.")
                        .desired_rows(14)
                        .desired_width(f32::INFINITY)
                        .frame(false)
                        .font(egui::FontId::proportional(theme::FONT_BODY)),
                );
            });
        });
    }

    fn render_action_row(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let enabled = !self.processing && !self.input_text.trim().is_empty();

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(280.0, 40.0), egui::Sense::click());
        if response.hovered() {
            ui.ctx().set_cursor_icon(if enabled {
                egui::CursorIcon::PointingHand
            } else {
                egui::CursorIcon::NotAllowed
            });
        }

        let fill = if enabled {
            theme::BTN_ACCENT
        } else {
            theme::BTN_DISABLED
        };
        let (fill, draw_rect) = if enabled {
            theme::button_visual(&response, fill, rect)
        } else {
            (fill, rect)
        };
        ui.painter()
            .rect_filled(draw_rect, theme::RADIUS_MEDIUM, fill);

        if self.processing {
            let label = "Memproses teks…";
            let galley = ui.painter().layout_no_wrap(
                label.to_string(),
                egui::FontId::proportional(theme::FONT_BODY),
                theme::BTN_DISABLED_TEXT,
            );
            let text_pos = egui::pos2(
                draw_rect.center().x - galley.size().x / 2.0 + 12.0,
                draw_rect.center().y - galley.size().y / 2.0,
            );
            let spinner_rect = egui::Rect::from_center_size(
                egui::pos2(text_pos.x - 16.0, draw_rect.center().y),
                egui::vec2(14.0, 14.0),
            );
            ui.put(
                spinner_rect,
                egui::Spinner::new().size(14.0).color(theme::BTN_DISABLED_TEXT),
            );
            ui.painter()
                .galley(text_pos, galley, theme::BTN_DISABLED_TEXT);
        } else {
            let text_color = if enabled {
                theme::BTN_ACCENT_TEXT
            } else {
                theme::BTN_DISABLED_TEXT
            };
            ui.painter().text(
                draw_rect.center(),
                egui::Align2::CENTER_CENTER,
                format!(
                    "Ubah ke Bahasa Skripsi  {}",
                    egui_phosphor::regular::ARROW_RIGHT
                ),
                egui::FontId::proportional(theme::FONT_BODY),
                text_color,
            );
        }

        if enabled && response.clicked() {
            self.submit(ctx);
        }

        ui.add_space(theme::SPACING_MD);
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!(
                    "Mode Gratis: Maksimal {} kata · Tanpa login",
                    WORD_LIMIT
                ))
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
            )
            .selectable(false),
        );
    }

    // Toast stack (bottom-right of central panel, 3s visible then fade, pause on hover)
    fn render_toasts(&mut self, ctx: &egui::Context) {
        let Some(panel_rect) = self.central_panel_rect else {
            return;
        };
        if self.toasts.is_empty() {
            return;
        }

        let visible_duration = 3.0;
        let fade_duration = 0.5;
        let total_duration = visible_duration + fade_duration;
        let margin = 12.0;

        let mut offset_y = 0.0;
        for (i, toast) in self.toasts.iter_mut().enumerate() {
            let elapsed = toast.shown_at.elapsed().as_secs_f32();
            let alpha = if elapsed > visible_duration {
                ((total_duration - elapsed) / fade_duration).clamp(0.0, 1.0)
            } else {
                1.0
            };
            let accent = match toast.kind {
                ToastKind::Success => theme::ACCENT,
                ToastKind::Error => theme::STATUS_ERROR,
            };

            let toast_pos = egui::pos2(
                panel_rect.right() - margin,
                panel_rect.bottom() - margin - offset_y,
            );

            let response = egui::Area::new(egui::Id::new(("toast", i)))
                .fixed_pos(toast_pos)
                .pivot(egui::Align2::RIGHT_BOTTOM)
                .show(ctx, |ui| {
                    egui::Frame::new()
                        .fill(egui::Color32::from_rgba_unmultiplied(
                            0x1a,
                            0x1a,
                            0x1e,
                            (230.0 * alpha) as u8,
                        ))
                        .stroke(egui::Stroke::new(
                            1.0,
                            egui::Color32::from_rgba_unmultiplied(
                                accent.r(),
                                accent.g(),
                                accent.b(),
                                (100.0 * alpha) as u8,
                            ),
                        ))
                        .corner_radius(theme::RADIUS_MEDIUM)
                        .inner_margin(egui::Margin::symmetric(16, 10))
                        .show(ui, |ui| {
                            ui.spacing_mut().item_spacing.y = 2.0;
                            ui.label(
                                egui::RichText::new(toast.title.as_str()).strong().color(
                                    egui::Color32::from_rgba_unmultiplied(
                                        255,
                                        255,
                                        255,
                                        (255.0 * alpha) as u8,
                                    ),
                                ),
                            );
                            ui.label(
                                egui::RichText::new(toast.description.as_str())
                                    .size(theme::FONT_LABEL)
                                    .color(egui::Color32::from_rgba_unmultiplied(
                                        theme::TEXT_MUTED.r(),
                                        theme::TEXT_MUTED.g(),
                                        theme::TEXT_MUTED.b(),
                                        (255.0 * alpha) as u8,
                                    )),
                            );
                        });
                });

            // Pause timer while hovering
            if response.response.hovered() {
                toast.shown_at = Instant::now();
            }

            offset_y += response.response.rect.height() + 8.0;
        }

        self.toasts
            .retain(|t| t.shown_at.elapsed().as_secs_f32() < total_duration);
        if !self.toasts.is_empty() {
            ctx.request_repaint();
        }
    }
}
