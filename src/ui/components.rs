//! Reusable UI components
//!
//! Standalone pieces of the page: the word counter row, the copy chip and
//! the premium call-to-action card. All stateless.

use crate::constants::PREMIUM_URL;
use crate::theme;
use eframe::egui;

/// Word counter under the input area: `count / limit kata`, switching to
/// the error color with a warning glyph when over the limit.
pub fn word_counter(ui: &mut egui::Ui, count: usize, limit: usize) {
    let over = count > limit;
    ui.horizontal(|ui| {
        if over {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(egui_phosphor::regular::WARNING)
                        .size(theme::FONT_LABEL)
                        .color(theme::STATUS_ERROR),
                )
                .selectable(false),
            );
        }
        let color = if over {
            theme::STATUS_ERROR
        } else {
            theme::TEXT_DIM
        };
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!("{} / {} kata", count, limit))
                    .size(theme::FONT_LABEL)
                    .color(color),
            )
            .selectable(false),
        );
    });
}

/// Small frameless copy button above the output area. Shows a check while
/// the copied indicator is active.
pub fn copy_chip(ui: &mut egui::Ui, copied: bool) -> egui::Response {
    let (icon, label, color) = if copied {
        (
            egui_phosphor::regular::CHECK,
            "Tersalin",
            theme::STATUS_SUCCESS,
        )
    } else {
        (egui_phosphor::regular::COPY, "Salin", theme::TEXT_MUTED)
    };
    let response = ui.add(
        egui::Button::new(
            egui::RichText::new(format!("{} {}", icon, label))
                .size(theme::FONT_LABEL)
                .color(color),
        )
        .frame(false),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Premium call-to-action card. Decorative: the button only opens the
/// product page in the browser, there is no gating logic behind it.
pub fn premium_cta(ui: &mut egui::Ui) {
    theme::card_frame().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!(
                        "{}  SkripsiSakti Premium",
                        egui_phosphor::regular::CROWN
                    ))
                    .size(theme::FONT_BODY)
                    .strong()
                    .color(theme::ACCENT_LIGHT),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_SM);
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Tanpa batas kata · Hasil lebih natural · Tanpa antre")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_MD);

            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(140.0, 28.0), egui::Sense::click());
            if response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            let (fill, draw_rect) = theme::button_visual(&response, theme::BG_SURFACE, rect);
            ui.painter()
                .rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
            ui.painter().text(
                draw_rect.center(),
                egui::Align2::CENTER_CENTER,
                "Coba Premium",
                egui::FontId::proportional(theme::FONT_LABEL),
                egui::Color32::WHITE,
            );
            if response.clicked() {
                let _ = open::that(PREMIUM_URL);
            }
        });
    });
}
