//! Small reusable widgets for the contact card.

use eframe::egui;

use crate::ui::theme;

/// Single-line field with a placeholder and a red error line underneath.
pub fn form_text_field(
    ui: &mut egui::Ui,
    id: &'static str,
    hint: &str,
    value: &mut String,
    error: &str,
    char_limit: Option<usize>,
) -> egui::Response {
    let mut edit = egui::TextEdit::singleline(value)
        .id_salt(id)
        .hint_text(egui::RichText::new(hint).color(theme::MUTED_TEXT))
        .text_color(theme::BODY_TEXT)
        .background_color(theme::FIELD_FILL)
        .margin(egui::Margin::symmetric(10, 8))
        .desired_width(f32::INFINITY);
    if let Some(limit) = char_limit {
        edit = edit.char_limit(limit);
    }

    let response = ui.add_sized([ui.available_width(), theme::FIELD_HEIGHT], edit);
    if !error.is_empty() {
        ui.label(
            egui::RichText::new(error)
                .color(theme::ERROR_TEXT)
                .size(12.0),
        );
    }
    response
}

pub fn primary_button(ui: &mut egui::Ui, label: &str, enabled: bool) -> egui::Response {
    let hovered_last_frame = ui
        .ctx()
        .data(|d| d.get_temp::<bool>(egui::Id::new(("primary_button_hover", label))))
        .unwrap_or(false);
    let fill = if enabled && hovered_last_frame {
        theme::ACCENT_HOVER
    } else {
        theme::ACCENT
    };
    let button = egui::Button::new(
        egui::RichText::new(label)
            .strong()
            .size(16.0)
            .color(egui::Color32::WHITE),
    )
    .fill(fill)
    .corner_radius(8.0)
    .min_size(egui::vec2(ui.available_width(), 42.0));

    let response = ui.add_enabled(enabled, button);
    let hovered = response.hovered();
    ui.ctx().data_mut(|d| {
        d.insert_temp(egui::Id::new(("primary_button_hover", label)), hovered)
    });
    response
}
