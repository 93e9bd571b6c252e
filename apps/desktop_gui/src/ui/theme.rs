use eframe::egui;

pub const PAGE_BACKGROUND: egui::Color32 = egui::Color32::BLACK;
pub const CARD_FILL: egui::Color32 = egui::Color32::WHITE;
pub const FIELD_FILL: egui::Color32 = egui::Color32::from_rgb(0xf0, 0xf2, 0xf5);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0xfd, 0x7f, 0x0c);
pub const ACCENT_HOVER: egui::Color32 = egui::Color32::from_rgb(0x5a, 0x55, 0xc7);
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(0xe0, 0x2b, 0x2b);
pub const BODY_TEXT: egui::Color32 = egui::Color32::from_rgb(0x22, 0x22, 0x22);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(0x6b, 0x6f, 0x76);

pub const CARD_ROUNDING: f32 = 14.0;
pub const FIELD_HEIGHT: f32 = 40.0;

pub fn light_card_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = PAGE_BACKGROUND;
    visuals.override_text_color = Some(BODY_TEXT);
    visuals.extreme_bg_color = FIELD_FILL;
    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.35);
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, FIELD_FILL);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, MUTED_TEXT);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.2, ACCENT);
    visuals
}

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = light_card_visuals();
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 8.0);
    style.spacing.interact_size = egui::vec2(40.0, 30.0);
    ctx.set_style(style);
}
