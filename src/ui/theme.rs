//! Colors and small widget helpers shared by the screens.

use eframe::egui::{self, Color32, RichText};

pub const BLUE: Color32 = Color32::from_rgb(33, 150, 243);
pub const GREEN: Color32 = Color32::from_rgb(76, 175, 80);
pub const RED: Color32 = Color32::from_rgb(229, 57, 53);
pub const WHITE: Color32 = Color32::WHITE;

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = WHITE;
    visuals.window_fill = WHITE;
    visuals.selection.bg_fill = BLUE.gamma_multiply(0.3);
    ctx.set_visuals(visuals);
}

/// Large blue screen heading.
pub fn title(text: &str) -> RichText {
    RichText::new(text).size(30.0).color(BLUE)
}

pub fn filled_button(text: &str, fill: Color32) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text).color(WHITE)).fill(fill)
}
