use eframe::egui;

use crate::application::auth::AccessGate;
use crate::infra::db::Database;
use crate::ui::theme;

use super::UserManagerApp;

impl UserManagerApp {
    pub fn new_egui(cc: &eframe::CreationContext<'_>, db: &Database, gate: AccessGate) -> Self {
        theme::apply(&cc.egui_ctx);
        cc.egui_ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(crate::ui::spacing::SPACING_SM, 6.0);
        });
        Self::new(db, gate)
    }
}
