use eframe::egui;

use super::UserManagerApp;
use super::state::AppView;

impl eframe::App for UserManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_header(ctx);
        self.render_toast(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.state.current_view {
                    AppView::Login => self.ui_login(ui),
                    AppView::Entry => self.ui_entry(ui),
                    AppView::Display => self.ui_display(ui),
                });
        });

        self.render_edit_dialog(ctx);
    }
}
