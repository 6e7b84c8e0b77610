use eframe::egui;

use super::state::AppView;
use super::{Action, NavigationAction, UserManagerApp};
use crate::ui::spacing;

impl UserManagerApp {
    /// Navigation bar with one entry per screen.
    pub(super) fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("navigation")
            .exact_height(40.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.add_space(spacing::SPACING_MD);
                    for view in AppView::ALL {
                        let selected = self.state.current_view == view;
                        if ui.selectable_label(selected, view.label()).clicked() && !selected {
                            self.dispatch(Action::Navigation(NavigationAction::SwitchTo(view)));
                        }
                        ui.add_space(spacing::SPACING_SM);
                    }

                    if self.state.authenticated {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.add_space(spacing::SPACING_MD);
                            ui.label(
                                egui::RichText::new(format!(
                                    "Signed in as {}",
                                    self.state.login.username
                                ))
                                .weak(),
                            );
                        });
                    }
                });
            });
    }
}
