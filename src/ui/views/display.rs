use crate::application::form::UserField;
use crate::ui::app::{Action, DisplayAction, UserManagerApp};
use crate::ui::{spacing, theme};
use eframe::egui;

impl UserManagerApp {
    pub fn ui_display(&mut self, ui: &mut egui::Ui) {
        ui.add_space(spacing::SPACING_LG);
        ui.label(theme::title("User Records"));
        ui.add_space(spacing::SPACING_MD);

        if ui.add(theme::filled_button("Refresh", theme::BLUE)).clicked() {
            self.dispatch(Action::Display(DisplayAction::Refresh));
        }
        ui.add_space(spacing::SPACING_MD);

        if self.state.users.is_empty() {
            ui.label(egui::RichText::new("No users recorded yet.").weak());
            return;
        }

        // Row buttons only record the click; dispatch happens after the table
        // borrow of `self.state.users` ends.
        let mut clicked = None;

        egui::ScrollArea::both()
            .max_height(spacing::TABLE_HEIGHT)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new("users_table")
                    .striped(true)
                    .num_columns(UserField::ALL.len() + 2)
                    .spacing([spacing::SPACING_LG, spacing::SPACING_SM])
                    .show(ui, |ui| {
                        ui.strong("Actions");
                        ui.strong("ID");
                        for field in UserField::ALL {
                            ui.strong(field.label());
                        }
                        ui.end_row();

                        for user in &self.state.users {
                            ui.horizontal(|ui| {
                                if ui
                                    .button(egui::RichText::new("Edit").color(theme::BLUE))
                                    .clicked()
                                {
                                    clicked = Some(DisplayAction::Edit(user.id));
                                }
                                if ui
                                    .button(egui::RichText::new("Delete").color(theme::RED))
                                    .clicked()
                                {
                                    clicked = Some(DisplayAction::Delete(user.id));
                                }
                            });
                            ui.label(user.id.to_string());
                            ui.label(user.last_name.as_str());
                            ui.label(user.first_name.as_str());
                            ui.label(user.age.to_string());
                            ui.label(user.email.as_str());
                            ui.label(user.addresses.as_str());
                            ui.label(user.national_id.as_str());
                            ui.end_row();
                        }
                    });
            });

        if let Some(action) = clicked {
            self.dispatch(Action::Display(action));
        }
    }
}
