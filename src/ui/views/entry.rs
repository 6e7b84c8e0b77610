use crate::application::form::UserField;
use crate::ui::app::{Action, EntryAction, UserManagerApp};
use crate::ui::{spacing, theme};
use eframe::egui;

impl UserManagerApp {
    pub fn ui_entry(&mut self, ui: &mut egui::Ui) {
        ui.add_space(spacing::SPACING_LG);
        ui.label(theme::title("Enter User Details"));
        ui.add_space(spacing::SPACING_MD);

        for field in UserField::ALL {
            ui.label(field.label());
            let mut value = self.state.entry_form.get(field).to_string();
            if ui
                .add(egui::TextEdit::singleline(&mut value).desired_width(spacing::FIELD_WIDTH))
                .changed()
            {
                self.dispatch(Action::Entry(EntryAction::SetField(field, value)));
            }
        }

        ui.add_space(spacing::SPACING_MD);
        ui.horizontal(|ui| {
            if ui.add(theme::filled_button("Submit", theme::GREEN)).clicked() {
                self.dispatch(Action::Entry(EntryAction::Submit));
            }
            if ui.add(theme::filled_button("View Data", theme::BLUE)).clicked() {
                self.dispatch(Action::Entry(EntryAction::ViewData));
            }
        });
    }
}
