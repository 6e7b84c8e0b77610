use crate::ui::app::{Action, LoginAction, UserManagerApp};
use crate::ui::{spacing, theme};
use eframe::egui;

impl UserManagerApp {
    pub fn ui_login(&mut self, ui: &mut egui::Ui) {
        ui.add_space(spacing::SPACING_LG);
        ui.label(theme::title("Login"));
        ui.add_space(spacing::SPACING_MD);

        let mut username = self.state.login.username.clone();
        if ui
            .add(
                egui::TextEdit::singleline(&mut username)
                    .hint_text("Username")
                    .desired_width(spacing::FIELD_WIDTH),
            )
            .changed()
        {
            self.dispatch(Action::Login(LoginAction::SetUsername(username)));
        }

        let mut password = self.state.login.password.clone();
        let password_response = ui.add(
            egui::TextEdit::singleline(&mut password)
                .hint_text("Password")
                .password(true)
                .desired_width(spacing::FIELD_WIDTH),
        );
        if password_response.changed() {
            self.dispatch(Action::Login(LoginAction::SetPassword(password)));
        }
        let submitted_with_enter =
            password_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.add_space(spacing::SPACING_SM);
        if ui.add(theme::filled_button("Login", theme::BLUE)).clicked() || submitted_with_enter {
            self.dispatch(Action::Login(LoginAction::Submit));
        }
    }
}
