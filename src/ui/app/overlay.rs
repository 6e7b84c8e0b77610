use std::time::{Duration, Instant};

use eframe::egui;

use super::state::ToastKind;
use super::{Action, DisplayAction, UserManagerApp};
use crate::application::form::UserField;
use crate::ui::{spacing, theme};

const TOAST_DURATION: Duration = Duration::from_secs(4);

impl UserManagerApp {
    pub(super) fn render_toast(&mut self, ctx: &egui::Context) {
        let Some(toast) = self.state.toast.clone() else {
            self.toast_shown_at = None;
            return;
        };

        let shown_at = match self.toast_shown_at {
            Some((seq, at)) if seq == toast.seq => at,
            _ => {
                let now = Instant::now();
                self.toast_shown_at = Some((toast.seq, now));
                now
            }
        };

        let elapsed = shown_at.elapsed();
        if elapsed >= TOAST_DURATION {
            self.dispatch(Action::DismissToast);
            return;
        }
        ctx.request_repaint_after(TOAST_DURATION - elapsed);

        let color = match toast.kind {
            ToastKind::Info => theme::GREEN,
            ToastKind::Error => theme::RED,
        };

        egui::TopBottomPanel::bottom("toast").show(ctx, |ui| {
            ui.add_space(spacing::SPACING_XS);
            ui.horizontal(|ui| {
                ui.colored_label(color, toast.message.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Dismiss").clicked() {
                        self.dispatch(Action::DismissToast);
                    }
                });
            });
            ui.add_space(spacing::SPACING_XS);
        });
    }

    /// Modal-style edit window; at most one is ever open.
    pub(super) fn render_edit_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.state.edit_dialog.clone() else {
            return;
        };

        let mut actions = Vec::new();

        egui::Window::new(format!("Edit User #{}", dialog.user_id))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                for field in UserField::ALL {
                    ui.label(field.label());
                    let mut value = dialog.form.get(field).to_string();
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut value).desired_width(spacing::FIELD_WIDTH),
                    );
                    if response.changed() {
                        actions.push(Action::Display(DisplayAction::SetEditField(field, value)));
                    }
                }

                ui.add_space(spacing::SPACING_MD);
                ui.horizontal(|ui| {
                    if ui.add(theme::filled_button("Save", theme::BLUE)).clicked() {
                        actions.push(Action::Display(DisplayAction::SaveEdit));
                    }
                    if ui.button("Cancel").clicked() {
                        actions.push(Action::Display(DisplayAction::CancelEdit));
                    }
                });
            });

        for action in actions {
            self.dispatch(action);
        }
    }
}
