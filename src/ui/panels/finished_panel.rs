use bevy_egui::egui::{self, Align2, FontId, RichText};

use crate::menu::MenuAction;
use crate::quiz::Summary;

pub fn show_finished_panel(ctx: &mut egui::Context, summary: &Summary) -> Option<MenuAction> {
    let mut action = None;
    egui::Window::new("Quiz Finished")
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(summary.to_string()).font(FontId::proportional(28.0)));
                ui.add_space(16.0);
                if ui.button("Play again").clicked() {
                    action = Some(MenuAction::Play);
                }
                if ui.button("Main menu").clicked() {
                    action = Some(MenuAction::Back);
                }
            });
        });
    action
}
