use bevy_egui::egui::{self, FontId, RichText};

use crate::menu::MenuAction;

pub fn show_main_menu(ctx: &mut egui::Context) -> Option<MenuAction> {
    let mut action = None;
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.label(RichText::new("Trivia Quiz").font(FontId::proportional(56.0)));
            ui.add_space(40.0);

            for (label, choice) in [
                ("Play", MenuAction::Play),
                ("Credits", MenuAction::Credits),
                ("Exit", MenuAction::Exit),
            ] {
                if ui.add_sized([240.0, 44.0], egui::Button::new(label)).clicked() {
                    action = Some(choice);
                }
                ui.add_space(8.0);
            }
        });
    });
    action
}
