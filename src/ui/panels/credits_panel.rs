use bevy_egui::egui::{self, FontId, RichText};

/// Returns true when Back was clicked.
pub fn show_credits_panel(ctx: &mut egui::Context) -> bool {
    let mut back = false;
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(RichText::new("Credits").font(FontId::proportional(40.0)));
            ui.add_space(24.0);
            ui.label("Built with Bevy and egui.");
            ui.label("Questions live in assets/quiz.toml. Add your own!");
            ui.add_space(32.0);
            back = ui.add_sized([200.0, 40.0], egui::Button::new("Back")).clicked();
        });
    });
    back
}
