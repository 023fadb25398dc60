use bevy_egui::egui::{self, FontId, RichText};

use crate::content::Category;

pub enum CategoryPick {
    Index(usize),
    Random,
    Back,
}

pub fn show_category_panel(ctx: &mut egui::Context, categories: &[Category]) -> Option<CategoryPick> {
    let mut pick = None;
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(RichText::new("Choose a category").font(FontId::proportional(40.0)));
            ui.add_space(24.0);

            egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                for (i, category) in categories.iter().enumerate() {
                    let label = format!("{} ({})", category.name, category.questions.len());
                    if ui.add_sized([280.0, 40.0], egui::Button::new(label)).clicked() {
                        pick = Some(CategoryPick::Index(i));
                    }
                    ui.add_space(6.0);
                }
            });

            ui.add_space(16.0);
            let surprise = egui::Button::new("Surprise me");
            if ui
                .add_enabled(!categories.is_empty(), surprise)
                .clicked()
            {
                pick = Some(CategoryPick::Random);
            }
            if ui.button("Back").clicked() {
                pick = Some(CategoryPick::Back);
            }
        });
    });
    pick
}
