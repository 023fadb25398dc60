use bevy_egui::egui::{self, Color32, FontId, RichText};

use crate::quiz::QuestionView;

const CORRECT: Color32 = Color32::from_rgb(40, 140, 60);
const WRONG: Color32 = Color32::from_rgb(160, 45, 45);

pub enum QuestionInput {
    Reply(usize),
    Back,
}

pub fn show_question_panel(
    ctx: &mut egui::Context,
    view: &QuestionView,
    score: i32,
    image: Option<egui::TextureId>,
) -> Option<QuestionInput> {
    let mut input = None;

    egui::TopBottomPanel::top("quiz_status").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Question {} / {}", view.number, view.total));
            ui.separator();
            ui.label(format!("Score: {score}"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Menu").clicked() {
                    input = Some(QuestionInput::Back);
                }
            });
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(RichText::new(view.prompt).font(FontId::proportional(30.0)));
            ui.add_space(16.0);

            if let Some(texture) = image {
                ui.image(egui::load::SizedTexture::new(texture, [320.0, 180.0]));
                ui.add_space(16.0);
            }

            for (slot, reply) in view.slots.iter().enumerate() {
                // Unused slots stay hidden.
                let Some(reply) = reply else {
                    continue;
                };

                let mut button = egui::Button::new(format!("{}. {reply}", slot + 1));
                if let Some(outcome) = view.answered {
                    if slot == outcome.correct_reply {
                        button = button.fill(CORRECT);
                    } else if slot == outcome.reply {
                        button = button.fill(WRONG);
                    }
                }

                let response = ui.add_enabled_ui(view.interactable, |ui| {
                    ui.add_sized([360.0, 44.0], button)
                });
                if response.inner.clicked() {
                    input = Some(QuestionInput::Reply(slot));
                }
                ui.add_space(8.0);
            }
        });
    });

    input
}
