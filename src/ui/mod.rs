mod panels;

use std::collections::HashMap;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};
use rand::Rng;

use crate::menu::{CategoryChosen, MenuAction, Screen};
use crate::quiz::{Quiz, ReplyHandling, ReplySelected};
use crate::score::Score;
use panels::category_panel::{show_category_panel, CategoryPick};
use panels::credits_panel::show_credits_panel;
use panels::finished_panel::show_finished_panel;
use panels::main_menu::show_main_menu;
use panels::question_panel::{show_question_panel, QuestionInput};

pub struct UiPlugin;
impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Update, main_menu_ui.run_if(in_state(Screen::MainMenu)))
            .add_systems(Update, category_ui.run_if(in_state(Screen::Category)))
            .add_systems(Update, credits_ui.run_if(in_state(Screen::Credits)))
            .add_systems(
                Update,
                quiz_ui
                    .before(ReplyHandling)
                    .run_if(in_state(Screen::Quiz)),
            );
    }
}

/// Question illustrations, loaded and registered with egui once per path.
/// The strong handle keeps the image alive while egui refers to it.
#[derive(Default)]
struct IllustrationCache(HashMap<String, (Handle<Image>, egui::TextureId)>);

impl IllustrationCache {
    fn texture(
        &mut self,
        path: &str,
        register: impl FnOnce() -> (Handle<Image>, egui::TextureId),
    ) -> egui::TextureId {
        self.0.entry(path.to_string()).or_insert_with(register).1
    }
}

fn main_menu_ui(mut contexts: EguiContexts, mut ev_action: EventWriter<MenuAction>) {
    if let Some(action) = show_main_menu(contexts.ctx_mut()) {
        ev_action.send(action);
    }
}

fn category_ui(
    mut contexts: EguiContexts,
    quiz: Res<Quiz>,
    mut ev_chosen: EventWriter<CategoryChosen>,
    mut ev_action: EventWriter<MenuAction>,
) {
    let categories = quiz.categories();
    match show_category_panel(contexts.ctx_mut(), categories) {
        Some(CategoryPick::Index(index)) => {
            ev_chosen.send(CategoryChosen(index));
        }
        Some(CategoryPick::Random) if !categories.is_empty() => {
            let index = rand::thread_rng().gen_range(0..categories.len());
            debug!("Random category: {}", categories[index].name);
            ev_chosen.send(CategoryChosen(index));
        }
        Some(CategoryPick::Back) => {
            ev_action.send(MenuAction::Back);
        }
        _ => {}
    }
}

fn credits_ui(mut contexts: EguiContexts, mut ev_action: EventWriter<MenuAction>) {
    if show_credits_panel(contexts.ctx_mut()) {
        ev_action.send(MenuAction::Back);
    }
}

fn quiz_ui(
    mut contexts: EguiContexts,
    quiz: Res<Quiz>,
    score: Res<Score>,
    asset_server: Res<AssetServer>,
    mut illustrations: Local<IllustrationCache>,
    mut ev_reply: EventWriter<ReplySelected>,
    mut ev_action: EventWriter<MenuAction>,
) {
    if let Some(summary) = quiz.summary(&score) {
        if let Some(action) = show_finished_panel(contexts.ctx_mut(), &summary) {
            ev_action.send(action);
        }
        return;
    }

    let Some(view) = quiz.current_view() else {
        return;
    };

    let texture = view.image.map(|path| {
        illustrations.texture(path, || {
            let handle: Handle<Image> = asset_server.load(path.to_string());
            let texture = contexts.add_image(handle.clone_weak());
            (handle, texture)
        })
    });

    match show_question_panel(contexts.ctx_mut(), &view, score.value(), texture) {
        Some(QuestionInput::Reply(slot)) => {
            ev_reply.send(ReplySelected(slot));
        }
        Some(QuestionInput::Back) => {
            ev_action.send(MenuAction::Back);
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illustrations_are_registered_once_per_path() {
        let mut cache = IllustrationCache::default();
        let mut registered = 0;

        for _ in 0..3 {
            let texture = cache.texture("flags/jp.png", || {
                registered += 1;
                (Handle::default(), egui::TextureId::User(7))
            });
            assert_eq!(texture, egui::TextureId::User(7));
        }
        assert_eq!(registered, 1);

        cache.texture("flags/fr.png", || {
            registered += 1;
            (Handle::default(), egui::TextureId::User(8))
        });
        assert_eq!(registered, 2);
    }
}
