mod content;
mod input;
mod menu;
mod prefs;
mod quiz;
mod score;
mod settings;
mod ui;

use bevy::prelude::*;
use input::InputPlugin;
use menu::MenuPlugin;
use quiz::QuizPlugin;
use ui::UiPlugin;

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::srgb(0.08, 0.09, 0.14)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Trivia Quiz".into(),
                resolution: (1024., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((MenuPlugin, QuizPlugin, UiPlugin, InputPlugin))
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}
