use crate::menu::{MenuAction, Screen};
use crate::quiz::{ReplyHandling, ReplySelected};
use bevy::prelude::*;

const REPLY_KEYS: [(KeyCode, KeyCode); 9] = [
    (KeyCode::Digit1, KeyCode::Numpad1),
    (KeyCode::Digit2, KeyCode::Numpad2),
    (KeyCode::Digit3, KeyCode::Numpad3),
    (KeyCode::Digit4, KeyCode::Numpad4),
    (KeyCode::Digit5, KeyCode::Numpad5),
    (KeyCode::Digit6, KeyCode::Numpad6),
    (KeyCode::Digit7, KeyCode::Numpad7),
    (KeyCode::Digit8, KeyCode::Numpad8),
    (KeyCode::Digit9, KeyCode::Numpad9),
];

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                reply_hotkeys
                    .before(ReplyHandling)
                    .run_if(in_state(Screen::Quiz)),
                back_to_menu,
            ),
        );
    }
}

fn reply_hotkeys(keys: Res<ButtonInput<KeyCode>>, mut ev_reply: EventWriter<ReplySelected>) {
    for (slot, (digit, numpad)) in REPLY_KEYS.iter().enumerate() {
        if keys.just_pressed(*digit) || keys.just_pressed(*numpad) {
            ev_reply.send(ReplySelected(slot));
        }
    }
}

fn back_to_menu(
    keys: Res<ButtonInput<KeyCode>>,
    screen: Res<State<Screen>>,
    mut ev_action: EventWriter<MenuAction>,
) {
    if keys.just_pressed(KeyCode::Escape) && *screen.get() != Screen::MainMenu {
        ev_action.send(MenuAction::Back);
    }
}
