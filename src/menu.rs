use bevy::prelude::*;

use crate::prefs::Prefs;

/// Top-level screens of the game.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    MainMenu,
    Category,
    Quiz,
    Credits,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Back,
    Credits,
    Exit,
}

/// Sent by the category screen with the index of the picked category.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryChosen(pub usize);

pub struct MenuPlugin;
impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<Screen>()
            .add_event::<MenuAction>()
            .add_event::<CategoryChosen>()
            .add_systems(Update, (dispatch_menu_actions, apply_category_choice));
    }
}

pub(crate) fn dispatch_menu_actions(
    mut ev_action: EventReader<MenuAction>,
    mut next_screen: ResMut<NextState<Screen>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    for action in ev_action.read() {
        match action {
            MenuAction::Play => next_screen.set(Screen::Category),
            MenuAction::Back => next_screen.set(Screen::MainMenu),
            MenuAction::Credits => next_screen.set(Screen::Credits),
            MenuAction::Exit => {
                info!("Quit button pressed. Exiting game...");
                ev_exit.send(AppExit::Success);
            }
        }
    }
}

pub(crate) fn apply_category_choice(
    mut ev_chosen: EventReader<CategoryChosen>,
    mut prefs: ResMut<Prefs>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    // Several clicks in one frame: the last one wins.
    let Some(CategoryChosen(index)) = ev_chosen.read().last().copied() else {
        return;
    };

    prefs.selected_category = i32::try_from(index).unwrap_or(i32::MAX);
    if let Err(err) = prefs.save() {
        warn!("Could not save selected category: {err}");
    }
    next_screen.set(Screen::Quiz);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;
    use std::fs;
    use std::path::PathBuf;

    fn temp_prefs_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("trivia-quiz-menu-{}-{name}.toml", std::process::id()))
    }

    fn menu_app_with_prefs(prefs_path: PathBuf) -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .add_event::<AppExit>()
            .insert_resource(Prefs::at(prefs_path))
            .add_plugins(MenuPlugin);
        app.update();
        app
    }

    fn menu_app() -> App {
        menu_app_with_prefs(temp_prefs_path("nav"))
    }

    fn screen(app: &App) -> Screen {
        *app.world().resource::<State<Screen>>().get()
    }

    fn act(app: &mut App, action: MenuAction) {
        app.world_mut().send_event(action);
        // One frame to queue the transition, one to apply it.
        app.update();
        app.update();
    }

    #[test]
    fn starts_on_main_menu() {
        let app = menu_app();
        assert_eq!(screen(&app), Screen::MainMenu);
    }

    #[test]
    fn play_back_and_credits_navigate() {
        let mut app = menu_app();

        act(&mut app, MenuAction::Play);
        assert_eq!(screen(&app), Screen::Category);

        act(&mut app, MenuAction::Back);
        assert_eq!(screen(&app), Screen::MainMenu);

        act(&mut app, MenuAction::Credits);
        assert_eq!(screen(&app), Screen::Credits);
    }

    #[test]
    fn exit_requests_app_exit() {
        let mut app = menu_app();
        app.world_mut().send_event(MenuAction::Exit);
        app.update();

        let exits = app.world().resource::<Events<AppExit>>();
        assert!(!exits.is_empty());
        assert_eq!(screen(&app), Screen::MainMenu);
    }

    #[test]
    fn choosing_a_category_stores_it_and_opens_the_quiz() {
        let path = temp_prefs_path("choice");
        let mut app = menu_app_with_prefs(path.clone());
        act(&mut app, MenuAction::Play);

        app.world_mut().send_event(CategoryChosen(2));
        app.update();
        app.update();

        assert_eq!(app.world().resource::<Prefs>().selected_category, 2);
        assert_eq!(screen(&app), Screen::Quiz);

        // Written through to disk for the next run.
        assert_eq!(Prefs::load(&path).unwrap().selected_category, 2);
        fs::remove_file(&path).unwrap();
    }
}
