pub mod category_panel;
pub mod credits_panel;
pub mod finished_panel;
pub mod main_menu;
pub mod question_panel;
