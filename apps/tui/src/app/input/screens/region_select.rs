use crossterm::event::KeyCode;

use crate::app::state::{App, AppScreen};

pub fn handle_region_select_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => app.region_input.push(c),
        KeyCode::Backspace => {
            app.region_input.pop();
        }
        KeyCode::Enter => {
            app.commit_region();
        }
        KeyCode::F(1) => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            // With a committed region Esc simply cancels the edit;
            // before the first selection it quits.
            if app.region.is_some() {
                app.region_input.clear();
                app.screen = AppScreen::Timetable;
            } else {
                app.running = false;
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::app::AppActions;
    use crate::domain::Day;
    use url::Url;

    fn test_app(region: Option<&str>) -> App {
        let client = ApiClient::new(Url::parse("http://127.0.0.1:5000").expect("base url"));
        App::new(
            AppActions::new(client),
            region.map(str::to_string),
            Day::Monday,
        )
    }

    #[test]
    fn typed_characters_build_the_region() {
        let mut app = test_app(None);
        for c in "north".chars() {
            handle_region_select_input(&mut app, KeyCode::Char(c));
        }
        handle_region_select_input(&mut app, KeyCode::Backspace);
        assert_eq!(app.region_input, "nort");
    }

    #[test]
    fn enter_commits_and_switches_to_the_timetable() {
        let mut app = test_app(None);
        app.region_input = "Central".to_string();
        handle_region_select_input(&mut app, KeyCode::Enter);
        assert_eq!(app.region.as_deref(), Some("Central"));
        assert_eq!(app.screen, AppScreen::Timetable);
    }

    #[test]
    fn esc_quits_only_before_the_first_selection() {
        let mut app = test_app(None);
        handle_region_select_input(&mut app, KeyCode::Esc);
        assert!(!app.running);

        let mut app = test_app(Some("Central"));
        app.screen = AppScreen::RegionSelect;
        app.region_input = "typo".to_string();
        handle_region_select_input(&mut app, KeyCode::Esc);
        assert!(app.running);
        assert_eq!(app.screen, AppScreen::Timetable);
        assert!(app.region_input.is_empty());
    }
}
