#[cfg(test)]
pub mod test_helpers {
    use std::time::{Duration, Instant};

    use chrono::NaiveDate;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    use crate::app::App;
    use crate::config::Config;
    use crate::geocode::PlaceSuggestion;
    use crate::history::EmptyHistory;
    use crate::suggest::{PlaceLookup, SuggestWorker};

    /// App without a suggestion worker
    pub fn test_app() -> App {
        App::new(&Config::default(), None, Box::new(EmptyHistory))
    }

    /// App whose worker answers every lookup with `results`
    pub fn app_with_results(results: &[&str]) -> App {
        let lookup = FixedLookup(results.iter().map(|s| s.to_string()).collect());
        let worker = SuggestWorker::spawn(lookup).unwrap();
        App::new(&Config::default(), Some(worker), Box::new(EmptyHistory))
    }

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.handle_key_event(key(code), now, today());
    }

    pub fn type_str(app: &mut App, text: &str, now: Instant) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch), now);
        }
    }

    /// Keep ticking at `now` until `done` holds or the timeout passes
    ///
    /// Returns true if the condition was met.
    pub fn tick_until(app: &mut App, now: Instant, done: impl Fn(&App) -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            app.tick(now);
            if done(app) {
                return true;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        false
    }

    pub fn render_app(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal.backend().to_string()
    }

    struct FixedLookup(Vec<PlaceSuggestion>);

    impl PlaceLookup for FixedLookup {
        async fn lookup(&self, _text: &str) -> Vec<PlaceSuggestion> {
            self.0.clone()
        }
    }
}
