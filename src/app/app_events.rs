use std::time::Instant;

use chrono::NaiveDate;
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use super::app_state::App;
use super::mouse_click::handle_click;
use crate::form::handle_form_key;
use crate::layout::region_at;
use crate::view::{HistoryMenuItem, HistoryView, Tab, ViewState};

impl App {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant, today: NaiveDate) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now, today);
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let region = region_at(&self.layout_regions, mouse.column, mouse.row);
                handle_click(self, region, now);
            }
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant, today: NaiveDate) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.view {
            ViewState::Search => {
                if let Some(outcome) = handle_form_key(&mut self.form, key, now, today) {
                    self.message = Some(outcome);
                }
            }
            ViewState::History(view) => {
                if !self.handle_navigation_keys(key) {
                    self.handle_history_key(view, key);
                }
            }
            ViewState::Profile | ViewState::Publish | ViewState::Chat => {
                self.handle_navigation_keys(key);
            }
        }
    }

    /// Keys that work regardless of the view
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // The modal swallows everything until dismissed
        if self.message.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_message();
            }
            return true;
        }

        if let KeyCode::F(n) = key.code
            && let Some(tab) = Tab::from_position(n)
        {
            self.select_tab(tab);
            return true;
        }

        false
    }

    /// Number keys and `q`, available wherever no text is being typed
    fn handle_navigation_keys(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                true
            }
            KeyCode::Char(ch @ '1'..='5') => {
                if let Some(tab) = Tab::from_position(ch as u8 - b'0') {
                    self.select_tab(tab);
                }
                true
            }
            _ => false,
        }
    }

    fn handle_history_key(&mut self, view: HistoryView, key: KeyEvent) {
        match view {
            HistoryView::Menu => match key.code {
                KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k') | KeyCode::Tab => {
                    self.history_selection = match self.history_selection {
                        HistoryMenuItem::Bookings => HistoryMenuItem::Rides,
                        HistoryMenuItem::Rides => HistoryMenuItem::Bookings,
                    };
                }
                KeyCode::Enter => self.view.open_history_item(self.history_selection),
                _ => {}
            },
            HistoryView::BookingHistory | HistoryView::RideHistory => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
                    self.view.back();
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
