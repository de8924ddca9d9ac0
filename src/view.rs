//! Which panel is on screen
//!
//! The whole navigation state is one enum. History has its own sub-views;
//! every other tab is a single panel.

/// Entries of the tab bar, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Search,
    Profile,
    Publish,
    History,
    Chat,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Search, Tab::Profile, Tab::Publish, Tab::History, Tab::Chat];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Search => "Search",
            Tab::Profile => "Profile",
            Tab::Publish => "Publish",
            Tab::History => "History",
            Tab::Chat => "Chat",
        }
    }

    /// Tab for a 1-based position, as used by the number and F-key shortcuts
    pub fn from_position(position: u8) -> Option<Tab> {
        position
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize))
            .copied()
    }
}

/// Sub-views of the History tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryView {
    #[default]
    Menu,
    BookingHistory,
    RideHistory,
}

/// Entries of the History menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMenuItem {
    Bookings,
    Rides,
}

impl HistoryMenuItem {
    pub const ALL: [HistoryMenuItem; 2] = [HistoryMenuItem::Bookings, HistoryMenuItem::Rides];

    pub fn title(self) -> &'static str {
        match self {
            HistoryMenuItem::Bookings => "Booking History",
            HistoryMenuItem::Rides => "Ride History",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HistoryMenuItem::Bookings => "View your ride bookings",
            HistoryMenuItem::Rides => "View your published rides",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Search,
    Profile,
    Publish,
    History(HistoryView),
    Chat,
}

impl ViewState {
    /// Switch to `tab`; History always opens on its menu
    pub fn select_tab(&mut self, tab: Tab) {
        *self = match tab {
            Tab::Search => ViewState::Search,
            Tab::Profile => ViewState::Profile,
            Tab::Publish => ViewState::Publish,
            Tab::History => ViewState::History(HistoryView::Menu),
            Tab::Chat => ViewState::Chat,
        };
    }

    /// No-op outside the History tab
    pub fn open_booking_history(&mut self) {
        if let ViewState::History(view) = self {
            *view = HistoryView::BookingHistory;
        }
    }

    /// No-op outside the History tab
    pub fn open_ride_history(&mut self) {
        if let ViewState::History(view) = self {
            *view = HistoryView::RideHistory;
        }
    }

    pub fn open_history_item(&mut self, item: HistoryMenuItem) {
        match item {
            HistoryMenuItem::Bookings => self.open_booking_history(),
            HistoryMenuItem::Rides => self.open_ride_history(),
        }
    }

    /// Leave a history list for the menu; does nothing anywhere else
    pub fn back(&mut self) {
        if let ViewState::History(view) = self {
            *view = HistoryView::Menu;
        }
    }

    /// The tab this state belongs to
    pub fn tab(self) -> Tab {
        match self {
            ViewState::Search => Tab::Search,
            ViewState::Profile => Tab::Profile,
            ViewState::Publish => Tab::Publish,
            ViewState::History(_) => Tab::History,
            ViewState::Chat => Tab::Chat,
        }
    }

    pub fn history_view(self) -> Option<HistoryView> {
        match self {
            ViewState::History(view) => Some(view),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod view_tests;
