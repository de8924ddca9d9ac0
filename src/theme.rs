//! Color palette, grouped by screen element

pub mod nav {
    use ratatui::style::{Color, Modifier};

    pub const BORDER: Color = Color::Cyan;
    pub const BRAND: Color = Color::Cyan;
    pub const TAB_ACTIVE: Color = Color::Black;
    pub const TAB_ACTIVE_BG: Color = Color::Cyan;
    pub const TAB_ACTIVE_MODIFIER: Modifier = Modifier::BOLD;
    pub const TAB_INACTIVE: Color = Color::Gray;
}

pub mod form {
    use ratatui::style::{Color, Modifier};

    pub const HEADING: Color = Color::Cyan;
    pub const HEADING_MODIFIER: Modifier = Modifier::BOLD;
    pub const SUBHEADING: Color = Color::DarkGray;
    pub const BORDER_FOCUSED: Color = Color::Cyan;
    pub const BORDER_UNFOCUSED: Color = Color::DarkGray;
    pub const PLACEHOLDER: Color = Color::DarkGray;
    pub const BUTTON: Color = Color::Black;
    pub const BUTTON_BG: Color = Color::Cyan;
    pub const BUTTON_IDLE_BG: Color = Color::DarkGray;
    pub const HINT: Color = Color::DarkGray;
}

pub mod dropdown {
    use ratatui::style::{Color, Modifier};

    pub const BORDER: Color = Color::Cyan;
    pub const BACKGROUND: Color = Color::Black;
    pub const ITEM: Color = Color::White;
    pub const ITEM_SELECTED: Color = Color::Black;
    pub const ITEM_SELECTED_BG: Color = Color::Cyan;
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;
}

pub mod history {
    use ratatui::style::{Color, Modifier};

    pub const BORDER: Color = Color::Cyan;
    pub const ITEM_SELECTED_BAR: Color = Color::Cyan;
    pub const ITEM_SELECTED_BG: Color = Color::Rgb(40, 44, 52);
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;
    pub const DESCRIPTION: Color = Color::DarkGray;
    pub const ROUTE: Color = Color::White;
    pub const DATE: Color = Color::DarkGray;
    pub const STATUS: Color = Color::Cyan;
    pub const EMPTY: Color = Color::DarkGray;
    pub const BACK: Color = Color::Yellow;
}

pub mod modal {
    use ratatui::style::Color;

    pub const BORDER_CONFIRMED: Color = Color::Cyan;
    pub const BORDER_INVALID: Color = Color::Yellow;
    pub const TEXT: Color = Color::White;
    pub const BUTTON: Color = Color::Black;
    pub const BUTTON_BG: Color = Color::Cyan;
}
