//! Field and dropdown rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use super::AutocompleteField;
use crate::theme;
use crate::widgets::popup;

const MAX_VISIBLE_SUGGESTIONS: usize = 5;
const DROPDOWN_BORDER_HEIGHT: u16 = 2;
/// Border plus the two-column "► " marker
const DROPDOWN_CHROME_WIDTH: u16 = 4;

/// Render the input box with a focus-aware border
pub fn render_field(field: &mut AutocompleteField, frame: &mut Frame, area: Rect) {
    let focused = field.is_focused();
    let border_color = if focused {
        theme::form::BORDER_FOCUSED
    } else {
        theme::form::BORDER_UNFOCUSED
    };
    let cursor_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    let label = field.label();
    field.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", label))
            .border_style(Style::default().fg(border_color)),
    );
    field.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&field.textarea, area);
}

/// Render the suggestion dropdown under `anchor`
///
/// Returns the dropdown area (for click hit-testing), or None when the
/// dropdown is hidden.
pub fn render_dropdown(
    field: &AutocompleteField,
    frame: &mut Frame,
    anchor: Rect,
    bounds: Rect,
) -> Option<Rect> {
    let suggestions = field.suggestions();
    if suggestions.is_empty() {
        return None;
    }

    let visible_count = suggestions.len().min(MAX_VISIBLE_SUGGESTIONS);
    let height = visible_count as u16 + DROPDOWN_BORDER_HEIGHT;
    let area = popup::popup_below_anchor(anchor, height, bounds);
    if area.height <= DROPDOWN_BORDER_HEIGHT {
        return None;
    }

    let max_text_width = area.width.saturating_sub(DROPDOWN_CHROME_WIDTH) as usize;

    let items: Vec<ListItem> = suggestions
        .iter()
        .take(visible_count)
        .enumerate()
        .map(|(i, suggestion)| {
            let text = popup::truncate_to_width(suggestion, max_text_width);
            let line = if field.highlighted() == Some(i) {
                Line::from(Span::styled(
                    format!("► {}", text),
                    Style::default()
                        .fg(theme::dropdown::ITEM_SELECTED)
                        .bg(theme::dropdown::ITEM_SELECTED_BG)
                        .add_modifier(theme::dropdown::ITEM_SELECTED_MODIFIER),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", text),
                    Style::default()
                        .fg(theme::dropdown::ITEM)
                        .bg(theme::dropdown::BACKGROUND),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::dropdown::BORDER))
            .style(Style::default().bg(theme::dropdown::BACKGROUND)),
    );

    frame.render_widget(list, area);
    Some(area)
}

#[cfg(test)]
#[path = "field_render_tests.rs"]
mod field_render_tests;
