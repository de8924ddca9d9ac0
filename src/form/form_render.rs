//! Search panel rendering

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{FormFocus, SearchForm};
use crate::field::{render_dropdown, render_field};
use crate::suggest::FieldId;
use crate::theme;

const MAX_FORM_WIDTH: u16 = 64;
const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";
const HINT: &str = "Tab next · ↑/↓ pick suggestion · Enter search · F1-F5 tabs · Ctrl+C quit";

/// Screen areas of the rendered form, for mouse hit-testing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRegions {
    pub controls: Vec<(FormFocus, Rect)>,
    /// Open dropdowns in drawing order; a later one is on top
    pub dropdowns: Vec<(FieldId, Rect)>,
}

/// Render the search panel into `area`
pub fn render_search_panel(form: &mut SearchForm, frame: &mut Frame, area: Rect) -> FormRegions {
    let width = area.width.min(MAX_FORM_WIDTH);
    let panel = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    };

    let layout = Layout::vertical([
        Constraint::Length(1), // Heading
        Constraint::Length(1), // Subheading
        Constraint::Length(1), // Spacer
        Constraint::Length(3), // Origin
        Constraint::Length(3), // Destination
        Constraint::Length(3), // Date and passengers
        Constraint::Length(3), // Submit
        Constraint::Length(1), // Hint
        Constraint::Min(0),
    ])
    .split(panel);

    render_heading(frame, layout[0], layout[1]);

    let row = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[5]);

    let focus = form.focus();
    render_field(&mut form.origin, frame, layout[3]);
    render_field(&mut form.destination, frame, layout[4]);
    render_date(form, frame, row[0], focus == FormFocus::Date);
    render_passengers(form, frame, row[1], focus == FormFocus::Passengers);
    render_submit(frame, layout[6], focus == FormFocus::Submit);

    frame.render_widget(
        Paragraph::new(HINT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme::form::HINT)),
        layout[7],
    );

    // Open dropdowns overlay the controls below their field; the focused
    // field's list is drawn last so it stays on top
    let mut anchors = [(FieldId::Origin, layout[3]), (FieldId::Destination, layout[4])];
    anchors.sort_by_key(|(id, _)| form.field(*id).is_focused());
    let dropdowns = anchors
        .into_iter()
        .filter_map(|(id, anchor)| {
            render_dropdown(form.field(id), frame, anchor, panel).map(|area| (id, area))
        })
        .collect();

    FormRegions {
        controls: vec![
            (FormFocus::Origin, layout[3]),
            (FormFocus::Destination, layout[4]),
            (FormFocus::Date, row[0]),
            (FormFocus::Passengers, row[1]),
            (FormFocus::Submit, layout[6]),
        ],
        dropdowns,
    }
}

fn render_heading(frame: &mut Frame, heading: Rect, subheading: Rect) {
    frame.render_widget(
        Paragraph::new("Find Your Perfect Ride")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme::form::HEADING)
                    .add_modifier(theme::form::HEADING_MODIFIER),
            ),
        heading,
    );
    frame.render_widget(
        Paragraph::new("Safe, affordable, and convenient travel")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme::form::SUBHEADING)),
        subheading,
    );
}

fn control_block(title: &'static str, focused: bool) -> Block<'static> {
    let border_color = if focused {
        theme::form::BORDER_FOCUSED
    } else {
        theme::form::BORDER_UNFOCUSED
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(border_color))
}

fn render_date(form: &SearchForm, frame: &mut Frame, area: Rect, focused: bool) {
    let line = if form.date().is_empty() {
        Line::from(Span::styled(
            DATE_PLACEHOLDER,
            Style::default().fg(theme::form::PLACEHOLDER),
        ))
    } else {
        Line::from(form.date().to_string())
    };
    frame.render_widget(
        Paragraph::new(line).block(control_block(" Date ", focused)),
        area,
    );
}

fn render_passengers(form: &SearchForm, frame: &mut Frame, area: Rect, focused: bool) {
    // An empty input counts as 0, so that is what the box shows
    let line = if form.passengers_text().is_empty() {
        Line::from(Span::styled(
            form.passengers().to_string(),
            Style::default().fg(theme::form::PLACEHOLDER),
        ))
    } else {
        Line::from(form.passengers_text().to_string())
    };
    frame.render_widget(
        Paragraph::new(line).block(control_block(" Passengers ", focused)),
        area,
    );
}

fn render_submit(frame: &mut Frame, area: Rect, focused: bool) {
    let bg = if focused {
        theme::form::BUTTON_BG
    } else {
        theme::form::BUTTON_IDLE_BG
    };
    let button = Paragraph::new("Find Rides")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme::form::BUTTON)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    frame.render_widget(button, area);
}

#[cfg(test)]
#[path = "form_render_tests.rs"]
mod form_render_tests;
