use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::app_state::App;
use crate::form::{SubmitOutcome, render_search_panel};
use crate::history::{render_menu, render_records};
use crate::theme;
use crate::view::{HistoryView, Tab, ViewState};
use crate::widgets::popup;

const BRAND: &str = " RideShare ";
const TAB_BAR_HEIGHT: u16 = 3;
const PANEL_MAX_WIDTH: u16 = 64;
const PANEL_HEIGHT: u16 = 12;
const COMING_SOON: &str = "This section is coming soon!";
const MODAL_WIDTH: u16 = 60;
const MODAL_BUTTON: &str = " Got it! ";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(frame.area());
        let body = layout[2];

        self.layout_regions.tabs = render_tab_bar(frame, layout[0], self.view.tab());

        match self.view {
            ViewState::Search => {
                self.layout_regions.form = render_search_panel(&mut self.form, frame, body);
            }
            ViewState::History(HistoryView::Menu) => {
                self.layout_regions.history_items =
                    render_menu(frame, panel_area(body), self.history_selection);
            }
            ViewState::History(_) => {
                let records = self.history_records();
                self.layout_regions.history_back =
                    Some(render_records(frame, panel_area(body), &records));
            }
            ViewState::Profile | ViewState::Publish | ViewState::Chat => {
                render_placeholder(frame, panel_area(body), self.view.tab());
            }
        }

        if let Some(outcome) = &self.message {
            self.layout_regions.modal_button = Some(render_message_modal(frame, outcome));
        }
    }
}

/// Area for the fixed-size panels, centred horizontally at the top of `body`
fn panel_area(body: Rect) -> Rect {
    let width = body.width.min(PANEL_MAX_WIDTH);
    Rect {
        x: body.x + (body.width - width) / 2,
        y: body.y,
        width,
        height: body.height.min(PANEL_HEIGHT),
    }
}

/// Render the brand and tab labels; returns the clickable area of each tab
fn render_tab_bar(frame: &mut Frame, area: Rect, active: Tab) -> Vec<(Tab, Rect)> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::nav::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![Span::styled(
        BRAND,
        Style::default()
            .fg(theme::nav::BRAND)
            .add_modifier(Modifier::BOLD),
    )];
    let mut x = inner.x + BRAND.width() as u16;
    let mut regions = Vec::with_capacity(Tab::ALL.len());

    for (i, tab) in Tab::ALL.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, tab.label());
        let width = label.width() as u16;
        let style = if *tab == active {
            Style::default()
                .fg(theme::nav::TAB_ACTIVE)
                .bg(theme::nav::TAB_ACTIVE_BG)
                .add_modifier(theme::nav::TAB_ACTIVE_MODIFIER)
        } else {
            Style::default().fg(theme::nav::TAB_INACTIVE)
        };
        spans.push(Span::raw(" "));
        x += 1;
        spans.push(Span::styled(label, style));
        regions.push((
            *tab,
            Rect {
                x,
                y: area.y,
                width,
                height: area.height,
            }
            .intersection(area),
        ));
        x += width;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    regions
}

fn render_placeholder(frame: &mut Frame, area: Rect, tab: Tab) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", tab.label()))
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(theme::form::BORDER_FOCUSED));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(inner);
    frame.render_widget(
        Paragraph::new(tab.label())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme::form::HEADING)
                    .add_modifier(theme::form::HEADING_MODIFIER),
            ),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(COMING_SOON)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme::form::SUBHEADING)),
        rows[2],
    );
}

/// Render the centred message popup; returns the button area
fn render_message_modal(frame: &mut Frame, outcome: &SubmitOutcome) -> Rect {
    let (title, border) = match outcome {
        SubmitOutcome::Confirmed(_) => (" Search Started! ", theme::modal::BORDER_CONFIRMED),
        SubmitOutcome::Invalid(_) => (" Missing Details ", theme::modal::BORDER_INVALID),
    };

    // Inner width less one column of padding on each side
    let text_width = MODAL_WIDTH.saturating_sub(4).max(1);
    let text_lines = (outcome.message().width() as u16).div_ceil(text_width) + 1;
    let height = text_lines + 6;

    let area = popup::centered_popup(frame.area(), MODAL_WIDTH, height);
    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .horizontal_margin(1)
    .split(inner);

    frame.render_widget(
        Paragraph::new(outcome.message())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(theme::modal::TEXT)),
        rows[1],
    );

    let button_width = (MODAL_BUTTON.width() as u16).min(rows[3].width);
    let button = Rect {
        x: rows[3].x + (rows[3].width - button_width) / 2,
        y: rows[3].y,
        width: button_width,
        height: rows[3].height,
    };
    frame.render_widget(
        Paragraph::new(MODAL_BUTTON).style(
            Style::default()
                .fg(theme::modal::BUTTON)
                .bg(theme::modal::BUTTON_BG)
                .add_modifier(Modifier::BOLD),
        ),
        button,
    );
    button
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
