use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::HistoryRecord;
use crate::theme;
use crate::view::HistoryMenuItem;

/// Both history lists share this heading
pub const HISTORY_LIST_TITLE: &str = "My Ride History";
pub const EMPTY_HISTORY_TEXT: &str = "You have not published any rides yet.";

const MENU_TITLE: &str = " Your History ";
const BACK_CONTROL: &str = " [x] Esc back ";
const MENU_ITEM_HEIGHT: u16 = 4;

fn panel_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(theme::history::BORDER))
}

/// Render the history menu
///
/// Returns the area of each entry for click hit-testing.
pub fn render_menu(
    frame: &mut Frame,
    area: Rect,
    selected: HistoryMenuItem,
) -> Vec<(HistoryMenuItem, Rect)> {
    let block = panel_block(MENU_TITLE.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(MENU_ITEM_HEIGHT),
        Constraint::Length(MENU_ITEM_HEIGHT),
        Constraint::Min(0),
    ])
    .split(inner);

    HistoryMenuItem::ALL
        .iter()
        .zip(rows.iter())
        .map(|(item, row)| {
            render_menu_item(frame, *row, *item, *item == selected);
            (*item, *row)
        })
        .collect()
}

fn render_menu_item(frame: &mut Frame, area: Rect, item: HistoryMenuItem, is_selected: bool) {
    let (bar, style) = if is_selected {
        (
            Span::styled(" ┃ ", Style::default().fg(theme::history::ITEM_SELECTED_BAR)),
            Style::default()
                .bg(theme::history::ITEM_SELECTED_BG)
                .add_modifier(theme::history::ITEM_SELECTED_MODIFIER),
        )
    } else {
        (Span::raw("   "), Style::default())
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![bar.clone(), Span::raw(item.title())]),
        Line::from(vec![
            bar,
            Span::styled(
                item.description(),
                Style::default().fg(theme::history::DESCRIPTION),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).style(style), area);
}

/// Render a list of records, or the empty notice when there are none
///
/// Returns the area of the close control in the list header.
pub fn render_records(frame: &mut Frame, area: Rect, records: &[HistoryRecord]) -> Rect {
    let block = panel_block(format!(" {} ", HISTORY_LIST_TITLE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [header, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    let back_width = (BACK_CONTROL.width() as u16).min(header.width);
    let back = Rect {
        x: header.right() - back_width,
        width: back_width,
        ..header
    };
    frame.render_widget(
        Paragraph::new(BACK_CONTROL).style(Style::default().fg(theme::history::BACK)),
        back,
    );

    if records.is_empty() {
        let [_, notice, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(body);
        frame.render_widget(
            Paragraph::new(EMPTY_HISTORY_TEXT)
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme::history::EMPTY)),
            notice,
        );
        return back;
    }

    let items: Vec<ListItem> = records
        .iter()
        .map(|record| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!(" {} → {}", record.from, record.to),
                        Style::default().fg(theme::history::ROUTE),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!("[{}]", record.status),
                        Style::default().fg(theme::history::STATUS),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(" {}", record.date),
                    Style::default().fg(theme::history::DATE),
                )),
            ])
        })
        .collect();

    frame.render_widget(List::new(items), body);
    back
}

#[cfg(test)]
#[path = "history_render_tests.rs"]
mod history_render_tests;
