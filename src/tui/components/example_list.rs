//! Example list sidebar component.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, ClickRegion, InputMode};
use crate::selector::Selector;
use crate::tui::theme::*;

/// Render the example list: the selector's choices narrowed by the name
/// filter, with the cursor row and the active (selected) option marked.
pub fn render_example_list(frame: &mut Frame, area: Rect, app: &mut App) {
    let mut lines: Vec<Line> = vec![];
    app.click_areas.example_items.clear();

    // Header
    lines.push(Line::from(vec![Span::styled(
        "Examples",
        Style::new().fg(LOGO_LIGHT_BLUE).bold(),
    )]));

    // Filter input line (shown while filtering or when a query is in effect)
    let filtering = app.input_mode == InputMode::Filter;
    if filtering || !app.list.query.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Filter: ", Style::new().fg(LOGO_LIGHT_BLUE)),
            Span::styled(app.list.query.clone(), Style::new().fg(TEXT_WHITE)),
        ]));

        if filtering {
            // Cursor after "Filter: " (8 chars), at the query cursor
            let cursor_chars = app.list.query[..app.list.query_cursor].chars().count();
            let x = area.x + 8 + cursor_chars as u16;
            let y = area.y + 1;
            frame.set_cursor_position(Position::new(x, y));
        }
    }
    lines.push(Line::raw("")); // spacing

    // Choices derive from the catalog; the filter narrows which are shown.
    let selector = Selector::new().with_selected(app.example);
    let visible: Vec<_> = selector
        .choices()
        .into_iter()
        .filter(|c| app.list.filtered.contains(&c.value))
        .collect();

    if visible.is_empty() {
        lines.push(Line::styled(
            "  (no matching examples)",
            Style::new().fg(TEXT_DIM),
        ));
    }

    // Window the list so the cursor row stays on screen.
    let header_rows = lines.len();
    let rows = (area.height as usize).saturating_sub(header_rows).max(1);
    let offset = (app.list.cursor + 1).saturating_sub(rows);

    for (i, choice) in visible.iter().enumerate().skip(offset).take(rows) {
        let is_cursor = i == app.list.cursor;
        let cursor = if is_cursor { "> " } else { "  " };
        let marker = if choice.active { "● " } else { "  " };

        let name_style = if is_cursor {
            Style::new().fg(TEXT_WHITE).bold()
        } else if choice.label.starts_with('-') {
            Style::new().fg(BROKEN_RED)
        } else {
            Style::new().fg(VALID_GREEN)
        };

        lines.push(Line::from(vec![
            Span::styled(
                cursor,
                if is_cursor {
                    Style::new().fg(LOGO_MINT)
                } else {
                    Style::new().fg(TEXT_DIM)
                },
            ),
            Span::styled(marker, Style::new().fg(LOGO_MINT)),
            Span::styled(choice.label, name_style),
        ]));

        // Row region for click-to-select, keyed by filtered-list index
        let y = area.y + (lines.len() - 1) as u16;
        app.click_areas
            .example_items
            .push((i, ClickRegion::new(area.x, y, area.width, 1)));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}
