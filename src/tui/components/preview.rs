//! Code preview component.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, ClickRegion};
use crate::tui::theme::*;

/// Render the code of the selected example with dim line numbers.
pub fn render_preview(frame: &mut Frame, area: Rect, app: &mut App) {
    let title = match app.example {
        Some(record) => format!(" {} (id {}) ", record.name, record.id),
        None => " No example selected ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::new().fg(TEXT_WHITE).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM));

    let inner = block.inner(area);
    app.set_viewport_height(inner.height as usize);
    app.click_areas.preview = ClickRegion::new(area.x, area.y, area.width, area.height);

    let mut lines: Vec<Line> = vec![];

    match app.example {
        Some(record) => {
            let total = record.code.lines().count();
            let number_width = total.to_string().len();

            for (n, text) in record
                .code
                .lines()
                .enumerate()
                .skip(app.preview_scroll)
                .take(inner.height as usize)
            {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:>width$} ", n + 1, width = number_width),
                        Style::new().fg(TEXT_DIM),
                    ),
                    Span::styled(text, Style::new().fg(TEXT_WHITE)),
                ]));
            }
        }
        None => {
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                "  Pick an example from the list (Enter) to preview it here.",
                Style::new().fg(TEXT_DIM),
            ));
            lines.push(Line::styled(
                "  Names starting with + run cleanly, - are intentionally broken.",
                Style::new().fg(TEXT_DIM),
            ));
        }
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
