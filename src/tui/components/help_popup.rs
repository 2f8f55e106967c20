//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::theme::*;

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), Style::new().fg(TEXT_WHITE)),
        Span::styled(description, Style::new().fg(TEXT_DIM)),
    ])
}

/// Render the help popup with keyboard shortcuts and the naming legend.
pub fn render_help_popup(frame: &mut Frame, area: Rect) {
    // Calculate centered popup area
    let popup_width = 52u16;
    let popup_height = 22u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![];

    lines.push(Line::from(vec![Span::styled(
        "Keyboard Shortcuts",
        Style::new().fg(TEXT_WHITE).bold(),
    )]));
    lines.push(Line::raw(""));

    lines.push(Line::styled(
        "Browse",
        Style::new().fg(LOGO_LIGHT_BLUE).bold(),
    ));
    lines.push(key_line("j/k ↑/↓", "Move highlight"));
    lines.push(key_line("g / G", "First / last example"));
    lines.push(key_line("1-9", "Jump to example"));
    lines.push(key_line("Enter", "Select highlighted example"));
    lines.push(key_line("Esc", "Clear selection"));
    lines.push(key_line("/", "Filter by name"));
    lines.push(key_line("y", "Copy selected code"));
    lines.push(key_line("q", "Quit"));
    lines.push(Line::raw(""));

    lines.push(Line::styled(
        "Preview",
        Style::new().fg(LOGO_LIGHT_BLUE).bold(),
    ));
    lines.push(key_line("Ctrl+u/d", "Scroll half page"));
    lines.push(key_line("PgUp/PgDn", "Scroll full page"));
    lines.push(key_line("Home/End", "Top / bottom"));
    lines.push(key_line("Wheel", "Scroll"));
    lines.push(Line::raw(""));

    lines.push(Line::styled(
        "Legend",
        Style::new().fg(LOGO_LIGHT_BLUE).bold(),
    ));
    lines.push(Line::from(vec![
        Span::styled("  + ", Style::new().fg(VALID_GREEN)),
        Span::styled("runs cleanly   ", Style::new().fg(TEXT_DIM)),
        Span::styled("- ", Style::new().fg(BROKEN_RED)),
        Span::styled("intentionally broken", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::new().fg(LOGO_MINT).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_MINT));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);
}
