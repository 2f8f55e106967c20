use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, InputMode};
use super::components::*;
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Main vertical layout: logo, content, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Logo + spacing
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);

    // Horizontal split: example list | separator | preview
    let content_layout = Layout::horizontal([
        Constraint::Length(42), // Sidebar
        Constraint::Length(1),  // Separator
        Constraint::Min(0),     // Preview
    ])
    .split(main_layout[1]);

    render_example_list(frame, content_layout[0], app);
    render_separator(frame, content_layout[1]);
    render_preview(frame, content_layout[2], app);

    render_hotkeys(frame, main_layout[2], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, area);
    }
}

fn render_logo(frame: &mut Frame, area: Rect) {
    // Center the colorful "snippick" logo
    let padding = (area.width.saturating_sub(8)) / 2;
    let centered = Line::from(vec![
        Span::raw(" ".repeat(padding as usize)),
        Span::styled("sn", Style::new().fg(LOGO_CORAL).bold()),
        Span::styled("ip", Style::new().fg(LOGO_GOLD).bold()),
        Span::styled("pi", Style::new().fg(LOGO_LIGHT_BLUE).bold()),
        Span::styled("ck", Style::new().fg(LOGO_MINT).bold()),
    ]);

    let paragraph = Paragraph::new(centered);
    frame.render_widget(paragraph, area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let pairs: &[(&str, &str)] = match app.input_mode {
        InputMode::Filter => &[
            ("[Enter]", "select"),
            ("[Esc]", "clear filter"),
            ("[↑/↓]", "navigate"),
        ],
        _ => &[
            ("[Enter]", "select"),
            ("[/]", "filter"),
            ("[y]", "copy"),
            ("[?]", "help"),
            ("[q]", "quit"),
        ],
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, label)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::new().fg(TEXT_DIM)));
        }
        spans.push(Span::styled(*key, Style::new().fg(TEXT_WHITE)));
        spans.push(Span::styled(format!(" {}", label), Style::new().fg(TEXT_DIM)));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}
