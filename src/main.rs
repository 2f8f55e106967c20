mod app;
mod catalog;
mod clipboard;
mod config;
mod error;
mod log;
mod picker;
mod scroll;
mod selector;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;

use app::{App, InputMode};
use catalog::ExampleRecord;
use config::Config;
use picker::Picker;
use scroll::ScrollHelper;
use selector::Selector;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments: an optional example id to preselect
    let args: Vec<String> = std::env::args().collect();
    let mut cli_example: Option<u32> = None;

    for arg in &args[1..] {
        if arg.starts_with('-') {
            // Unknown flag, ignore
            continue;
        }
        match arg.parse::<u32>() {
            Ok(id) => cli_example = Some(id),
            Err(_) => {
                eprintln!("Warning: '{}' is not an example id, ignoring", arg);
            }
        }
    }

    // Preselect precedence: CLI > env var > config file
    let env_example = std::env::var("SNIPPICK_EXAMPLE")
        .ok()
        .and_then(|v| v.parse().ok());
    let config = Config::load().with_overrides(cli_example.or(env_example));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config);

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut wheel = ScrollHelper::default();

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        let Some(event) = event_stream.next().await else {
            return Ok(());
        };
        let event = match event {
            Ok(event) => event,
            Err(_) => continue,
        };

        // Paste goes into the filter query
        if let Event::Paste(text) = &event {
            if app.input_mode == InputMode::Filter {
                app.list.input_paste(text);
            }
            continue;
        }

        // Mouse: wheel scrolls the preview, click picks a list row
        if let Event::Mouse(mouse) = &event {
            match mouse.kind {
                MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                    if app.click_areas.preview.contains(mouse.column, mouse.row) {
                        let step = if mouse.kind == MouseEventKind::ScrollUp {
                            -3
                        } else {
                            3
                        };
                        if let Some(delta) = wheel.accumulate(step) {
                            if delta < 0 {
                                app.scroll_up(delta.unsigned_abs() as usize);
                            } else {
                                app.scroll_down(delta as usize);
                            }
                        }
                    }
                }
                MouseEventKind::Down(crossterm::event::MouseButton::Left) => {
                    let hit = app
                        .click_areas
                        .example_items
                        .iter()
                        .find(|(_, region)| region.contains(mouse.column, mouse.row))
                        .map(|(idx, _)| *idx);
                    if let Some(idx) = hit {
                        app.list.select_index(idx);
                        confirm_selection(app);
                    }
                }
                _ => {}
            }
            continue;
        }

        // Handle key events
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Normal => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('?') => app.open_help(),
                    KeyCode::Char('/') => app.enter_filter(),
                    KeyCode::Esc => {
                        if app.example.is_some() {
                            app.clear_example();
                            log::log_event("selection cleared");
                        }
                    }
                    KeyCode::Char('j') | KeyCode::Down => app.list.select_next(),
                    KeyCode::Char('k') | KeyCode::Up => app.list.select_prev(),
                    KeyCode::Char('g') => app.list.select_index(0),
                    KeyCode::Char('G') => {
                        let last = app.list.len().saturating_sub(1);
                        app.list.select_index(last);
                    }
                    // Number keys jump within the visible list
                    KeyCode::Char(c @ '1'..='9') => {
                        let idx = (c as usize) - ('1' as usize);
                        app.list.select_index(idx);
                    }
                    KeyCode::Enter => confirm_selection(app),
                    KeyCode::Char('y') => copy_selected(app),
                    KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        let half_page = app.viewport_height / 2;
                        app.scroll_up(half_page);
                    }
                    KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        let half_page = app.viewport_height / 2;
                        app.scroll_down(half_page);
                    }
                    KeyCode::PageUp => app.scroll_up(app.viewport_height),
                    KeyCode::PageDown => app.scroll_down(app.viewport_height),
                    KeyCode::Home => app.scroll_to_top(),
                    KeyCode::End => app.scroll_to_bottom(),
                    _ => {}
                },
                InputMode::Filter => match key.code {
                    KeyCode::Esc => app.close_filter(),
                    KeyCode::Enter => {
                        confirm_selection(app);
                        app.accept_filter();
                    }
                    KeyCode::Down => app.list.select_next(),
                    KeyCode::Up => app.list.select_prev(),
                    KeyCode::Left => app.list.input_left(),
                    KeyCode::Right => app.list.input_right(),
                    KeyCode::Home => app.list.input_home(),
                    KeyCode::End => app.list.input_end(),
                    KeyCode::Backspace => app.list.input_backspace(),
                    KeyCode::Char(c) => app.list.input_char(c),
                    _ => {}
                },
                InputMode::Help => match key.code {
                    KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => app.close_help(),
                    _ => {}
                },
            }
        }
    }
}

/// Confirm the highlighted example: route it through the selector, which
/// forwards the full record back to the app (the host-owned selection).
fn confirm_selection(app: &mut App) {
    let Some(record) = app.list.highlighted() else {
        return;
    };

    let mut picked: Option<&'static ExampleRecord> = None;
    {
        let mut selector = Selector::new()
            .with_selected(app.example)
            .on_select(|r| picked = Some(r));
        if let Some(choice) = selector.choices().into_iter().find(|c| c.value == record) {
            selector.choose(&choice);
        }
    }

    if let Some(record) = picked {
        log::log_event(&format!(
            "selected example id={} ({})",
            record.id, record.name
        ));
        app.set_example(record);
        if app.config.copy_on_select {
            copy_selected(app);
        }
    }
}

/// Copy the selected example's code to the clipboard; a missing selection
/// is a no-op.
fn copy_selected(app: &App) {
    let Some(record) = app.example else {
        return;
    };

    match try_copy(record) {
        Ok(()) => log::log_event(&format!("copied example id={} to clipboard", record.id)),
        Err(e) => log::log(&format!("{}", e)),
    }
}

fn try_copy(record: &ExampleRecord) -> error::Result<()> {
    clipboard::copy_text(record.code)?;
    Ok(())
}
