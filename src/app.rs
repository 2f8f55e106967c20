use crate::catalog::{self, ExampleRecord};
use crate::config::Config;
use crate::picker::Picker;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal, // Navigation mode
    Filter, // Typing a name filter for the example list
    Help,   // Help popup showing all hotkeys
}

/// A rectangular screen region hit-testable against mouse coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Clickable regions, rebuilt on every render.
#[derive(Debug, Default)]
pub struct ClickAreas {
    /// One region per visible example row, keyed by filtered-list index
    pub example_items: Vec<(usize, ClickRegion)>,
    /// The code preview pane (wheel scroll target)
    pub preview: ClickRegion,
}

/// Cursor and name-filter state for the example list.
///
/// This is navigation state only; which example is *selected* lives in
/// [`App::example`] and is never remembered here.
#[derive(Debug, Clone)]
pub struct ExampleListState {
    pub query: String,
    pub query_cursor: usize,
    pub filtered: Vec<&'static ExampleRecord>,
    pub cursor: usize,
}

impl ExampleListState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            query_cursor: 0,
            filtered: catalog::all().iter().collect(),
            cursor: 0,
        }
    }

    /// Re-derive the filtered list from the current query.
    ///
    /// Case-insensitive substring match on the example name; an empty query
    /// shows the full catalog. The cursor is clamped into the new list.
    pub fn update_filter(&mut self) {
        let query = self.query.to_lowercase();
        self.filtered = catalog::all()
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&query))
            .collect();
        self.cursor = self.cursor.min(self.filtered.len().saturating_sub(1));
    }

    /// The record under the cursor, if any.
    pub fn highlighted(&self) -> Option<&'static ExampleRecord> {
        self.selected_item().copied()
    }

    /// Move the cursor onto the given record if it is currently visible.
    pub fn cursor_to(&mut self, record: &'static ExampleRecord) {
        if let Some(idx) = self.filtered.iter().position(|r| *r == record) {
            self.cursor = idx;
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
        self.update_filter();
    }

    pub fn input_backspace(&mut self) {
        if self.query_cursor > 0 {
            let prev = prev_char_boundary(&self.query, self.query_cursor);
            self.query.remove(prev);
            self.query_cursor = prev;
            self.update_filter();
        }
    }

    pub fn input_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = prev_char_boundary(&self.query, self.query_cursor);
        }
    }

    pub fn input_right(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query_cursor = next_char_boundary(&self.query, self.query_cursor);
        }
    }

    pub fn input_home(&mut self) {
        self.query_cursor = 0;
    }

    pub fn input_end(&mut self) {
        self.query_cursor = self.query.len();
    }

    /// Append pasted text to the query (bracketed paste).
    pub fn input_paste(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_control()) {
            self.input_char(c);
        }
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
        self.update_filter();
    }
}

impl Default for ExampleListState {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker for ExampleListState {
    type Item = &'static ExampleRecord;

    fn items(&self) -> &[Self::Item] {
        &self.filtered
    }

    fn selected_index(&self) -> usize {
        self.cursor
    }

    fn set_selected_index(&mut self, index: usize) {
        self.cursor = index;
    }
}

fn prev_char_boundary(s: &str, from: usize) -> usize {
    let mut pos = from - 1;
    while pos > 0 && !s.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

fn next_char_boundary(s: &str, from: usize) -> usize {
    let mut pos = from + 1;
    while pos < s.len() && !s.is_char_boundary(pos) {
        pos += 1;
    }
    pos
}

pub struct App {
    /// Currently selected example; this is the single source of truth the
    /// selector is rendered from
    pub example: Option<&'static ExampleRecord>,
    pub list: ExampleListState,
    pub input_mode: InputMode,
    pub preview_scroll: usize,
    pub viewport_height: usize,
    pub click_areas: ClickAreas,
    pub config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut app = Self {
            example: None,
            list: ExampleListState::new(),
            input_mode: InputMode::Normal,
            preview_scroll: 0,
            viewport_height: 20, // Default, updated on render
            click_areas: ClickAreas::default(),
            config,
        };

        if let Some(id) = app.config.start_example {
            if let Some(record) = find_example(id) {
                app.set_example(record);
                app.list.cursor_to(record);
            }
        }

        app
    }

    /// Adopt a newly chosen example; the selection change resets the
    /// preview to the top.
    pub fn set_example(&mut self, record: &'static ExampleRecord) {
        self.example = Some(record);
        self.preview_scroll = 0;
    }

    /// Drop the selection; no option renders as active afterwards.
    pub fn clear_example(&mut self) {
        self.example = None;
        self.preview_scroll = 0;
    }

    /// Update viewport height (called from render)
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
    }

    /// Total preview lines of the selected example
    fn preview_lines(&self) -> usize {
        self.example.map(|r| r.code.lines().count()).unwrap_or(0)
    }

    /// Scroll the preview up
    pub fn scroll_up(&mut self, n: usize) {
        self.preview_scroll = self.preview_scroll.saturating_sub(n);
    }

    /// Scroll the preview down, clamped to the content
    pub fn scroll_down(&mut self, n: usize) {
        let max_offset = self.preview_lines().saturating_sub(self.viewport_height);
        self.preview_scroll = self.preview_scroll.saturating_add(n).min(max_offset);
    }

    pub fn scroll_to_top(&mut self) {
        self.preview_scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.preview_scroll = self.preview_lines().saturating_sub(self.viewport_height);
    }

    /// Enter filter mode
    pub fn enter_filter(&mut self) {
        self.input_mode = InputMode::Filter;
    }

    /// Leave filter mode and clear the query
    pub fn close_filter(&mut self) {
        self.list.clear_query();
        self.input_mode = InputMode::Normal;
    }

    /// Leave filter mode keeping the narrowed list visible
    pub fn accept_filter(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Open the help popup
    pub fn open_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    /// Close the help popup
    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}

/// Host-side id lookup. The catalog itself exposes only ordered iteration;
/// indexing by id is the host's concern.
pub fn find_example(id: u32) -> Option<&'static ExampleRecord> {
    catalog::all().iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_narrows_case_insensitively() {
        let mut list = ExampleListState::new();
        for c in "FIBONACCI".chars() {
            list.input_char(c);
        }

        assert_eq!(list.filtered.len(), 2);
        assert!(list.filtered.iter().all(|r| r.name.contains("Fibonacci")));

        list.clear_query();
        assert_eq!(list.filtered.len(), catalog::all().len());
    }

    #[test]
    fn test_filter_clamps_cursor() {
        let mut list = ExampleListState::new();
        list.cursor = catalog::all().len() - 1;

        for c in "while".chars() {
            list.input_char(c);
        }

        assert!(list.cursor < list.filtered.len());
    }

    #[test]
    fn test_no_match_leaves_empty_list() {
        let mut list = ExampleListState::new();
        list.input_paste("no such example");

        assert!(list.filtered.is_empty());
        assert!(list.highlighted().is_none());
    }

    #[test]
    fn test_query_editing_respects_char_boundaries() {
        let mut list = ExampleListState::new();
        list.input_char('é');
        list.input_char('x');
        list.input_left();
        list.input_left();
        list.input_right();
        list.input_backspace();

        assert_eq!(list.query, "x");
    }

    #[test]
    fn test_cursor_to_selected_record() {
        let mut list = ExampleListState::new();
        let target = &catalog::all()[5];
        list.cursor_to(target);

        assert_eq!(list.highlighted(), Some(target));
    }

    #[test]
    fn test_find_example_by_id() {
        assert_eq!(find_example(100).map(|r| r.name), Some("+ Mix"));
        assert!(find_example(9999).is_none());
    }

    #[test]
    fn test_start_example_preselects() {
        let config = Config {
            start_example: Some(3),
            copy_on_select: false,
        };
        let app = App::new(config);

        assert_eq!(app.example.map(|r| r.id), Some(3));
        assert_eq!(app.list.highlighted().map(|r| r.id), Some(3));
    }

    #[test]
    fn test_unknown_start_example_is_tolerated() {
        let config = Config {
            start_example: Some(9999),
            copy_on_select: false,
        };
        let app = App::new(config);

        assert!(app.example.is_none());
    }

    #[test]
    fn test_selecting_resets_preview_scroll() {
        let mut app = App::new(Config::default());
        app.set_example(find_example(100).unwrap());
        app.set_viewport_height(5);
        app.scroll_down(10);
        assert!(app.preview_scroll > 0);

        app.set_example(find_example(1).unwrap());
        assert_eq!(app.preview_scroll, 0);
    }

    #[test]
    fn test_preview_scroll_clamps_to_content() {
        let mut app = App::new(Config::default());
        app.set_viewport_height(5);

        // Nothing selected: no content, no scrolling.
        app.scroll_down(10);
        assert_eq!(app.preview_scroll, 0);

        app.set_example(find_example(100).unwrap());
        let total = find_example(100).unwrap().code.lines().count();
        app.scroll_down(usize::MAX - 1);
        assert_eq!(app.preview_scroll, total - 5);

        app.scroll_to_top();
        assert_eq!(app.preview_scroll, 0);
        app.scroll_to_bottom();
        assert_eq!(app.preview_scroll, total - 5);
    }

    #[test]
    fn test_click_region_contains() {
        let region = ClickRegion::new(10, 10, 20, 10);

        assert!(region.contains(10, 10));
        assert!(region.contains(29, 19));
        assert!(!region.contains(30, 20));
        assert!(!region.contains(9, 10));
    }
}
