//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `example_list` - Sidebar list of catalog choices with filter line
//! - `preview` - Code preview of the selected example
//! - `help_popup` - Help overlay with keybindings and the naming legend
//! - `separators` - Vertical line separator between sidebar and preview

mod example_list;
mod help_popup;
mod preview;
mod separators;

// Re-export all render functions for use in ui.rs
pub use example_list::render_example_list;
pub use help_popup::render_help_popup;
pub use preview::render_preview;
pub use separators::render_separator;
