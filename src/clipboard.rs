//! Clipboard handling for copying snippet code

use arboard::Clipboard;

use crate::error::{ClipboardError, ClipboardResult};

/// Place text on the system clipboard
pub fn copy_text(text: &str) -> ClipboardResult<()> {
    let mut clipboard =
        Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}
