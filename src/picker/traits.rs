//! Picker trait definition
//!
//! A generic trait for moving a cursor over a list of items.

/// A generic picker trait for list navigation
///
/// Provides default implementations for the common cursor operations so
/// list-shaped state types only supply storage accessors.
///
/// # Example
///
/// ```ignore
/// struct ExampleListState {
///     filtered: Vec<&'static ExampleRecord>,
///     cursor: usize,
/// }
///
/// impl Picker for ExampleListState {
///     type Item = &'static ExampleRecord;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.filtered
///     }
///
///     fn selected_index(&self) -> usize {
///         self.cursor
///     }
///
///     fn set_selected_index(&mut self, index: usize) {
///         self.cursor = index;
///     }
/// }
/// ```
pub trait Picker {
    /// The type of items in the picker
    type Item;

    /// Get the list of items
    fn items(&self) -> &[Self::Item];

    /// Get the current cursor index
    fn selected_index(&self) -> usize;

    /// Set the cursor index
    fn set_selected_index(&mut self, index: usize);

    /// Get the number of items
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Check if the picker is empty
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Move the cursor to the next item (wraps around)
    fn select_next(&mut self) {
        if !self.is_empty() {
            let next = (self.selected_index() + 1) % self.len();
            self.set_selected_index(next);
        }
    }

    /// Move the cursor to the previous item (wraps around)
    fn select_prev(&mut self) {
        if !self.is_empty() {
            let prev = self
                .selected_index()
                .checked_sub(1)
                .unwrap_or(self.len() - 1);
            self.set_selected_index(prev);
        }
    }

    /// Get the item under the cursor
    fn selected_item(&self) -> Option<&Self::Item> {
        self.items().get(self.selected_index())
    }

    /// Move the cursor to a specific index (clamped to valid range)
    fn select_index(&mut self, index: usize) {
        if !self.is_empty() {
            let clamped = index.min(self.len() - 1);
            self.set_selected_index(clamped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestPicker {
        items: Vec<u32>,
        cursor: usize,
    }

    impl Picker for TestPicker {
        type Item = u32;

        fn items(&self) -> &[u32] {
            &self.items
        }

        fn selected_index(&self) -> usize {
            self.cursor
        }

        fn set_selected_index(&mut self, index: usize) {
            self.cursor = index;
        }
    }

    #[test]
    fn test_next_and_prev_wrap_around() {
        let mut picker = TestPicker {
            items: vec![10, 20, 30],
            cursor: 0,
        };

        picker.select_prev();
        assert_eq!(picker.selected_index(), 2);

        picker.select_next();
        assert_eq!(picker.selected_index(), 0);
        picker.select_next();
        assert_eq!(picker.selected_index(), 1);
        assert_eq!(picker.selected_item(), Some(&20));
    }

    #[test]
    fn test_empty_picker_keeps_cursor_at_zero() {
        let mut picker = TestPicker {
            items: vec![],
            cursor: 0,
        };

        picker.select_next();
        picker.select_prev();
        picker.select_index(5);
        assert_eq!(picker.selected_index(), 0);
        assert!(picker.selected_item().is_none());
    }

    #[test]
    fn test_select_index_clamps() {
        let mut picker = TestPicker {
            items: vec![1, 2],
            cursor: 0,
        };

        picker.select_index(10);
        assert_eq!(picker.selected_index(), 1);
    }
}
