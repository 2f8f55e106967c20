//! Controlled select component over the example catalog.
//!
//! The selector owns no selection state of its own: the host passes the
//! current selection in on every render and receives the chosen record back
//! through the configured callback. Rendering is pure; choosing is the only
//! state transition and it happens entirely in the host.

use crate::catalog::{self, ExampleRecord};

/// One renderable option derived from a catalog record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Display label (the record's name)
    pub label: &'static str,
    /// Full record payload carried by the option
    pub value: &'static ExampleRecord,
    /// Whether this option matches the host's current selection
    pub active: bool,
}

/// Controlled select over the catalog.
///
/// Configured per render with the host-owned selection and an optional
/// on-select callback. Dropping it loses nothing; there is no internal
/// memory of prior selections.
pub struct Selector<'a> {
    items: &'static [ExampleRecord],
    selected: Option<&'static ExampleRecord>,
    on_select: Option<Box<dyn FnMut(&'static ExampleRecord) + 'a>>,
}

impl<'a> Selector<'a> {
    /// Create a selector over the full catalog with no selection.
    pub fn new() -> Self {
        Self {
            items: catalog::all(),
            selected: None,
            on_select: None,
        }
    }

    /// Set the current selection (host-owned controlled value).
    pub fn with_selected(mut self, selected: Option<&'static ExampleRecord>) -> Self {
        self.selected = selected;
        self
    }

    /// Set the callback invoked when the user picks an option.
    pub fn on_select(mut self, callback: impl FnMut(&'static ExampleRecord) + 'a) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Derive one choice per catalog record, in catalog order.
    ///
    /// At most one choice is active: the one whose record equals the
    /// configured selection. A selection not present in the catalog marks
    /// nothing active.
    pub fn choices(&self) -> Vec<Choice> {
        self.items
            .iter()
            .map(|record| Choice {
                label: record.name,
                value: record,
                active: self.selected == Some(record),
            })
            .collect()
    }

    /// Forward the chosen record to the host.
    ///
    /// Invoked when the user picks an option. Without a configured callback
    /// this silently drops the event.
    pub fn choose(&mut self, choice: &Choice) {
        if let Some(callback) = &mut self.on_select {
            callback(choice.value);
        }
    }
}

impl Default for Selector<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_selection_marks_nothing_active() {
        let selector = Selector::new();
        assert!(selector.choices().iter().all(|c| !c.active));
    }

    #[test]
    fn test_selection_marks_exactly_one_active() {
        for (k, record) in catalog::all().iter().enumerate() {
            let selector = Selector::new().with_selected(Some(record));
            let choices = selector.choices();
            let active: Vec<usize> = choices
                .iter()
                .enumerate()
                .filter(|(_, c)| c.active)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(active, vec![k]);
            assert_eq!(choices[k].value, record);
        }
    }

    #[test]
    fn test_foreign_selection_marks_nothing_active() {
        static OUTSIDER: ExampleRecord = ExampleRecord {
            id: 9999,
            name: "+ Not In Catalog",
            code: "pass",
        };
        let selector = Selector::new().with_selected(Some(&OUTSIDER));
        assert!(selector.choices().iter().all(|c| !c.active));
    }

    #[test]
    fn test_choices_are_labeled_with_names_in_order() {
        let selector = Selector::new();
        let choices = selector.choices();
        assert_eq!(choices.len(), catalog::all().len());
        for (choice, record) in choices.iter().zip(catalog::all()) {
            assert_eq!(choice.label, record.name);
            assert_eq!(choice.value, record);
        }
    }

    #[test]
    fn test_choices_are_idempotent() {
        let record = &catalog::all()[2];
        let selector = Selector::new().with_selected(Some(record));
        assert_eq!(selector.choices(), selector.choices());
    }

    #[test]
    fn test_choose_forwards_record_exactly_once() {
        for (k, record) in catalog::all().iter().enumerate() {
            let mut picked: Vec<&'static ExampleRecord> = vec![];
            let mut selector = Selector::new().on_select(|r| picked.push(r));
            let choice = selector.choices()[k].clone();
            selector.choose(&choice);
            drop(selector);
            assert_eq!(picked, vec![record]);
        }
    }

    #[test]
    fn test_choose_without_callback_is_a_no_op() {
        let mut selector = Selector::new();
        let choice = selector.choices()[0].clone();
        // Must not panic or otherwise fail.
        selector.choose(&choice);
    }

    #[test]
    fn test_replacing_a_selection() {
        // idle -> selected -> selected, driven entirely by the host.
        let records = catalog::all();
        let mut current: Option<&'static ExampleRecord> = None;

        for target in [&records[0], &records[1]] {
            let mut picked = None;
            let mut selector = Selector::new()
                .with_selected(current)
                .on_select(|r| picked = Some(r));
            let choice = selector
                .choices()
                .into_iter()
                .find(|c| c.value == target)
                .unwrap();
            selector.choose(&choice);
            drop(selector);
            current = picked;
        }

        assert_eq!(current, Some(&records[1]));
    }
}
