//! Selector state: the hour and minute dropdowns and keyboard focus.

use ratatui::widgets::ListState;

use crate::constants::selection::{HOURS_UNIT, MAX_HOURS, MAX_MINUTES, MINUTES_UNIT};

/// Which dropdown a popup or focus refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Hours,
    Minutes,
}

/// Focusable elements of the selector, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorFocus {
    Hours,
    Minutes,
    Start,
}

impl SelectorFocus {
    pub fn next(self) -> Self {
        match self {
            SelectorFocus::Hours => SelectorFocus::Minutes,
            SelectorFocus::Minutes => SelectorFocus::Start,
            SelectorFocus::Start => SelectorFocus::Hours,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            SelectorFocus::Hours => SelectorFocus::Start,
            SelectorFocus::Minutes => SelectorFocus::Hours,
            SelectorFocus::Start => SelectorFocus::Minutes,
        }
    }
}

/// Builds the labels offered by a dropdown: "0 {unit}" through "{max} {unit}".
pub fn option_labels(unit: &str, max: u32) -> Vec<String> {
    (0..=max).map(|i| format!("{i} {unit}")).collect()
}

/// A read-only dropdown. Starts empty until the user picks a value.
#[derive(Debug, Clone)]
pub struct Dropdown {
    /// Unit suffix of every option
    pub unit: &'static str,
    /// Display labels, in order
    pub options: Vec<String>,
    /// Picked option (None while the dropdown is still empty)
    pub selected: Option<usize>,
    /// Highlight state for the open option list
    pub list_state: ListState,
}

impl Dropdown {
    pub fn new(unit: &'static str, max: u32) -> Self {
        Self {
            unit,
            options: option_labels(unit, max),
            selected: None,
            list_state: ListState::default(),
        }
    }

    /// Label of the picked option, if any.
    pub fn value(&self) -> Option<&str> {
        self.selected
            .and_then(|idx| self.options.get(idx))
            .map(String::as_str)
    }

    /// Label of the picked option, falling back to the zero label.
    pub fn value_or_zero(&self) -> String {
        match self.value() {
            Some(label) => label.to_string(),
            None => format!("0 {}", self.unit),
        }
    }

    /// Puts the highlight on the current value (or the first row) before opening.
    pub fn open(&mut self) {
        self.list_state.select(Some(self.selected.unwrap_or(0)));
    }

    /// Moves the highlight up, wrapping at the top.
    pub fn highlight_previous(&mut self) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let new = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(new));
    }

    /// Moves the highlight down, wrapping at the bottom.
    pub fn highlight_next(&mut self) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let new = if current >= len - 1 { 0 } else { current + 1 };
        self.list_state.select(Some(new));
    }

    pub fn highlight_first(&mut self) {
        if !self.options.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn highlight_last(&mut self) {
        let len = self.options.len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    /// Commits the highlighted row as the dropdown value.
    pub fn pick_highlighted(&mut self) {
        if let Some(idx) = self.list_state.selected() {
            if idx < self.options.len() {
                self.selected = Some(idx);
            }
        }
    }

    /// Returns the dropdown to its empty state.
    pub fn clear(&mut self) {
        self.selected = None;
        self.list_state = ListState::default();
    }
}

/// State of the selector view.
#[derive(Debug, Clone)]
pub struct Selector {
    pub hours: Dropdown,
    pub minutes: Dropdown,
    pub focus: SelectorFocus,
    /// Dropdown whose option list is currently open
    pub open: Option<Field>,
}

impl Selector {
    pub fn new() -> Self {
        Self {
            hours: Dropdown::new(HOURS_UNIT, MAX_HOURS),
            minutes: Dropdown::new(MINUTES_UNIT, MAX_MINUTES),
            focus: SelectorFocus::Hours,
            open: None,
        }
    }

    pub fn dropdown(&self, field: Field) -> &Dropdown {
        match field {
            Field::Hours => &self.hours,
            Field::Minutes => &self.minutes,
        }
    }

    pub fn dropdown_mut(&mut self, field: Field) -> &mut Dropdown {
        match field {
            Field::Hours => &mut self.hours,
            Field::Minutes => &mut self.minutes,
        }
    }

    /// Opens the option list of the given dropdown.
    pub fn open_dropdown(&mut self, field: Field) {
        self.dropdown_mut(field).open();
        self.open = Some(field);
    }

    /// Closes the open option list, committing the highlight when `pick` is set.
    pub fn close_dropdown(&mut self, pick: bool) {
        if let Some(field) = self.open.take() {
            if pick {
                self.dropdown_mut(field).pick_highlighted();
            }
        }
    }

    /// Raw labels handed to the countdown, with unset dropdowns read as zero.
    pub fn selected_labels(&self) -> (String, String) {
        (self.hours.value_or_zero(), self.minutes.value_or_zero())
    }

    /// Forgets both selections and resets focus.
    pub fn clear(&mut self) {
        self.hours.clear();
        self.minutes.clear();
        self.focus = SelectorFocus::Hours;
        self.open = None;
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}
