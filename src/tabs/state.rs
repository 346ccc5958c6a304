// src/tabs/state.rs

use tracing::debug;

use super::models::Tab;

/// Tabs flow: exactly one tab is selected whenever there are tabs, and
/// only the selected tab's panel is shown.
#[derive(Debug, Clone, Default)]
pub struct Tabs {
    tabs: Vec<Tab>,
    selected: usize,
}

impl Tabs {
    /// Selects the first tab.
    pub fn new(tabs: Vec<Tab>) -> Self {
        Self { tabs, selected: 0 }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Index of the selected tab, `None` when there are no tabs.
    pub fn selected_index(&self) -> Option<usize> {
        if self.tabs.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    pub fn selected(&self) -> Option<&Tab> {
        self.tabs.get(self.selected)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        index == self.selected && index < self.tabs.len()
    }

    pub fn is_panel_hidden(&self, index: usize) -> bool {
        !self.is_selected(index)
    }

    /// Selects the tab at `index`. An index past the last tab is ignored and
    /// returns `false`.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() {
            debug!(index, len = self.tabs.len(), "Ignoring selection outside tabs");
            return false;
        }

        self.selected = index;
        true
    }

    pub fn select_by_id(&mut self, id: &str) -> bool {
        match self.tabs.iter().position(|t| t.id == id) {
            Some(index) => self.select(index),
            None => {
                debug!(id, "No tab with this id");
                false
            }
        }
    }
}
