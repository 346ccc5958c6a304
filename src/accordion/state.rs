// src/accordion/state.rs

use tracing::debug;

use super::models::{AccordionSection, HIDE_ALL_LABEL, SHOW_ALL_LABEL};

/// Accordion flow: each section opens and closes on its own, and the
/// "show all" button opens or closes every section at once.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    sections: Vec<AccordionSection>,
}

impl Accordion {
    /// Sections keep the expanded flag they were built with.
    pub fn new(sections: Vec<AccordionSection>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[AccordionSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// `false` for an index past the last section.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.sections.get(index).map_or(false, |s| s.expanded)
    }

    /// Flips one section. Returns its new state, or `None` when there is no
    /// section at `index`.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let section = match self.sections.get_mut(index) {
            Some(section) => section,
            None => {
                debug!(index, len = self.sections.len(), "Ignoring toggle outside accordion");
                return None;
            }
        };

        section.expanded = !section.expanded;
        Some(section.expanded)
    }

    pub fn show_all(&mut self) {
        self.set_all(true);
    }

    pub fn hide_all(&mut self) {
        self.set_all(false);
    }

    /// Every section is open. An empty accordion counts as open.
    pub fn all_expanded(&self) -> bool {
        self.sections.iter().all(|s| s.expanded)
    }

    /// The "show all" button: hides everything when all sections are open,
    /// otherwise opens them all. Returns whether the sections are now open.
    pub fn toggle_all(&mut self) -> bool {
        let expand = !self.all_expanded();
        self.set_all(expand);
        expand
    }

    pub fn toggle_all_label(&self) -> &'static str {
        if self.all_expanded() {
            HIDE_ALL_LABEL
        } else {
            SHOW_ALL_LABEL
        }
    }

    fn set_all(&mut self, expanded: bool) {
        for section in &mut self.sections {
            section.expanded = expanded;
        }
    }
}
