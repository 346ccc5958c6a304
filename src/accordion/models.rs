// src/accordion/models.rs

use serde::{Deserialize, Serialize};

pub const SHOW_ALL_LABEL: &str = "Show all sections";
pub const HIDE_ALL_LABEL: &str = "Hide all sections";

/// One collapsible section: a heading button with an optional summary line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionSection {
    pub id: String,
    pub heading: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub expanded: bool,
}

impl AccordionSection {
    /// A collapsed section.
    pub fn new(id: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            heading: heading.into(),
            summary: None,
            expanded: false,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Starts the section open.
    pub fn expanded(mut self) -> Self {
        self.expanded = true;
        self
    }
}
