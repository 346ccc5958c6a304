// src/tabs/models.rs

use serde::{Deserialize, Serialize};

/// A tab and the panel it shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub label: String,
}

impl Tab {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Id of the tab's panel, as linked from the tab (`#past-day`).
    pub fn panel_id(&self) -> &str {
        &self.id
    }
}
