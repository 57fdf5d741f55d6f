//! Panel view state (active tab, section expansion).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of workspace state so tab and section
//! choices survive reselecting nodes and reloading property data.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use std::collections::HashMap;

/// Tabs available in the options panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelTab {
    /// Schema-driven style controls.
    #[default]
    QuickStyle,
    /// Free-form property list.
    Properties,
}

impl PanelTab {
    /// Stable identifier used in markup and host callbacks.
    pub fn id(self) -> &'static str {
        match self {
            PanelTab::QuickStyle => "quick-style",
            PanelTab::Properties => "properties",
        }
    }

    /// Parses a tab identifier; unknown ids yield `None`.
    pub fn from_id(id: &str) -> Option<PanelTab> {
        match id {
            "quick-style" => Some(PanelTab::QuickStyle),
            "properties" => Some(PanelTab::Properties),
            _ => None,
        }
    }

    /// Title shown on the tab strip.
    pub fn title(self) -> &'static str {
        match self {
            PanelTab::QuickStyle => "Quick style",
            PanelTab::Properties => "Properties",
        }
    }
}

/// View state for the options panel.
#[derive(Clone, Debug, Default)]
pub struct PanelState {
    /// Currently shown tab.
    pub active_tab: PanelTab,
    /// Expansion per style-section key; absent keys are collapsed.
    pub expanded_sections: HashMap<String, bool>,
}

impl PanelState {
    /// Switches the active tab. `None` (no tab resolved) leaves the current
    /// tab in place.
    pub fn select_tab(&mut self, tab: Option<PanelTab>) {
        if let Some(tab) = tab {
            self.active_tab = tab;
        }
    }

    /// Flips the expansion of one section, leaving all others alone.
    pub fn toggle_section(&mut self, key: &str) {
        let expanded = self.is_section_expanded(key);
        self.expanded_sections.insert(key.to_owned(), !expanded);
    }

    pub fn is_section_expanded(&self, key: &str) -> bool {
        self.expanded_sections.get(key).copied().unwrap_or(false)
    }
}
