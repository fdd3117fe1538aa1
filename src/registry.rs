//! Panel registry: tab identifier to custom panel renderer.
//!
//! Lookup is by exact id match. A miss is not an error; the shell falls back
//! to the generic chart panel for that tab.

use crate::config::AppConfig;
use crate::panels::{InvoiceProcessingPanel, PropertyOccupationPanel};
use crate::theme::Theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use std::collections::HashMap;

/// A custom renderer for one dashboard tab.
///
/// Panels receive the config read-only for branding consistency and own
/// whatever local state they display. That state is private to the panel and
/// discarded with it.
pub trait TabPanel {
    /// Panel title shown in its block border.
    fn title(&self) -> &str;

    /// Draw the panel into the given frame region.
    fn render(&mut self, f: &mut Frame, area: Rect, config: &AppConfig, theme: &Theme);
}

/// Mapping from tab id to the panel that renders it.
pub struct PanelRegistry {
    panels: HashMap<String, Box<dyn TabPanel>>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self {
            panels: HashMap::new(),
        }
    }

    /// The registry shipped with the built-in sample bundle.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("propertyOccupation", Box::new(PropertyOccupationPanel::new()));
        registry.register("invoiceProcessing", Box::new(InvoiceProcessingPanel::new()));
        registry
    }

    /// Register a panel for a tab id, replacing any previous entry.
    pub fn register(&mut self, tab_id: impl Into<String>, panel: Box<dyn TabPanel>) {
        self.panels.insert(tab_id.into(), panel);
    }

    pub fn contains(&self, tab_id: &str) -> bool {
        self.panels.contains_key(tab_id)
    }

    /// Exact-match lookup. `None` means the caller renders the fallback.
    pub fn get_mut(&mut self, tab_id: &str) -> Option<&mut (dyn TabPanel + 'static)> {
        self.panels.get_mut(tab_id).map(|panel| panel.as_mut())
    }

    /// Number of registered panels.
    pub fn len(&self) -> usize {
        self.panels.len()
    }
}

impl Default for PanelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
