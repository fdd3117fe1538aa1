//! Closed set of icon identifiers used by tab configuration.
//!
//! Configuration files carry icon *names*; the shell resolves each name to a
//! terminal glyph at render time.

use serde::{Deserialize, Serialize};

/// Icons a tab may reference from configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "camelCase")]
pub enum Icon {
    Home,
    BarChart,
    Settings,
    Users,
    Calendar,
    Phone,
    FileText,
    Inbox,
}

impl Icon {
    /// Terminal glyph shown next to the tab label.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::BarChart => "▥",
            Icon::Settings => "⚙",
            Icon::Users => "◉",
            Icon::Calendar => "▦",
            Icon::Phone => "✆",
            Icon::FileText => "▤",
            Icon::Inbox => "▣",
        }
    }
}
