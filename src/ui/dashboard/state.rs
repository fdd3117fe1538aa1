//! Dashboard state management
//!
//! Tracks the active tab and the activity trail. Panels own their display
//! rows themselves; nothing here is shared across tabs.

use crate::config::AppConfig;
use crate::consts::ui_consts::MAX_ACTIVITY_EVENTS;
use crate::events::UiEvent;
use crate::icons::Icon;

use std::collections::VecDeque;
use std::time::Instant;

/// Tab id of the synthetic analytics view appended by the shell.
pub const ANALYTICS_TAB_ID: &str = "analytics";

/// One entry of the tab bar, derived from config on each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
    pub icon: Icon,
}

/// The navigable entries for a config: its tabs, plus the analytics view
/// when the `reporting` feature is on and analytics charts exist.
pub fn nav_entries(config: &AppConfig) -> Vec<NavEntry> {
    let mut entries: Vec<NavEntry> = config
        .dashboard
        .tabs
        .iter()
        .map(|tab| NavEntry {
            id: tab.id.clone(),
            label: tab.label.clone(),
            icon: tab.icon,
        })
        .collect();

    if config.feature("reporting") && !config.analytics.charts.is_empty() {
        entries.push(NavEntry {
            id: ANALYTICS_TAB_ID.to_string(),
            label: "Analytics".to_string(),
            icon: Icon::BarChart,
        });
    }

    entries
}

/// Dashboard screen state.
#[derive(Debug)]
pub struct DashboardState {
    /// Index of the active entry in the derived tab list.
    pub active_tab: usize,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<UiEvent>,
    /// Events shown in the activity trail, oldest first
    pub activity: VecDeque<UiEvent>,
}

impl DashboardState {
    pub fn new(active_tab: usize, start_time: Instant, with_background_color: bool) -> Self {
        Self {
            active_tab,
            start_time,
            with_background_color,
            pending_events: VecDeque::new(),
            activity: VecDeque::new(),
        }
    }

    /// Advance one frame: drain queued events into the activity trail.
    pub fn update(&mut self) {
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity(event);
        }
    }

    /// Queue an event for the next frame.
    pub fn add_event(&mut self, event: UiEvent) {
        self.pending_events.push_back(event);
    }

    /// Append to the activity trail, evicting the oldest past the cap.
    pub fn add_to_activity(&mut self, event: UiEvent) {
        if self.activity.len() >= MAX_ACTIVITY_EVENTS {
            self.activity.pop_front();
        }
        self.activity.push_back(event);
    }

    /// Activate a tab by index. Out-of-range indices are ignored.
    pub fn select_tab(&mut self, index: usize, entries: &[NavEntry]) {
        if index >= entries.len() || index == self.active_tab {
            return;
        }
        self.active_tab = index;
        self.add_event(UiEvent::navigation(format!(
            "Opened tab '{}'",
            entries[index].label
        )));
    }

    pub fn next_tab(&mut self, entries: &[NavEntry]) {
        if entries.is_empty() {
            return;
        }
        self.select_tab((self.active_tab + 1) % entries.len(), entries);
    }

    pub fn prev_tab(&mut self, entries: &[NavEntry]) {
        if entries.is_empty() {
            return;
        }
        self.select_tab(
            (self.active_tab + entries.len() - 1) % entries.len(),
            entries,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::sample_config;
    use crate::events::{EventKind, UiEvent};

    #[test]
    // Reporting on + analytics charts present means a synthetic analytics tab.
    fn analytics_entry_appears_when_reporting_enabled() {
        let config = sample_config();
        let entries = nav_entries(&config);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].id, ANALYTICS_TAB_ID);
    }

    #[test]
    fn analytics_entry_hidden_when_reporting_disabled() {
        let mut config = sample_config();
        config.features.insert("reporting".to_string(), false);
        let entries = nav_entries(&config);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.id != ANALYTICS_TAB_ID));
    }

    #[test]
    fn tab_navigation_wraps_both_ways() {
        let config = sample_config();
        let entries = nav_entries(&config);
        let mut state = DashboardState::new(0, Instant::now(), false);

        state.prev_tab(&entries);
        assert_eq!(state.active_tab, entries.len() - 1);

        state.next_tab(&entries);
        assert_eq!(state.active_tab, 0);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let config = sample_config();
        let entries = nav_entries(&config);
        let mut state = DashboardState::new(0, Instant::now(), false);

        state.select_tab(99, &entries);
        assert_eq!(state.active_tab, 0);
    }

    #[test]
    fn switching_tabs_queues_a_navigation_event() {
        let config = sample_config();
        let entries = nav_entries(&config);
        let mut state = DashboardState::new(0, Instant::now(), false);

        state.select_tab(1, &entries);
        state.update();

        assert!(
            state
                .activity
                .iter()
                .any(|e| e.msg.contains("Invoice Processing"))
        );
    }

    #[test]
    fn activity_trail_is_capped() {
        let mut state = DashboardState::new(0, Instant::now(), false);
        for i in 0..(MAX_ACTIVITY_EVENTS + 10) {
            state.add_to_activity(UiEvent::shell(format!("event {}", i), EventKind::Notice));
        }
        assert_eq!(state.activity.len(), MAX_ACTIVITY_EVENTS);
        // Oldest entries were evicted first
        assert_eq!(state.activity.front().unwrap().msg, "event 10");
    }
}
