//! Shell events shown in the activity trail.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// Where an event originated inside the shell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EventSource {
    /// Configuration loading and validation.
    Config,
    /// Tab navigation.
    Navigation,
    /// The shell itself (startup, shutdown).
    Shell,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventKind {
    Success,
    Error,
    Notice,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UiEvent {
    pub source: EventSource,
    pub msg: String,
    pub timestamp: String,
    pub kind: EventKind,
    pub log_level: LogLevel,
}

impl UiEvent {
    fn new(source: EventSource, msg: String, kind: EventKind, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            kind,
            log_level,
        }
    }

    pub fn config(msg: String, kind: EventKind, log_level: LogLevel) -> Self {
        Self::new(EventSource::Config, msg, kind, log_level)
    }

    pub fn navigation(msg: String) -> Self {
        Self::new(
            EventSource::Navigation,
            msg,
            EventKind::Notice,
            LogLevel::Info,
        )
    }

    pub fn shell(msg: String, kind: EventKind) -> Self {
        Self::new(EventSource::Shell, msg, kind, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Always show successes and anything at info or above
        if self.kind == EventKind::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for UiEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.kind, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_events_always_display() {
        let event = UiEvent::config(
            "config loaded".to_string(),
            EventKind::Success,
            LogLevel::Debug,
        );
        assert!(event.should_display());
    }

    #[test]
    fn navigation_events_are_visible_by_default() {
        let event = UiEvent::navigation("switched tab".to_string());
        assert_eq!(event.source, EventSource::Navigation);
        assert!(event.should_display());
    }

    #[test]
    fn display_includes_kind_and_message() {
        let event = UiEvent::shell("started".to_string(), EventKind::Notice);
        let rendered = event.to_string();
        assert!(rendered.starts_with("Notice ["));
        assert!(rendered.ends_with("] started"));
    }
}
