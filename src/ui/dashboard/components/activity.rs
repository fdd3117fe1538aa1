//! Activity trail component
//!
//! Renders shell events with compact timestamps

use crate::events::EventKind;
use crate::logging::LogLevel;
use crate::theme::Theme;
use crate::ui::dashboard::state::DashboardState;
use crate::ui::dashboard::utils::{format_compact_timestamp, get_source_color};

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the activity trail, newest events first.
pub fn render_activity_panel(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DashboardState,
    theme: &Theme,
) {
    // Account for borders and padding when sizing the visible window
    let max_events = (area.height.saturating_sub(3)) as usize;
    let event_count = if max_events > 0 { max_events } else { 1 };

    let lines: Vec<Line> = state
        .activity
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(event_count)
        .map(|event| {
            let status_icon = match (event.kind, event.log_level) {
                (EventKind::Success, _) => "✅",
                (EventKind::Error, LogLevel::Warn) => "",
                (EventKind::Error, _) => "❌",
                (EventKind::Notice, _) => "",
            };

            let source_color = get_source_color(&event.source);
            let compact_time = format_compact_timestamp(&event.timestamp);

            Line::from(vec![
                Span::raw(format!("{} ", status_icon)),
                Span::styled(
                    format!("{} ", compact_time),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(event.msg.clone(), Style::default().fg(source_color)),
            ])
        })
        .collect();

    let paragraph = if lines.is_empty() {
        Paragraph::new(vec![Line::from("Waiting for activity...")])
    } else {
        Paragraph::new(lines)
    };

    let block = Block::default()
        .title("ACTIVITY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.primary))
        .padding(Padding::uniform(1));

    f.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}
