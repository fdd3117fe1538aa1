//! Tab bar component
//!
//! Renders the navigation entries with their icon glyphs

use crate::theme::Theme;
use crate::ui::dashboard::state::NavEntry;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Tabs};

/// Render the tab bar with the active entry highlighted.
pub fn render_tab_bar(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    entries: &[NavEntry],
    active: usize,
    theme: &Theme,
) {
    let titles: Vec<Line> = entries
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::raw(format!("{} ", entry.icon.glyph())),
                Span::raw(entry.label.clone()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(active)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(tabs, area);
}
