//! Placeholder panel component
//!
//! Shown for tabs with neither a registered panel nor charts. Keeping the
//! dashboard up beats failing it over one unconfigured tab.

use crate::theme::Theme;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render an empty panel with an explanatory message.
pub fn render_placeholder(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let block = Block::default()
        .title("PANEL")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.primary))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
        .block(block)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
