//! Dashboard header component
//!
//! Renders the deployment title and the branding byline

use crate::config::AppConfig;
use crate::theme::Theme;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the header: title on top, company and operator below.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, config: &AppConfig, theme: &Theme) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title = Paragraph::new(config.title.clone())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let version = env!("CARGO_PKG_VERSION");
    let byline = Line::from(vec![
        Span::styled(
            config.company_name.clone(),
            Style::default().fg(theme.secondary),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(config.user_name.clone(), Style::default().fg(Color::Gray)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("v{}", version), Style::default().fg(Color::DarkGray)),
    ]);

    let byline_widget = Paragraph::new(byline).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(byline_widget, header_chunks[1]);
}
