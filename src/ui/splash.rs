//! Splash screen rendering module.

use crate::config::AppConfig;
use crate::theme::Theme;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Letter-spaced uppercase wordmark built from the company name.
fn wordmark(company_name: &str) -> String {
    let mut out = String::new();
    for c in company_name.to_uppercase().chars() {
        out.push(c);
        out.push(' ');
    }
    out.trim_end().to_string()
}

pub fn render_splash(f: &mut Frame, config: &AppConfig, theme: &Theme) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(
        Span::styled(
            wordmark(&config.company_name),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .into(),
    );

    // Spacer and the deployment title
    lines.push(Line::from(Span::raw(" ")));
    lines.push(
        Span::styled(
            config.title.clone(),
            Style::default().fg(theme.secondary),
        )
        .into(),
    );

    lines.push(Line::from(Span::raw(" ")));
    lines.push(
        Span::styled(
            format!("Version {}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::ITALIC),
        )
        .into(),
    );

    // Determine the wordmark block height
    let splash_height = (lines.len() + 2) as u16;

    // Vertically center using layout
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min((f.area().height.saturating_sub(splash_height)) / 2),
            Constraint::Length(splash_height),
            Constraint::Min((f.area().height.saturating_sub(splash_height + 1)) / 2),
        ])
        .split(f.area());

    let centered_area: Rect = vertical_chunks[1];

    let splash = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    f.render_widget(splash, centered_area);
}
