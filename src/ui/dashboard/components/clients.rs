//! Client roster component
//!
//! Side table of the analytics view listing the tenant's clients.

use crate::config::Client;
use crate::theme::Theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Row, Table};

/// Render the client roster, one row per client.
pub fn render_client_roster(f: &mut Frame, area: Rect, clients: &[Client], theme: &Theme) {
    let header = Row::new(["Client", "Industry"])
        .style(
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows = clients.iter().map(|client| {
        Row::new(vec![
            Cell::from(client.name.clone()),
            Cell::from(client.industry.clone()),
        ])
    });

    let table = Table::new(rows, [Constraint::Percentage(55), Constraint::Percentage(45)])
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title("CLIENTS")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.primary))
                .padding(Padding::uniform(1)),
        );

    f.render_widget(table, area);
}
