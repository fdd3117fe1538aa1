//! Property occupation panel.
//!
//! Displays the occupation cycle for each managed property: current state,
//! the next action in the cycle, and when it is due. Rows are seeded display
//! data, owned by the panel and discarded with it.

use crate::config::AppConfig;
use crate::reference::OccupancyState;
use crate::registry::TabPanel;
use crate::theme::Theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Row, Table};

/// One property's occupation row.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRow {
    pub name: &'static str,
    pub status: OccupancyState,
    pub next_action_date: &'static str,
}

pub struct PropertyOccupationPanel {
    rows: Vec<PropertyRow>,
}

impl PropertyOccupationPanel {
    pub fn new() -> Self {
        Self {
            rows: vec![
                PropertyRow {
                    name: "Shopping Center A",
                    status: OccupancyState::Vacant,
                    next_action_date: "2023-09-15",
                },
                PropertyRow {
                    name: "Retail Store B",
                    status: OccupancyState::Occupied,
                    next_action_date: "2023-10-01",
                },
                PropertyRow {
                    name: "Office Building C",
                    status: OccupancyState::Vacant,
                    next_action_date: "2023-09-20",
                },
            ],
        }
    }

    pub fn rows(&self) -> &[PropertyRow] {
        &self.rows
    }

    fn status_color(status: OccupancyState) -> Color {
        match status {
            OccupancyState::Occupied => Color::Green,
            OccupancyState::Vacant => Color::Yellow,
        }
    }
}

impl Default for PropertyOccupationPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl TabPanel for PropertyOccupationPanel {
    fn title(&self) -> &str {
        "PROPERTY OCCUPATION"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _config: &AppConfig, theme: &Theme) {
        let header = Row::new(["Property", "Status", "Next Action", "Next Action Date"])
            .style(
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            )
            .bottom_margin(1);

        let rows = self.rows.iter().map(|row| {
            Row::new(vec![
                Cell::from(row.name),
                Cell::from(row.status.to_string())
                    .style(Style::default().fg(Self::status_color(row.status))),
                Cell::from(row.status.next_action()),
                Cell::from(row.next_action_date),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(35),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Percentage(25),
            ],
        )
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title(self.title().to_string())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.primary))
                .padding(Padding::uniform(1)),
        );

        f.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::sample_config;
    use crate::panels::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn panel_seeds_three_rows() {
        let panel = PropertyOccupationPanel::new();
        assert_eq!(panel.rows().len(), 3);
        assert_eq!(panel.rows()[0].name, "Shopping Center A");
        assert_eq!(panel.rows()[0].status, OccupancyState::Vacant);
    }

    #[test]
    // Every seeded row lands in the rendered table with its cycle action.
    fn renders_a_row_per_property() {
        let config = sample_config();
        let theme = Theme::from_config(&config);
        let mut panel = PropertyOccupationPanel::new();

        let backend = TestBackend::new(80, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                panel.render(f, area, &config, &theme);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("PROPERTY OCCUPATION"));
        for name in ["Shopping Center A", "Retail Store B", "Office Building C"] {
            assert!(text.contains(name), "missing row for {}", name);
        }

        // A vacant property's next action is to occupy it
        let row_line = text
            .lines()
            .find(|line| line.contains("Shopping Center A"))
            .expect("row not rendered");
        assert!(row_line.contains("Vacant"));
        assert!(row_line.contains("Occupy"));
        assert!(row_line.contains("2023-09-15"));
    }
}
