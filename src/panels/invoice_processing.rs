//! Invoice processing panel.
//!
//! Shows each property's outstanding invoice with a currency-prefixed amount
//! and its lifecycle status. Display-only; no editing or pagination.

use crate::config::AppConfig;
use crate::reference::InvoiceStatus;
use crate::registry::TabPanel;
use crate::theme::Theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Row, Table};

/// One invoice row.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRow {
    pub property: &'static str,
    pub amount: u64,
    pub status: InvoiceStatus,
}

pub struct InvoiceProcessingPanel {
    rows: Vec<InvoiceRow>,
}

impl InvoiceProcessingPanel {
    pub fn new() -> Self {
        Self {
            rows: vec![
                InvoiceRow {
                    property: "Shopping Center A",
                    amount: 5000,
                    status: InvoiceStatus::Pending,
                },
                InvoiceRow {
                    property: "Retail Store B",
                    amount: 3000,
                    status: InvoiceStatus::Paid,
                },
                InvoiceRow {
                    property: "Office Building C",
                    amount: 7000,
                    status: InvoiceStatus::Overdue,
                },
            ],
        }
    }

    pub fn rows(&self) -> &[InvoiceRow] {
        &self.rows
    }

    /// Amounts display with the tenant's currency prefix.
    pub fn format_amount(amount: u64) -> String {
        format!("£{}", amount)
    }

    fn status_color(status: InvoiceStatus) -> Color {
        match status {
            InvoiceStatus::Paid => Color::Green,
            InvoiceStatus::Pending => Color::Yellow,
            InvoiceStatus::Overdue => Color::Red,
        }
    }
}

impl Default for InvoiceProcessingPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl TabPanel for InvoiceProcessingPanel {
    fn title(&self) -> &str {
        "INVOICE PROCESSING"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _config: &AppConfig, theme: &Theme) {
        let header = Row::new(["Property", "Amount", "Status"])
            .style(
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            )
            .bottom_margin(1);

        let rows = self.rows.iter().map(|row| {
            Row::new(vec![
                Cell::from(row.property),
                Cell::from(Self::format_amount(row.amount)),
                Cell::from(row.status.to_string())
                    .style(Style::default().fg(Self::status_color(row.status))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(50),
                Constraint::Percentage(25),
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
        let panel = InvoiceProcessingPanel::new();
        assert_eq!(panel.rows().len(), 3);
    }

    #[test]
    fn amounts_carry_the_currency_prefix() {
        assert_eq!(InvoiceProcessingPanel::format_amount(5000), "£5000");
        assert_eq!(InvoiceProcessingPanel::format_amount(0), "£0");
    }

    #[test]
    // A pending invoice renders as one row: property, prefixed amount, status.
    fn renders_one_row_per_invoice() {
        let config = sample_config();
        let theme = Theme::from_config(&config);
        let mut panel = InvoiceProcessingPanel::new();

        let backend = TestBackend::new(80, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                panel.render(f, area, &config, &theme);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("INVOICE PROCESSING"));

        let row_line = text
            .lines()
            .find(|line| line.contains("Shopping Center A"))
            .expect("row not rendered");
        assert!(row_line.contains("£5000"));
        assert!(row_line.contains("Pending"));

        let paid_line = text
            .lines()
            .find(|line| line.contains("Retail Store B"))
            .expect("row not rendered");
        assert!(paid_line.contains("£3000"));
        assert!(paid_line.contains("Paid"));

        let overdue_line = text
            .lines()
            .find(|line| line.contains("Office Building C"))
            .expect("row not rendered");
        assert!(overdue_line.contains("£7000"));
        assert!(overdue_line.contains("Overdue"));
    }
}
