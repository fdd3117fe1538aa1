//! Dashboard footer component
//!
//! Renders footer with the key bindings and uptime

use crate::theme::Theme;
use crate::ui::dashboard::state::DashboardState;
use crate::ui::dashboard::utils::format_uptime;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the footer hint line.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState, theme: &Theme) {
    let footer_text = format!(
        "[Left/Right] Switch Tab | [1-9] Jump | [Q] Quit | Uptime {}",
        format_uptime(state.start_time.elapsed())
    );

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
