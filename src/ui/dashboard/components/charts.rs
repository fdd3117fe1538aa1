//! Generic chart panel
//!
//! The fallback renderer for tabs without a registered panel, and the body
//! of the analytics view. Draws every chart in a section side by side.

use crate::charts::{ChartConfig, ChartKind};
use crate::theme::Theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, Gauge, GraphType,
    Padding, Paragraph,
};
use std::collections::BTreeMap;

/// Render all charts of a section in equal-width columns.
pub fn render_chart_grid(
    f: &mut Frame,
    area: Rect,
    charts: &BTreeMap<String, ChartConfig>,
    theme: &Theme,
) {
    if charts.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, charts.len() as u32); charts.len()];
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for ((name, chart), chunk) in charts.iter().zip(chunks.iter()) {
        render_chart(f, *chunk, name, chart, theme);
    }
}

/// Render one chart according to its declared kind.
pub fn render_chart(f: &mut Frame, area: Rect, name: &str, chart: &ChartConfig, theme: &Theme) {
    match chart.kind {
        ChartKind::Pie => render_pie(f, area, name, chart, theme),
        ChartKind::Bar => render_bar(f, area, name, chart, theme),
        ChartKind::Line => render_line(f, area, name, chart, theme),
    }
}

fn chart_block(name: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .title(name.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.primary))
        .padding(Padding::uniform(1))
}

/// Pie charts have no terminal-native widget; each category becomes a gauge
/// showing its share of the series total.
fn render_pie(f: &mut Frame, area: Rect, name: &str, chart: &ChartConfig, theme: &Theme) {
    let block = chart_block(name, theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(key) = chart.data_keys.first() else {
        render_empty(f, inner, "no data keys declared");
        return;
    };
    let total = chart.series_total(key);
    if chart.data.is_empty() || total <= 0.0 {
        render_empty(f, inner, "no data");
        return;
    }

    let mut constraints = vec![Constraint::Length(2); chart.data.len()];
    constraints.push(Constraint::Fill(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, point) in chart.data.iter().enumerate() {
        let value = point.value(key).unwrap_or(0.0);
        let percent = ((value / total) * 100.0).round() as u16;
        let gauge = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(theme.chart_color(&chart.colors, index))
                    .add_modifier(Modifier::BOLD),
            )
            .percent(percent.min(100))
            .label(format!("{} {}%", point.label, percent));
        f.render_widget(gauge, rows[index]);
    }
}

fn render_bar(f: &mut Frame, area: Rect, name: &str, chart: &ChartConfig, theme: &Theme) {
    let mut barchart = BarChart::default()
        .block(chart_block(name, theme))
        .bar_width(9)
        .bar_gap(2)
        .group_gap(3);

    for (series_index, key) in chart.data_keys.iter().enumerate() {
        let color = theme.chart_color(&chart.colors, series_index);
        let bars: Vec<Bar> = chart
            .data
            .iter()
            .map(|point| {
                Bar::default()
                    .label(point.label.clone().into())
                    .value(point.value(key).unwrap_or(0.0).round() as u64)
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(Color::Black).bg(color))
            })
            .collect();
        barchart = barchart.data(BarGroup::default().bars(&bars));
    }

    f.render_widget(barchart, area);
}

fn render_line(f: &mut Frame, area: Rect, name: &str, chart: &ChartConfig, theme: &Theme) {
    // Dataset borrows its points, so the series storage outlives the widgets
    let series: Vec<(String, Color, Vec<(f64, f64)>)> = chart
        .data_keys
        .iter()
        .enumerate()
        .map(|(series_index, key)| {
            let points = chart
                .data
                .iter()
                .enumerate()
                .map(|(x, point)| (x as f64, point.value(key).unwrap_or(0.0)))
                .collect();
            (
                key.clone(),
                theme.chart_color(&chart.colors, series_index),
                points,
            )
        })
        .collect();

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(key, color, points)| {
            Dataset::default()
                .name(key.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(points)
        })
        .collect();

    let max_x = chart.data.len().saturating_sub(1).max(1) as f64;
    let max_y = chart.max_value().max(1.0);
    let first_label = chart.data.first().map(|p| p.label.clone()).unwrap_or_default();
    let last_label = chart.data.last().map(|p| p.label.clone()).unwrap_or_default();

    let line_chart = Chart::new(datasets)
        .block(chart_block(name, theme))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_x])
                .labels([first_label, last_label]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_y])
                .labels(["0".to_string(), format!("{:.0}", max_y)]),
        );

    f.render_widget(line_chart, area);
}

fn render_empty(f: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, area);
}
