//! Dashboard chart components
//!
//! Renders the chart and graph sections as single-series bar charts

use crate::payload::SeriesBundle;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Padding};

/// Fixed display label for the single dataset.
const DATASET_LABEL: &str = "Dataset 1";

/// Render the top chart section.
pub fn render_chart(f: &mut Frame, area: Rect, series: &SeriesBundle) {
    render_bar_chart(f, area, series, "CHART", Color::Cyan);
}

/// Render the bottom graph section.
pub fn render_graph(f: &mut Frame, area: Rect, series: &SeriesBundle) {
    render_bar_chart(f, area, series, "GRAPH", Color::Magenta);
}

/// Build one bar per label/value pair, in input order.
///
/// Pairing is positional: a length mismatch between labels and values plots
/// only the shorter prefix.
pub fn series_bars(series: &SeriesBundle) -> Vec<Bar<'_>> {
    series
        .labels
        .iter()
        .zip(series.values.iter())
        .map(|(label, value)| {
            Bar::default()
                .label(label.as_str().into())
                .value(value.round() as u64)
                .text_value(format!("{}", value))
        })
        .collect()
}

fn render_bar_chart(f: &mut Frame, area: Rect, series: &SeriesBundle, title: &str, color: Color) {
    let block = Block::default()
        .title(format!("{} - {}", title, DATASET_LABEL))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .padding(Padding::uniform(1));

    let bars = series_bars(series);
    let chart = BarChart::default()
        .block(block)
        .bar_width(7)
        .bar_gap(2)
        .bar_style(Style::default().fg(color))
        .value_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(Color::Gray))
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn bars_pair_labels_and_values_in_order() {
        let series = SeriesBundle {
            labels: vec!["Q1".to_string(), "Q2".to_string()],
            values: vec![5.0, 9.0],
        };
        assert_eq!(series_bars(&series).len(), 2);
    }

    #[test]
    fn mismatched_lengths_plot_the_shorter_prefix() {
        let series = SeriesBundle {
            labels: vec!["Q1".to_string(), "Q2".to_string(), "Q3".to_string()],
            values: vec![5.0],
        };
        assert_eq!(series_bars(&series).len(), 1);
    }

    #[test]
    fn chart_renders_categories_in_order_with_values() {
        let series = SeriesBundle {
            labels: vec!["Q1".to_string(), "Q2".to_string()],
            values: vec![5.0, 9.0],
        };

        let backend = TestBackend::new(40, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_chart(f, f.area(), &series))
            .unwrap();

        let text = buffer_text(&terminal);
        let q1 = text.find("Q1").expect("Q1 rendered");
        let q2 = text.find("Q2").expect("Q2 rendered");
        assert!(q1 < q2, "categories keep input order");
        assert!(text.contains('5'));
        assert!(text.contains('9'));
    }

    #[test]
    fn empty_series_renders_no_bars() {
        let backend = TestBackend::new(30, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_graph(f, f.area(), &SeriesBundle::default()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("GRAPH - Dataset 1"));
    }
}
