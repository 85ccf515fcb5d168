//! Dashboard table component
//!
//! Renders payload rows as a fixed three-column table

use crate::payload::Row as PayloadRow;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Row, Table};

/// Verbatim cell text for one payload row, in column order.
pub fn row_cells(row: &PayloadRow) -> [String; 3] {
    [row.id.to_string(), row.name.clone(), row.value.to_string()]
}

/// Render the table section: one row per entry, in input order.
///
/// Row identity follows `Row.id`; the payload must keep ids unique for the
/// rendering to be well-defined.
pub fn render_table(f: &mut Frame, area: Rect, rows: &[PayloadRow]) {
    let header = Row::new(["ID", "Name", "Value"].map(Cell::from))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let body: Vec<Row> = rows
        .iter()
        .map(|row| Row::new(row_cells(row).map(Cell::from)))
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ];

    let table = Table::new(body, widths).header(header).block(
        Block::default()
            .title("TABLE")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::uniform(1)),
    );

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::CellValue;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn payload_row(id: u64, name: &str, value: CellValue) -> PayloadRow {
        PayloadRow {
            id,
            name: name.to_string(),
            value,
        }
    }

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
    fn cells_render_id_name_value_verbatim() {
        let row = payload_row(1, "A", CellValue::Number(10.0));
        assert_eq!(row_cells(&row), ["1", "A", "10"]);

        let row = payload_row(7, "B", CellValue::Text("n/a".to_string()));
        assert_eq!(row_cells(&row), ["7", "B", "n/a"]);
    }

    #[test]
    fn renders_all_rows_in_input_order() {
        let rows = vec![
            payload_row(3, "gamma", CellValue::Number(1.0)),
            payload_row(1, "alpha", CellValue::Number(2.0)),
            payload_row(2, "beta", CellValue::Number(3.0)),
        ];

        let backend = TestBackend::new(44, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_table(f, f.area(), &rows)).unwrap();

        let text = buffer_text(&terminal);
        let gamma = text.find("gamma").expect("gamma rendered");
        let alpha = text.find("alpha").expect("alpha rendered");
        let beta = text.find("beta").expect("beta rendered");
        // Input order, not id order.
        assert!(gamma < alpha);
        assert!(alpha < beta);
    }

    #[test]
    fn empty_rows_render_header_only() {
        let backend = TestBackend::new(44, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_table(f, f.area(), &[])).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("TABLE"));
        assert!(text.contains("ID"));
        assert!(text.contains("Name"));
        assert!(text.contains("Value"));
    }
}
