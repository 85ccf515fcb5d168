//! Dashboard header component
//!
//! Renders the brand, navigation links, and user profile chrome

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the fixed header row.
pub fn render_header(f: &mut Frame, area: Rect) {
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Thick);
    let inner = header_block.inner(area);
    f.render_widget(header_block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20),
            Constraint::Fill(1),
            Constraint::Length(20),
        ])
        .split(inner);

    let brand = Paragraph::new("PREDULIVE LABS").style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(brand, chunks[0]);

    let nav = Paragraph::new(Line::from(vec![
        Span::styled("Home", Style::default().fg(Color::White)),
        Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
        Span::styled("About", Style::default().fg(Color::White)),
        Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Contact", Style::default().fg(Color::White)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(nav, chunks[1]);

    let profile = Paragraph::new("John Doe")
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::LightBlue));
    f.render_widget(profile, chunks[2]);
}
