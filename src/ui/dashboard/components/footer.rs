//! Dashboard footer component
//!
//! Renders footer with key hints and the copyright line

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the fixed footer row.
pub fn render_footer(f: &mut Frame, area: Rect) {
    let footer_text = "[Q] Quit | [R] Refresh | (c) 2024 Predulive Labs. All rights reserved.";

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
