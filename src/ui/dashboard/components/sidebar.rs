//! Dashboard sidebar component
//!
//! Renders navigation, user data, and notification chrome plus session info

use crate::environment::Environment;

use super::super::state::{DashboardState, LoadPhase};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

const NAV_ITEMS: [&str; 5] = ["Dashboard", "Settings", "Profile", "Users", "Notifications"];

fn section_title(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Render the sidebar column.
pub fn render_sidebar(f: &mut Frame, area: Rect, state: &DashboardState) {
    let mut lines = Vec::new();

    for item in NAV_ITEMS {
        lines.push(Line::from(Span::styled(
            format!("> {}", item),
            Style::default().fg(Color::White),
        )));
    }

    lines.push(Line::from(""));
    lines.push(section_title("User Data"));
    lines.push(Line::from(Span::styled(
        "Name: John Doe",
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(Span::styled(
        "Email: john.doe@example.com",
        Style::default().fg(Color::Gray),
    )));

    lines.push(Line::from(""));
    lines.push(section_title("Notifications"));
    for notification in ["Mails: 3", "Messages: 5", "Feedback: 2"] {
        lines.push(Line::from(Span::styled(
            notification,
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(section_title("Session"));
    lines.push(Line::from(Span::styled(
        format!("User: {}", state.user_id),
        Style::default().fg(Color::LightBlue),
    )));

    let env_color = match state.environment {
        Environment::Production => Color::Green,
        Environment::Local | Environment::Custom { .. } => Color::Yellow,
    };
    lines.push(Line::from(Span::styled(
        format!("Env: {}", state.environment),
        Style::default().fg(env_color),
    )));

    let (phase_text, phase_color) = match state.phase {
        LoadPhase::Empty => ("Data: Empty", Color::DarkGray),
        LoadPhase::Loaded => ("Data: Loaded", Color::Green),
    };
    lines.push(Line::from(Span::styled(
        phase_text,
        Style::default().fg(phase_color),
    )));

    let version = env!("CARGO_PKG_VERSION");
    lines.push(Line::from(Span::styled(
        format!("Version: {}", version),
        Style::default().fg(Color::Cyan),
    )));

    let uptime = state.start_time.elapsed();
    let uptime_string = if uptime.as_secs() >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60,
            uptime.as_secs() % 60
        )
    } else {
        format!(
            "Uptime: {}m {}s",
            uptime.as_secs() / 60,
            uptime.as_secs() % 60
        )
    };
    lines.push(Line::from(Span::styled(
        uptime_string,
        Style::default().fg(Color::LightGreen),
    )));

    let sidebar_block = Block::default()
        .title("MENU")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let sidebar_paragraph = Paragraph::new(lines)
        .block(sidebar_block)
        .wrap(Wrap { trim: true });
    f.render_widget(sidebar_paragraph, area);
}
