//! Dashboard main renderer

use super::components::{chart, footer, header, logs, sidebar, table};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(28), Constraint::Percentage(72)])
        .split(main_chunks[1]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Percentage(35)])
        .split(content_chunks[0]);

    sidebar::render_sidebar(f, side_chunks[0], state);
    logs::render_logs_panel(f, side_chunks[1], state);

    // Main region: chart and table side by side, graph below
    let data_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(content_chunks[1]);

    let top_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(data_chunks[0]);

    chart::render_chart(f, top_chunks[0], &state.view.chart);
    table::render_table(f, top_chunks[1], &state.view.table);
    chart::render_graph(f, data_chunks[1], &state.view.graph);

    footer::render_footer(f, main_chunks[2]);
}
