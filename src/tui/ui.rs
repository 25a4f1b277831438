//! UI rendering for the stopwatch screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the stopwatch screen.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Layout: header, timer panel, key legend
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Timer panel
            Constraint::Length(1), // Key legend
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_timer(frame, app, chunks[1]);
    render_legend(frame, chunks[2]);
}

/// Render the header with the session number and its start time.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = format!(
        " Session {} · started {} ",
        app.session_number,
        app.active.started_at().format("%H:%M:%S")
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the elapsed-time panel.
///
/// Minutes and seconds are shown mod 60; the hour figure comes straight from
/// the independently rounded breakdown.
fn render_timer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let (hours, minutes, seconds) = app.active.elapsed_breakdown();
    let clock = format!("{hours:02} : {:02} : {:02}", minutes % 60, seconds % 60);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            clock,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{minutes} minutes elapsed")),
    ];

    if app.active.is_paused() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "· PAUSED ·",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Time spent "),
    );

    frame.render_widget(panel, area);
}

/// Render the fixed key legend.
fn render_legend(frame: &mut Frame<'_>, area: Rect) {
    let legend = Paragraph::new("space:pause/resume | N:new timer | q:quit")
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(legend, area);
}

/// Render the exit summary: per-session minutes, the combined total, and a
/// press-any-key prompt.
pub fn render_summary(frame: &mut Frame<'_>, app: &App) {
    let mut lines: Vec<Line<'_>> = app.summary_lines().into_iter().map(Line::from).collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to exit",
        Style::default().fg(Color::DarkGray),
    )));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Summary ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(panel, frame.area());
}
