//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::clock::{ClockDisplay, SessionType};
use crate::tui::app::{App, KEY_HINTS};

const fn session_color(session_type: SessionType) -> Color {
    match session_type {
        SessionType::Work => Color::Red,
        SessionType::ShortBreak => Color::Green,
        SessionType::LongBreak => Color::Blue,
    }
}

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App<'_>) {
    let display = app.clock.display();

    // Create layout: header, gauge, countdown, presets, info, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Progress gauge
            Constraint::Length(3), // Countdown
            Constraint::Length(3), // Presets
            Constraint::Min(4),    // Session info
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, &display, chunks[0]);
    render_gauge(frame, &display, chunks[1]);
    render_countdown(frame, &display, chunks[2]);
    render_presets(frame, app, &display, chunks[3]);
    render_info(frame, &display, chunks[4]);
    render_status_bar(frame, app, chunks[5]);

    if app.show_help {
        render_help(frame, frame.area());
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, display: &ClockDisplay, area: Rect) {
    let color = session_color(display.session_type);
    let title = format!(" {} · preset {} ", display.session_type, display.preset);

    let header = Paragraph::new(title)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(header, area);
}

/// Render the progress gauge with the share of the session remaining.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_gauge(frame: &mut Frame<'_>, display: &ClockDisplay, area: Rect) {
    let percent = display.percent_remaining.clamp(0.0, 100.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Remaining "))
        .gauge_style(Style::default().fg(session_color(display.session_type)))
        .ratio(percent / 100.0)
        .label(format!("{}%", percent.floor() as u32));

    frame.render_widget(gauge, area);
}

/// Render the MM:SS countdown.
fn render_countdown(frame: &mut Frame<'_>, display: &ClockDisplay, area: Rect) {
    let countdown = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{:02}", display.minutes),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" min  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:02}", display.seconds),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" sec", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(countdown, area);
}

/// Render the preset buttons, highlighting the active one.
fn render_presets(frame: &mut Frame<'_>, app: &App<'_>, display: &ClockDisplay, area: Rect) {
    let mut spans = Vec::new();
    for (i, preset) in app.presets.iter().enumerate() {
        let style = if preset.label() == display.preset {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, preset.label()), style));
        spans.push(Span::raw("  "));
    }

    let auto = if display.auto_advance { "[x]" } else { "[ ]" };
    spans.push(Span::styled(
        format!("{auto} auto-start next session"),
        Style::default().fg(Color::Yellow),
    ));

    let presets = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Presets "));

    frame.render_widget(presets, area);
}

/// Render session info: type, count, state.
fn render_info(frame: &mut Frame<'_>, display: &ClockDisplay, area: Rect) {
    let state_style = if display.running {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Session: "),
            Span::styled(
                display.session_type.display_name(),
                Style::default()
                    .fg(session_color(display.session_type))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Pomodoros completed: "),
            Span::styled(
                display.completed_work_sessions.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("State: "),
            Span::styled(display.state_label(), state_style),
        ]),
    ];

    let info = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(info, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(KEY_HINTS);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// Render the key help overlay.
fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let lines: Vec<Line<'_>> = [
        "s / Enter   start",
        "p           pause",
        "Space       start / pause",
        "r           reset",
        "1-9         choose preset",
        "a           toggle auto-start",
        "w / b / l   work / short / long",
        "?           close help",
        "q / Esc     quit",
    ]
    .into_iter()
    .map(Line::from)
    .collect();

    let popup = centered(area, 40, 13);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keys ")
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        popup,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
