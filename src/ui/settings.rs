//! The Break/Focus length adjuster panels.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;

use super::colors;

/// Draws the two length panels side by side. While the countdown runs
/// the panels dim and the adjuster keys are inert.
pub fn draw_settings(frame: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_panel(
        frame,
        halves[0],
        "Break Length",
        app.timer.break_minutes,
        ("h", "l"),
        app.timer.running,
    );
    draw_panel(
        frame,
        halves[1],
        "Focus Length",
        app.timer.focus_minutes,
        ("j", "k"),
        app.timer.running,
    );
}

fn draw_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    minutes: u16,
    keys: (&str, &str),
    locked: bool,
) {
    let (value_style, key_style, border_style) = if locked {
        (
            Style::default().fg(colors::MUTED),
            Style::default().fg(colors::MUTED),
            Style::default().fg(colors::RING_TRACK),
        )
    } else {
        (
            Style::default().fg(colors::PRIMARY).bold(),
            Style::default().fg(colors::KEY).bold(),
            Style::default().fg(colors::BORDER),
        )
    };

    let (down, up) = keys;
    let line = Line::from(vec![
        Span::styled(format!("‹ {down} "), key_style),
        Span::styled(format!(" {minutes} min "), value_style),
        Span::styled(format!(" {up} ›"), key_style),
    ]);

    let panel = Paragraph::new(vec![Line::from(""), line])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style)
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(colors::MUTED),
                )),
        );

    frame.render_widget(panel, area);
}
