//! Status bar and commands bar rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

use super::colors;

/// Draws the commands bar showing the currently available actions.
pub fn draw_commands_bar(frame: &mut Frame, area: Rect, app: &App) {
    let commands = get_commands(app);

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in commands.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors::KEY).bold()));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, Style::default().fg(colors::MUTED)));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));

    let commands_widget = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(commands_widget, area);
}

/// Returns the commands shown for the current state.
fn get_commands(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.show_help {
        return vec![("any key", "close help")];
    }
    if app.timer.running {
        vec![
            ("Space", "pause"),
            ("r", "reset"),
            ("m", "mute"),
            ("?", "help"),
            ("q", "quit"),
        ]
    } else {
        vec![
            ("Space", "start"),
            ("j/k", "focus -/+"),
            ("h/l", "break -/+"),
            ("r", "reset"),
            ("m", "mute"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}

/// Draws the status bar at the bottom (for messages).
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(status) = &app.status {
        (
            format!(" {} ", status),
            Style::default().fg(colors::SUCCESS),
        )
    } else {
        (" Ready".to_string(), Style::default().fg(colors::MUTED))
    };

    let status = Paragraph::new(text).style(style);
    frame.render_widget(status, area);
}
