//! Header rendering with ASCII art logo.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use super::colors;

/// Draws the header with ASCII art logo, info panel, and wall clock.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = Style::default().fg(colors::BORDER);
    let dim_style = Style::default().fg(Color::Rgb(55, 65, 81));
    let muted_style = Style::default().fg(Color::Rgb(75, 85, 99));
    let logo_style = Style::default().fg(colors::ACCENT).bold();

    // Run indicator
    let status = if app.timer.running {
        vec![
            Span::styled("┃", border_style),
            Span::styled(
                " ◈ ",
                Style::default()
                    .fg(colors::SUCCESS)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled("TICKING", Style::default().fg(colors::SUCCESS).bold()),
            Span::styled(" ┃", border_style),
        ]
    } else {
        vec![
            Span::styled("┃", border_style),
            Span::styled(" ◈ ", Style::default().fg(colors::WARNING)),
            Span::styled("IDLE", Style::default().fg(colors::WARNING).bold()),
            Span::styled(" ┃", border_style),
        ]
    };

    // Top border with run indicator
    let line0 = Line::from(vec![
        Span::styled("┏", Style::default().fg(colors::ACCENT)),
        Span::styled("━━━━━━━━━━━━━━━━━━━━━━━", border_style),
        Span::styled("┓", Style::default().fg(colors::PRIMARY)),
        Span::styled("░▒▓", dim_style),
        status[0].clone(),
        status[1].clone(),
        status[2].clone(),
        status[3].clone(),
        Span::styled("▓▒░", dim_style),
        Span::styled("╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍", dim_style),
    ]);

    // Logo line 1 + info panel top
    let line1 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled(" █▀▀█ █▀▀█ █▀▄▀█ █▀▀█ ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╭───────────────────────────────╮", border_style),
    ]);

    // Logo line 2 + POMODORO::TIMER title
    let line2 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled(" █▄▄█ █  █ █ ▀ █ █  █ ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  │ ", border_style),
        Span::styled("◆", Style::default().fg(colors::ACCENT)),
        Span::styled(" POMODORO", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled("::", muted_style),
        Span::styled("TIMER", Style::default().fg(colors::KEY).bold()),
        Span::styled(" ▸▸ ", muted_style),
        Span::styled("TUI", Style::default().fg(colors::ACCENT).bold()),
        Span::styled(" ◆  │", border_style),
    ]);

    // Logo line 3 + phase tags
    let line3 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled(" █    ▀▀▀▀ ▀   ▀ ▀▀▀▀ ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  │ ", border_style),
        Span::styled("▪", Style::default().fg(colors::FOCUS)),
        Span::styled(" FOCUS ", Style::default().fg(colors::MUTED)),
        Span::styled("│", dim_style),
        Span::styled(" ▪", Style::default().fg(colors::BREAK)),
        Span::styled(" BREAK ", Style::default().fg(colors::MUTED)),
        Span::styled("│", dim_style),
        Span::styled(" ▪", Style::default().fg(colors::WARNING)),
        Span::styled(format!(" v{} │", env!("CARGO_PKG_VERSION")), border_style),
    ]);

    // Logo tail + info panel bottom
    let line4 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled(" ▀                    ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╰───────────────────────────────╯", border_style),
    ]);

    // Bottom border + wall clock and alarm state
    let clock = chrono::Local::now().format("%H:%M").to_string();
    let alarm_tag = if app.alarm_muted() { "muted" } else { "armed" };
    let line5 = Line::from(vec![
        Span::styled("┗", Style::default().fg(colors::ACCENT)),
        Span::styled("━━━━━━━━━━━━━━━━━━━━━━━", border_style),
        Span::styled("┛", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╾╢", border_style),
        Span::styled(" ⬢ ", Style::default().fg(colors::FOCUS)),
        Span::styled(clock, Style::default().fg(colors::FOCUS).bold()),
        Span::styled(" ╟╼ ", border_style),
        Span::styled("alarm ", Style::default().fg(colors::MUTED)),
        Span::styled(
            alarm_tag,
            if app.alarm_muted() {
                Style::default().fg(colors::WARNING)
            } else {
                Style::default().fg(colors::FOCUS)
            },
        ),
    ]);

    let header = Paragraph::new(vec![line0, line1, line2, line3, line4, line5]);
    frame.render_widget(header, area);
}
