//! Help overlay rendering.

use ratatui::{
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::dialog;

use super::colors;
use super::utils::centered_rect;

/// Draws a help overlay popup.
pub fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(dialog::HELP_WIDTH, dialog::HELP_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let help_text = get_help_text();

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::PRIMARY))
                .border_set(symbols::border::DOUBLE)
                .title(Line::from(vec![
                    Span::styled(" ", Style::default()),
                    Span::styled(" Help ", Style::default().fg(Color::White).bold()),
                    Span::styled(
                        "- Press any key to close ",
                        Style::default().fg(colors::MUTED),
                    ),
                ]))
                .style(Style::default()),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
}

/// Returns the help text content.
fn get_help_text() -> Text<'static> {
    let key_style = Style::default().fg(colors::KEY).bold();
    let desc_style = Style::default().fg(Color::White);
    let section_style = Style::default().fg(colors::PRIMARY).bold();
    let or_style = Style::default().fg(colors::MUTED);

    Text::from(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(" COUNTDOWN", section_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("Space     ", key_style),
            Span::styled("Start / pause the countdown", desc_style),
        ]),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("r         ", key_style),
            Span::styled("Reset everything to 25/5 defaults", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(" LENGTHS", section_style),
        ]),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("(1-60 minutes, locked while running)", or_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("k  ", key_style),
            Span::styled("or ", or_style),
            Span::styled("Up    ", key_style),
            Span::styled("Focus length +1", desc_style),
        ]),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("j  ", key_style),
            Span::styled("or ", or_style),
            Span::styled("Down  ", key_style),
            Span::styled("Focus length -1", desc_style),
        ]),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("l  ", key_style),
            Span::styled("or ", or_style),
            Span::styled("Right ", key_style),
            Span::styled("Break length +1", desc_style),
        ]),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("h  ", key_style),
            Span::styled("or ", or_style),
            Span::styled("Left  ", key_style),
            Span::styled("Break length -1", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(" GENERAL", section_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("m         ", key_style),
            Span::styled("Mute / unmute the phase alarm", desc_style),
        ]),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("?  ", key_style),
            Span::styled("or ", or_style),
            Span::styled("F1    ", key_style),
            Span::styled("Show this help", desc_style),
        ]),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("q  ", key_style),
            Span::styled("or ", or_style),
            Span::styled("Ctrl+C", key_style),
            Span::styled(" Quit application", desc_style),
        ]),
        Line::from(""),
    ])
}
