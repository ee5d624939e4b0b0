//! The countdown view: progress dial, phase label, and MM:SS readout.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Circle},
        Paragraph,
    },
    Frame,
};

use crate::app::App;
use crate::constants::ring;
use crate::timer::Phase;

use super::colors;
use super::ring::ProgressArc;

/// Draws the dial with the phase label and countdown overlaid in its
/// center.
pub fn draw_countdown(frame: &mut Frame, area: Rect, app: &App) {
    let dial = dial_area(area);
    if dial.width == 0 || dial.height == 0 {
        return;
    }

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-ring::BOUND, ring::BOUND])
        .y_bounds([-ring::BOUND, ring::BOUND])
        .paint(|ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: ring::RADIUS,
                color: colors::RING_TRACK,
            });
            ctx.draw(&ProgressArc {
                fraction: app.timer.fraction_remaining(),
                color: phase_color(app.timer.phase),
            });
        });
    frame.render_widget(canvas, dial);

    draw_readout(frame, dial, app);
}

/// Phase label, MM:SS, and the run indicator, centered inside the dial.
fn draw_readout(frame: &mut Frame, dial: Rect, app: &App) {
    let overlay = center_overlay(dial);
    let phase_style = Style::default().fg(phase_color(app.timer.phase)).bold();

    let run_indicator = if app.timer.running {
        Line::from("▶ running").style(Style::default().fg(colors::SUCCESS))
    } else {
        Line::from("⏸ paused").style(Style::default().fg(colors::WARNING))
    };

    let lines = vec![
        Line::from(app.timer.phase.label()).style(phase_style),
        Line::from(""),
        Line::from(app.timer.formatted()).style(phase_style),
        Line::from(""),
        run_indicator,
    ];

    let readout = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(readout, overlay);
}

fn phase_color(phase: Phase) -> ratatui::style::Color {
    match phase {
        Phase::Focus => colors::FOCUS,
        Phase::Break => colors::BREAK,
    }
}

/// Centers the dial in the content area. Terminal cells are roughly
/// twice as tall as wide, so the dial rect keeps a 2:1 width/height
/// ratio to come out round.
fn dial_area(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// A small rect in the middle of the dial for the text readout.
fn center_overlay(dial: Rect) -> Rect {
    let width = 12.min(dial.width);
    let height = 5.min(dial.height);
    Rect {
        x: dial.x + (dial.width.saturating_sub(width)) / 2,
        y: dial.y + (dial.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
