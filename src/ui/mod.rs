//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Each region of the screen is rendered by a separate submodule.

mod colors;
mod header;
mod help;
mod ring;
mod settings;
mod status;
mod timer;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::constants::layout;

use header::draw_header;
use help::draw_help_overlay;
use settings::draw_settings;
use status::{draw_commands_bar, draw_status_bar};
use timer::draw_countdown;

/// Main draw function - lays out the screen and delegates each region.
pub fn draw(frame: &mut Frame, app: &App) {
    // Create the main layout: header, settings, dial, commands bar, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Length(layout::SETTINGS_HEIGHT),
            Constraint::Min(0), // Progress dial and readout
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_settings(frame, chunks[1], app);
    draw_countdown(frame, chunks[2], app);
    draw_commands_bar(frame, chunks[3], app);
    draw_status_bar(frame, chunks[4], app);

    // Draw help overlay if enabled
    if app.show_help {
        draw_help_overlay(frame);
    }
}
