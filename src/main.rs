//! Pomodoro timer TUI
//!
//! A terminal countdown timer alternating Focus and Break phases.
//! Run with: pomotui [-f|--focus <MIN>] [-b|--break <MIN>] [-m|--mute]

mod alarm;
mod app;
mod constants;
mod event;
mod ticker;
mod timer;
mod ui;

use std::env;

use anyhow::{Context, Result};

use crate::app::App;
use crate::constants::timer::{DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES};
use crate::event::EventHandler;
use crate::timer::TimerState;

/// Startup options gathered from the command line.
struct Options {
    focus_minutes: u16,
    break_minutes: u16,
    muted: bool,
}

/// Parses command line arguments.
///
/// Supports:
/// - `-f <MIN>` or `--focus <MIN>` for the initial focus length
/// - `-b <MIN>` or `--break <MIN>` for the initial break length
/// - `-m` or `--mute` to start with the alarm muted
/// - `-h` or `--help` to show usage
fn parse_args() -> Options {
    let args: Vec<String> = env::args().collect();

    let mut options = Options {
        focus_minutes: DEFAULT_FOCUS_MINUTES,
        break_minutes: DEFAULT_BREAK_MINUTES,
        muted: false,
    };

    // Simple argument parsing using iterator
    let mut args_iter = args.iter().skip(1); // Skip program name

    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "-f" | "--focus" => {
                options.focus_minutes = parse_minutes(args_iter.next(), "--focus");
            }
            "-b" | "--break" => {
                options.break_minutes = parse_minutes(args_iter.next(), "--break");
            }
            "-m" | "--mute" => {
                options.muted = true;
            }
            "-h" | "--help" => {
                println!("pomotui - Pomodoro timer TUI");
                println!();
                println!("Usage: pomotui [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --focus <MIN>  Initial focus length in minutes (1-60, default 25)");
                println!("  -b, --break <MIN>  Initial break length in minutes (1-60, default 5)");
                println!("  -m, --mute         Start with the phase alarm muted");
                println!("  -h, --help         Show this help message");
                println!();
                println!("Values outside 1-60 are clamped. Lengths can also be adjusted");
                println!("inside the app while the countdown is stopped.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Error: Unknown argument '{}'", other);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
        }
    }

    options
}

/// Parses a minute count following a length flag, exiting with an
/// error message when it is missing or not a number.
fn parse_minutes(value: Option<&String>, flag: &str) -> u16 {
    let Some(value) = value else {
        eprintln!("Error: {flag} requires a minute count");
        std::process::exit(1);
    };
    match value.parse() {
        Ok(minutes) => minutes,
        Err(_) => {
            eprintln!("Error: {flag} expects a number of minutes, got '{value}'");
            std::process::exit(1);
        }
    }
}

/// Entry point for the application.
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let options = parse_args();

    // Initialize the terminal
    let terminal = ratatui::init();

    // Create the application
    let app = App::new(
        TimerState::with_lengths(options.focus_minutes, options.break_minutes),
        options.muted,
    );

    // Run the application
    let result = run_app(terminal, app).await;

    // Restore the terminal to its original state
    ratatui::restore();

    // Return the result
    result
}

/// Main application loop.
///
/// This function runs the TUI event loop:
/// 1. Drain any countdown ticks that fired since the last draw
/// 2. Draw the current UI state
/// 3. Handle user input events
/// 4. Repeat until the user quits
async fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    // Create the event handler
    let event_handler = EventHandler::new();

    // Main loop
    loop {
        // Consume ticks first so the draw below shows a fresh countdown
        app.poll_ticks();

        // Draw the UI
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        // Handle events (keyboard input, etc.)
        if let Some(action) = event_handler.next()? {
            // Process the event and check if we should quit
            if app.handle_event(action) {
                break;
            }
        }
    }

    Ok(())
}
