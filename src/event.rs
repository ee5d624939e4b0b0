//! Event handling module.
//!
//! This module handles keyboard and terminal events using crossterm.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::constants::POLL_TIMEOUT;

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Start or pause the countdown
    ToggleRun,
    /// Restore the startup state
    Reset,
    /// Lengthen the focus phase by one minute
    FocusUp,
    /// Shorten the focus phase by one minute
    FocusDown,
    /// Lengthen the break phase by one minute
    BreakUp,
    /// Shorten the break phase by one minute
    BreakDown,
    /// Mute or unmute the alarm
    ToggleMute,
    /// Show help
    Help,
}

/// Handles terminal events and converts them to application actions.
pub struct EventHandler;

impl EventHandler {
    /// Creates a new event handler with default settings.
    pub fn new() -> Self {
        Self
    }

    /// Polls for the next event and converts it to an Action.
    ///
    /// Returns Ok(None) if no event is available within the timeout.
    /// Returns Ok(Some(action)) if a key event was converted to an action.
    pub fn next(&self) -> io::Result<Option<Action>> {
        // Check if an event is available
        if event::poll(POLL_TIMEOUT)? {
            // Read the event
            if let Event::Key(key_event) = event::read()? {
                // Only process key press events (not releases)
                if key_event.kind == KeyEventKind::Press {
                    return Ok(self.key_to_action(key_event));
                }
            }
        }
        Ok(None)
    }

    /// Converts a key event to an application action.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        // Map keys to actions
        match key.code {
            // Length adjusters
            KeyCode::Up | KeyCode::Char('k') => Some(Action::FocusUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::FocusDown),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::BreakUp),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::BreakDown),

            // Run control
            KeyCode::Char(' ') => Some(Action::ToggleRun),
            KeyCode::Char('r') => Some(Action::Reset),

            // Misc
            KeyCode::Char('m') => Some(Action::ToggleMute),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Action::Help),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

            // No matching action
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
