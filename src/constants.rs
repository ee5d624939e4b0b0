//! Application-wide constants.
//!
//! Centralizes magic numbers and configuration values for maintainability.

use std::time::Duration;

/// Event polling timeout - balances responsiveness with CPU usage.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Wall-clock spacing between countdown ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Countdown defaults and bounds (all in minutes).
pub mod timer {
    /// Focus phase length at startup and after reset.
    pub const DEFAULT_FOCUS_MINUTES: u16 = 25;
    /// Break phase length at startup and after reset.
    pub const DEFAULT_BREAK_MINUTES: u16 = 5;
    /// Shortest configurable phase length.
    pub const MIN_LENGTH_MINUTES: u16 = 1;
    /// Longest configurable phase length.
    pub const MAX_LENGTH_MINUTES: u16 = 60;
}

/// Progress dial geometry, in canvas display units.
pub mod ring {
    /// Dial radius.
    pub const RADIUS: f64 = 120.0;
    /// Full stroke length of the dial outline.
    pub const CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * RADIUS;
    /// Half-extent of the canvas coordinate system; leaves a margin
    /// around the dial.
    pub const BOUND: f64 = 150.0;
    /// Points plotted along a full turn of the arc.
    pub const ARC_STEPS: usize = 720;
}

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Header height including ASCII art and info panel.
    pub const HEADER_HEIGHT: u16 = 6;
    /// Height of the Break/Focus length panels row.
    pub const SETTINGS_HEIGHT: u16 = 4;
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 3;
    /// Status bar height.
    pub const STATUS_BAR_HEIGHT: u16 = 1;
}

/// Dialog dimensions (percentages of screen size).
pub mod dialog {
    /// Help overlay width percentage.
    pub const HELP_WIDTH: u16 = 55;
    /// Help overlay height percentage.
    pub const HELP_HEIGHT: u16 = 70;
}
