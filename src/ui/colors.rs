//! Color theme definitions for the UI.
//!
//! All color constants are defined here for consistency and easy theme changes.

use ratatui::style::Color;

/// Primary accent color (used for titles, highlights)
pub const PRIMARY: Color = Color::Rgb(56, 189, 248); // Bright cyan
/// Focus phase color (dial stroke and labels)
pub const FOCUS: Color = Color::Rgb(74, 222, 128); // Bright green
/// Break phase color (dial stroke and labels)
pub const BREAK: Color = Color::Rgb(251, 191, 36); // Bright amber
/// Unlit portion of the dial
pub const RING_TRACK: Color = Color::Rgb(55, 65, 81); // Slate
/// Muted text color
pub const MUTED: Color = Color::Rgb(148, 163, 184); // Brighter gray
/// Warning color (paused state)
pub const WARNING: Color = Color::Rgb(251, 191, 36); // Bright amber
/// Success color (running state, confirmations)
pub const SUCCESS: Color = Color::Rgb(74, 222, 128); // Bright green
/// Border color
pub const BORDER: Color = Color::Rgb(129, 140, 248); // Light indigo
/// Key highlight color (for keyboard shortcuts)
pub const KEY: Color = Color::Rgb(244, 114, 182); // Bright pink
/// Accent color for icons and decorations
pub const ACCENT: Color = Color::Rgb(192, 132, 252); // Bright purple
