//! Application state and logic.
//!
//! This module ties the pure timer state to the ticker task and the
//! alarm, and converts user actions into state transitions.

use crate::alarm::Alarm;
use crate::event::Action;
use crate::ticker::Ticker;
use crate::timer::{TickOutcome, TimerState};

/// Main application state.
pub struct App {
    /// The countdown, settings, phase, and running flag.
    pub timer: TimerState,
    /// Help overlay visibility.
    pub show_help: bool,
    /// Message shown in the status bar.
    pub status: Option<String>,
    /// 1-second tick source, active only while running.
    ticker: Ticker,
    /// Phase-transition alarm.
    alarm: Alarm,
}

impl App {
    /// Creates the application around an initial timer state.
    pub fn new(timer: TimerState, muted: bool) -> Self {
        Self {
            timer,
            show_help: false,
            status: None,
            ticker: Ticker::new(),
            alarm: Alarm::new(muted),
        }
    }

    /// Handles an action and returns true if the app should quit.
    pub fn handle_event(&mut self, action: Action) -> bool {
        // Handle help toggle from any state
        if action == Action::Help {
            self.show_help = !self.show_help;
            return false;
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return false;
        }

        match action {
            Action::Quit => return true,
            Action::ToggleRun => self.toggle_running(),
            Action::Reset => self.reset(),
            Action::FocusUp => {
                self.timer.adjust_focus(1);
            }
            Action::FocusDown => {
                self.timer.adjust_focus(-1);
            }
            Action::BreakUp => {
                self.timer.adjust_break(1);
            }
            Action::BreakDown => {
                self.timer.adjust_break(-1);
            }
            Action::ToggleMute => {
                let muted = self.alarm.toggle_mute();
                self.set_status(if muted { "Alarm muted" } else { "Alarm unmuted" });
            }
            Action::Help => {}
        }
        false
    }

    /// Consumes every tick that has fired since the last draw.
    pub fn poll_ticks(&mut self) {
        while self.ticker.try_tick() {
            self.on_tick();
        }
    }

    pub fn alarm_muted(&self) -> bool {
        self.alarm.is_muted()
    }

    fn toggle_running(&mut self) {
        self.timer.toggle_running();
        self.set_status(if self.timer.running { "Running" } else { "Paused" });
        self.sync_ticker();
    }

    fn reset(&mut self) {
        self.timer.reset();
        self.alarm.silence();
        self.sync_ticker();
        self.set_status("Timer reset");
    }

    fn on_tick(&mut self) {
        match self.timer.tick() {
            TickOutcome::Counted => {}
            TickOutcome::Transitioned(entered) => {
                self.alarm.ring(entered);
                self.set_status(&format!(
                    "{} started - {} min",
                    entered.label(),
                    self.timer.phase_length_minutes()
                ));
                // The phase changed, so the cadence is rebuilt against
                // the settings as they are now.
                self.sync_ticker();
            }
        }
    }

    /// Aligns the ticker with the running flag. Called after every
    /// mutation that changed `running` or `phase`; a restart discards
    /// any tick queued against the old state.
    fn sync_ticker(&mut self) {
        if self.timer.running {
            self.ticker.restart();
        } else {
            self.ticker.stop();
        }
    }

    fn set_status(&mut self, text: &str) {
        self.status = Some(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Phase;
    use std::time::Duration;

    fn muted_app() -> App {
        App::new(TimerState::new(), true)
    }

    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_drain_into_the_countdown() {
        let mut app = muted_app();
        app.handle_event(Action::ToggleRun);
        assert!(app.timer.running);
        settle().await;

        for _ in 0..2 {
            tokio::time::advance(Duration::from_secs(1)).await;
            settle().await;
        }
        app.poll_ticks();
        assert_eq!(app.timer.remaining_seconds, 1498);
    }

    #[tokio::test(start_paused = true)]
    async fn pausing_stops_the_countdown() {
        let mut app = muted_app();
        app.handle_event(Action::ToggleRun);
        settle().await;
        tokio::time::advance(Duration::from_secs(1)).await;
        settle().await;

        // The queued tick dies with the pause; no stray decrement.
        app.handle_event(Action::ToggleRun);
        app.poll_ticks();
        assert_eq!(app.timer.remaining_seconds, 1500);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_countdown_flips_phase_on_the_next_tick() {
        let mut app = muted_app();
        app.timer.remaining_seconds = 0;
        app.handle_event(Action::ToggleRun);
        settle().await;

        tokio::time::advance(Duration::from_secs(1)).await;
        settle().await;
        app.poll_ticks();

        assert_eq!(app.timer.phase, Phase::Break);
        assert_eq!(app.timer.remaining_seconds, 300);
        assert!(app.timer.running);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_restores_defaults_and_stops() {
        let mut app = muted_app();
        app.handle_event(Action::FocusUp);
        app.handle_event(Action::BreakUp);
        app.handle_event(Action::ToggleRun);
        settle().await;

        app.handle_event(Action::Reset);
        assert_eq!(app.timer, TimerState::new());

        // No ticker survives the reset.
        tokio::time::advance(Duration::from_secs(2)).await;
        settle().await;
        app.poll_ticks();
        assert_eq!(app.timer.remaining_seconds, 1500);
    }

    #[tokio::test(start_paused = true)]
    async fn adjusters_do_nothing_while_running() {
        let mut app = muted_app();
        app.handle_event(Action::ToggleRun);
        settle().await;

        app.handle_event(Action::FocusUp);
        app.handle_event(Action::BreakDown);
        assert_eq!(app.timer.focus_minutes, 25);
        assert_eq!(app.timer.break_minutes, 5);
    }

    #[test]
    fn help_overlay_swallows_the_next_action() {
        let mut app = muted_app();
        app.handle_event(Action::Help);
        assert!(app.show_help);

        // Any action closes the overlay without reaching the timer.
        let quit = app.handle_event(Action::FocusUp);
        assert!(!quit);
        assert!(!app.show_help);
        assert_eq!(app.timer.focus_minutes, 25);
    }

    #[test]
    fn mute_toggle_reports_state() {
        let mut app = muted_app();
        app.handle_event(Action::ToggleMute);
        assert!(!app.alarm_muted());
        assert_eq!(app.status.as_deref(), Some("Alarm unmuted"));
    }
}
