//! Countdown state and transitions.
//!
//! `TimerState` is a plain value mutated through a small set of
//! operations; everything the UI shows is derived from it. The ticker
//! and the renderer both stay outside this module.

use crate::constants::timer::{
    DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES, MAX_LENGTH_MINUTES, MIN_LENGTH_MINUTES,
};

/// Which configured length currently governs the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Focus,
    Break,
}

impl Phase {
    /// Display name shown above the dial.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Focus => "Focus",
            Phase::Break => "Break",
        }
    }

    /// The phase entered when this one runs out.
    pub fn flipped(self) -> Phase {
        match self {
            Phase::Focus => Phase::Break,
            Phase::Break => Phase::Focus,
        }
    }
}

/// What a single tick did to the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second was consumed.
    Counted,
    /// The countdown was already at zero; the phase flipped and the
    /// clock was reloaded. Carries the phase that was entered.
    Transitioned(Phase),
}

/// The complete timer state: two bounded lengths, the countdown, the
/// current phase, and the running flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub break_minutes: u16,
    pub focus_minutes: u16,
    pub remaining_seconds: u32,
    pub phase: Phase,
    pub running: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerState {
    /// Creates the startup state: 25 minutes of Focus on the clock,
    /// stopped.
    pub fn new() -> Self {
        Self {
            break_minutes: DEFAULT_BREAK_MINUTES,
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            remaining_seconds: u32::from(DEFAULT_FOCUS_MINUTES) * 60,
            phase: Phase::Focus,
            running: false,
        }
    }

    /// Creates a state with overridden phase lengths (out-of-range
    /// values are clamped to the configurable bounds). Used for CLI
    /// overrides at startup.
    pub fn with_lengths(focus_minutes: u16, break_minutes: u16) -> Self {
        let focus = focus_minutes.clamp(MIN_LENGTH_MINUTES, MAX_LENGTH_MINUTES);
        let brk = break_minutes.clamp(MIN_LENGTH_MINUTES, MAX_LENGTH_MINUTES);
        Self {
            break_minutes: brk,
            focus_minutes: focus,
            remaining_seconds: u32::from(focus) * 60,
            phase: Phase::Focus,
            running: false,
        }
    }

    /// Adjusts the break length by `delta` minutes. A no-op while
    /// running or when the result would leave [1,60]. Returns whether
    /// the state changed.
    pub fn adjust_break(&mut self, delta: i32) -> bool {
        if self.running {
            return false;
        }
        let next = i32::from(self.break_minutes) + delta;
        if !(i32::from(MIN_LENGTH_MINUTES)..=i32::from(MAX_LENGTH_MINUTES)).contains(&next) {
            return false;
        }
        self.break_minutes = next as u16;
        if self.phase == Phase::Break {
            // Shrinking the break below what is left would let the
            // countdown exceed the configured length.
            self.remaining_seconds = self.remaining_seconds.min(self.phase_length_seconds());
        }
        true
    }

    /// Adjusts the focus length by `delta` minutes, under the same
    /// guards as [`adjust_break`](Self::adjust_break). While the phase
    /// is Focus, the countdown is reloaded to the new length so a fresh
    /// duration can be dialed in before starting.
    pub fn adjust_focus(&mut self, delta: i32) -> bool {
        if self.running {
            return false;
        }
        let next = i32::from(self.focus_minutes) + delta;
        if !(i32::from(MIN_LENGTH_MINUTES)..=i32::from(MAX_LENGTH_MINUTES)).contains(&next) {
            return false;
        }
        self.focus_minutes = next as u16;
        if self.phase == Phase::Focus {
            self.remaining_seconds = self.phase_length_seconds();
        }
        true
    }

    /// Flips the running flag. Starting at 00:00 is allowed; the next
    /// tick performs the phase flip.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Restores the startup state unconditionally.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Consumes one tick: counts a second down, or flips the phase when
    /// the countdown has already reached zero. The entered phase's
    /// length is read at this moment, so the latest settings win.
    pub fn tick(&mut self) -> TickOutcome {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
            TickOutcome::Counted
        } else {
            self.phase = self.phase.flipped();
            self.remaining_seconds = self.phase_length_seconds();
            TickOutcome::Transitioned(self.phase)
        }
    }

    /// Configured length of the current phase, in minutes.
    pub fn phase_length_minutes(&self) -> u16 {
        match self.phase {
            Phase::Focus => self.focus_minutes,
            Phase::Break => self.break_minutes,
        }
    }

    /// Configured length of the current phase, in seconds.
    pub fn phase_length_seconds(&self) -> u32 {
        u32::from(self.phase_length_minutes()) * 60
    }

    /// Portion of the current phase still on the clock, in [0,1].
    pub fn fraction_remaining(&self) -> f64 {
        f64::from(self.remaining_seconds) / f64::from(self.phase_length_seconds())
    }

    /// The countdown rendered as `MM:SS`.
    pub fn formatted(&self) -> String {
        format_time(self.remaining_seconds)
    }
}

/// Formats a second count as zero-padded `MM:SS`.
pub fn format_time(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> TimerState {
        TimerState::new()
    }

    #[test]
    fn startup_state() {
        let state = defaults();
        assert_eq!(state.break_minutes, 5);
        assert_eq!(state.focus_minutes, 25);
        assert_eq!(state.remaining_seconds, 1500);
        assert_eq!(state.phase, Phase::Focus);
        assert!(!state.running);
    }

    #[test]
    fn lengths_stay_within_bounds_under_any_adjust_sequence() {
        let mut state = defaults();
        // Hammer both adjusters well past the bounds in each direction.
        for _ in 0..100 {
            state.adjust_break(1);
            state.adjust_focus(1);
        }
        assert_eq!(state.break_minutes, 60);
        assert_eq!(state.focus_minutes, 60);

        for _ in 0..200 {
            state.adjust_break(-1);
            state.adjust_focus(-1);
        }
        assert_eq!(state.break_minutes, 1);
        assert_eq!(state.focus_minutes, 1);
    }

    #[test]
    fn out_of_range_adjustment_is_rejected_whole() {
        let mut state = defaults();
        state.break_minutes = 60;
        assert!(!state.adjust_break(1));
        assert_eq!(state.break_minutes, 60);

        state.focus_minutes = 1;
        assert!(!state.adjust_focus(-1));
        assert_eq!(state.focus_minutes, 1);
    }

    #[test]
    fn adjusters_are_noops_while_running() {
        let mut state = defaults();
        state.toggle_running();

        assert!(!state.adjust_break(1));
        assert!(!state.adjust_focus(-1));
        assert_eq!(state.break_minutes, 5);
        assert_eq!(state.focus_minutes, 25);
        assert_eq!(state.remaining_seconds, 1500);
    }

    #[test]
    fn focus_adjustment_reloads_countdown_during_focus_phase() {
        let mut state = defaults();
        for _ in 0..5 {
            assert!(state.adjust_focus(1));
        }
        assert_eq!(state.focus_minutes, 30);
        assert_eq!(state.remaining_seconds, 1800);
    }

    #[test]
    fn focus_adjustment_leaves_countdown_alone_during_break_phase() {
        let mut state = defaults();
        state.phase = Phase::Break;
        state.remaining_seconds = 300;

        assert!(state.adjust_focus(1));
        assert_eq!(state.focus_minutes, 26);
        assert_eq!(state.remaining_seconds, 300);
    }

    #[test]
    fn break_adjustment_clamps_countdown_during_break_phase() {
        let mut state = defaults();
        state.phase = Phase::Break;
        state.remaining_seconds = 300;

        assert!(state.adjust_break(-1));
        assert_eq!(state.break_minutes, 4);
        assert_eq!(state.remaining_seconds, 240);

        // Raising the length never raises what is left.
        assert!(state.adjust_break(2));
        assert_eq!(state.break_minutes, 6);
        assert_eq!(state.remaining_seconds, 240);
    }

    #[test]
    fn reset_restores_defaults_from_any_state() {
        let mut state = defaults();
        state.adjust_focus(5);
        state.adjust_break(3);
        state.toggle_running();
        state.phase = Phase::Break;
        state.remaining_seconds = 17;

        state.reset();
        assert_eq!(state, defaults());
    }

    #[test]
    fn full_focus_phase_flips_to_break_once() {
        let mut state = defaults();
        state.toggle_running();

        let mut transitions = 0;
        for _ in 0..1500 {
            if let TickOutcome::Transitioned(_) = state.tick() {
                transitions += 1;
            }
        }
        // 1500 decrements bring the clock to zero; the flip happens on
        // the tick that fires at zero.
        assert_eq!(transitions, 0);
        assert_eq!(state.remaining_seconds, 0);
        assert_eq!(state.phase, Phase::Focus);

        assert_eq!(state.tick(), TickOutcome::Transitioned(Phase::Break));
        assert_eq!(state.phase, Phase::Break);
        assert_eq!(state.remaining_seconds, u32::from(state.break_minutes) * 60);
    }

    #[test]
    fn transition_reads_lengths_at_flip_time() {
        let mut state = defaults();
        state.remaining_seconds = 0;
        // Dial in a new break length after the clock hit zero but
        // before the flipping tick fires.
        state.adjust_break(3);
        state.toggle_running();

        assert_eq!(state.tick(), TickOutcome::Transitioned(Phase::Break));
        assert_eq!(state.remaining_seconds, 8 * 60);
    }

    #[test]
    fn starting_at_zero_takes_one_tick_to_flip() {
        let mut state = defaults();
        state.remaining_seconds = 0;
        state.toggle_running();
        assert!(state.running);

        assert_eq!(state.tick(), TickOutcome::Transitioned(Phase::Break));
    }

    #[test]
    fn break_runs_out_back_into_focus() {
        let mut state = defaults();
        state.phase = Phase::Break;
        state.remaining_seconds = 0;

        assert_eq!(state.tick(), TickOutcome::Transitioned(Phase::Focus));
        assert_eq!(state.remaining_seconds, 1500);
    }

    #[test]
    fn with_lengths_clamps_and_loads_focus() {
        let state = TimerState::with_lengths(90, 0);
        assert_eq!(state.focus_minutes, 60);
        assert_eq!(state.break_minutes, 1);
        assert_eq!(state.remaining_seconds, 3600);
        assert_eq!(state.phase, Phase::Focus);
    }

    #[test]
    fn format_time_zero_pads() {
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(3599), "59:59");
        assert_eq!(format_time(1500), "25:00");
    }

    #[test]
    fn fraction_remaining_spans_full_phase() {
        let state = defaults();
        assert_eq!(state.fraction_remaining(), 1.0);

        let mut state = defaults();
        state.remaining_seconds = 0;
        assert_eq!(state.fraction_remaining(), 0.0);

        let mut state = defaults();
        state.remaining_seconds = 750;
        assert_eq!(state.fraction_remaining(), 0.5);
    }
}
