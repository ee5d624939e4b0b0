//! Phase-transition alarm.
//!
//! Ringing shows a critical notification carrying the freedesktop
//! alarm sound hint and keeps the handle, so a reset can take the
//! alert down again.

use notify_rust::{Notification, NotificationHandle, Urgency};

use crate::timer::Phase;

/// Sound hint understood by freedesktop-compliant notification daemons.
const ALARM_SOUND: &str = "alarm-clock-elapsed";

/// Rings on phase transitions; silenceable and mutable.
pub struct Alarm {
    muted: bool,
    active: Option<NotificationHandle>,
}

impl Alarm {
    pub fn new(muted: bool) -> Self {
        Self {
            muted,
            active: None,
        }
    }

    /// Rings for the phase just entered. Failures are swallowed: the
    /// countdown must keep going without a notification daemon.
    pub fn ring(&mut self, entered: Phase) {
        self.silence();
        if self.muted {
            return;
        }
        let (summary, body) = match entered {
            Phase::Break => ("Focus complete", "Time for a break."),
            Phase::Focus => ("Break over", "Back to focus."),
        };
        self.active = Notification::new()
            .summary(summary)
            .body(body)
            .appname("pomotui")
            .icon("alarm-clock")
            .sound_name(ALARM_SOUND)
            .urgency(Urgency::Critical)
            .show()
            .ok();
    }

    /// Takes down the alert if one is still showing.
    pub fn silence(&mut self) {
        if let Some(handle) = self.active.take() {
            handle.close();
        }
    }

    /// Flips the mute flag, silencing anything currently ringing.
    /// Returns the new muted state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        if self.muted {
            self.silence();
        }
        self.muted
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}
