//! The 1-second tick source.
//!
//! A background tokio task owns the interval and signals each firing
//! over a channel; all timer state stays on the UI side. Restarting
//! replaces both the task and the channel, so a tick that fired while
//! the state was changing can never be consumed afterwards.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::constants::TICK_INTERVAL;

/// Cancellable 1-second cadence.
pub struct Ticker {
    task: Option<JoinHandle<()>>,
    ticks: Option<mpsc::UnboundedReceiver<()>>,
}

impl Ticker {
    /// Creates an inactive ticker.
    pub fn new() -> Self {
        Self {
            task: None,
            ticks: None,
        }
    }

    /// Cancels any scheduled firing and begins a fresh cadence; the
    /// first tick arrives one full interval from now.
    pub fn restart(&mut self) {
        self.stop();
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(async move {
            let mut interval = time::interval(TICK_INTERVAL);
            // A stalled redraw must not be repaid with a burst of
            // catch-up ticks.
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The interval's first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    break;
                }
            }
        });
        self.task = Some(task);
        self.ticks = Some(rx);
    }

    /// Stops the cadence and discards any tick that fired but was not
    /// yet consumed.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.ticks = None;
    }

    /// Consumes one pending tick, if any.
    pub fn try_tick(&mut self) -> bool {
        match self.ticks.as_mut() {
            Some(rx) => rx.try_recv().is_ok(),
            None => false,
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    async fn settle() {
        // Give the spawned task a chance to run on the current-thread
        // test runtime.
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn delivers_one_tick_per_second() {
        let mut ticker = Ticker::new();
        ticker.restart();
        settle().await;

        for _ in 0..3 {
            tokio::time::advance(Duration::from_secs(1)).await;
            settle().await;
        }

        let mut seen = 0;
        while ticker.try_tick() {
            seen += 1;
        }
        assert_eq!(seen, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn no_tick_before_the_first_interval_elapses() {
        let mut ticker = Ticker::new();
        ticker.restart();
        settle().await;

        tokio::time::advance(Duration::from_millis(900)).await;
        settle().await;
        assert!(!ticker.try_tick());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_discards_a_pending_tick() {
        let mut ticker = Ticker::new();
        ticker.restart();
        settle().await;

        tokio::time::advance(Duration::from_secs(1)).await;
        settle().await;

        ticker.stop();
        assert!(!ticker.try_tick());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_begins_a_fresh_cadence() {
        let mut ticker = Ticker::new();
        ticker.restart();
        settle().await;

        tokio::time::advance(Duration::from_secs(1)).await;
        settle().await;

        // The queued tick dies with the old channel.
        ticker.restart();
        settle().await;
        assert!(!ticker.try_tick());

        tokio::time::advance(Duration::from_secs(1)).await;
        settle().await;
        assert!(ticker.try_tick());
    }

    #[tokio::test]
    async fn inactive_ticker_yields_nothing() {
        let mut ticker = Ticker::new();
        assert!(!ticker.try_tick());
        ticker.stop();
        assert!(!ticker.try_tick());
    }
}
