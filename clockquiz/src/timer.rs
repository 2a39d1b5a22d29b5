//! Tokio-backed implementation of the core `Scheduler` capability.
//!
//! Each scheduled ticket becomes a spawned task that sleeps for the delay and
//! then posts `AppEvent::Advance(ticket)` onto the event bus. The main loop
//! hands that ticket back to `QuizSession::advance`, so the transition runs on
//! the same loop as every other state change. Cancelling aborts the task.

use std::collections::HashMap;
use std::time::Duration;

use clockquiz_core::{AdvanceTicket, Scheduler};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::event::AppEvent;

/// Schedules deferred advances as tokio sleep tasks.
///
/// Must be used from inside a tokio runtime: `schedule` calls `tokio::spawn`.
pub struct TokioScheduler {
    tx: UnboundedSender<AppEvent>,
    timers: HashMap<AdvanceTicket, JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new(tx: UnboundedSender<AppEvent>) -> Self {
        Self { tx, timers: HashMap::new() }
    }

    /// Number of timers that have not fired or been cancelled.
    pub fn active_timers(&self) -> usize {
        self.timers.values().filter(|h| !h.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration, ticket: AdvanceTicket) {
        self.timers.retain(|_, handle| !handle.is_finished());

        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(AppEvent::Advance(ticket));
        });
        if let Some(previous) = self.timers.insert(ticket, handle) {
            previous.abort();
        }
    }

    fn cancel(&mut self, ticket: AdvanceTicket) {
        if let Some(handle) = self.timers.remove(&ticket) {
            handle.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clockquiz_core::{HourNames, QuizSession, QuizSettings, Selection};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tokio::sync::mpsc;
    use tokio::time::Instant;

    fn session(
        tx: UnboundedSender<AppEvent>,
    ) -> QuizSession<TokioScheduler, StdRng> {
        let mut session = QuizSession::new(
            HourNames::english(),
            QuizSettings::default(),
            TokioScheduler::new(tx),
            StdRng::seed_from_u64(21),
        );
        session.initialize();
        session
    }

    #[tokio::test(start_paused = true)]
    async fn advance_event_arrives_after_configured_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = session(tx);
        let target = session.state().unwrap().question.target;
        let serial = session.state().unwrap().question.serial;

        let start = Instant::now();
        assert_eq!(session.select_option(target), Selection::Correct);
        // Let the timer task start its sleep before moving the clock.
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(2400)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err(), "fired before the delay elapsed");

        let ticket = match rx.recv().await {
            Some(AppEvent::Advance(ticket)) => ticket,
            other => panic!("expected Advance, got {other:?}"),
        };
        assert!(start.elapsed() >= Duration::from_millis(2500));
        assert_eq!(ticket.serial(), serial);

        assert!(session.advance(ticket));
        assert!(!session.is_locked());
        assert_eq!(session.scheduler().active_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn reload_cancels_pending_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = session(tx);
        let target = session.state().unwrap().question.target;
        session.select_option(target);
        assert_eq!(session.scheduler().active_timers(), 1);

        session.initialize();
        tokio::time::advance(Duration::from_secs(10)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
        assert_eq!(session.scheduler().active_timers(), 0);
    }
}
