//! Deferred-advance scheduling capability.
//!
//! The session controller never sleeps or spawns. When a correct answer needs a
//! delayed transition it hands an [`AdvanceTicket`] to its [`Scheduler`]; the
//! host later feeds the ticket back through `QuizSession::advance` once the
//! delay has elapsed. The terminal app backs this with tokio timers; tests and
//! simulated-time hosts use [`ManualScheduler`].

use std::time::Duration;

/// Identity of one scheduled deferred advance.
///
/// Wraps the serial of the question that was answered, so a ticket from an
/// earlier question can never advance a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvanceTicket(pub(crate) u64);

impl AdvanceTicket {
    /// Serial number of the question this ticket was issued for.
    pub fn serial(self) -> u64 {
        self.0
    }
}

/// Schedules a one-shot callback after a duration; cancellable.
pub trait Scheduler {
    /// Arrange for `ticket` to be delivered back to the controller after `delay`.
    fn schedule(&mut self, delay: Duration, ticket: AdvanceTicket);

    /// Drop `ticket` if it has not fired yet. Unknown tickets are ignored.
    fn cancel(&mut self, ticket: AdvanceTicket);
}

/// Simulated-time scheduler. Time only moves when [`advance_by`] is called.
///
/// [`advance_by`]: ManualScheduler::advance_by
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    pending: Vec<(Duration, AdvanceTicket)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated time elapsed since construction.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tickets scheduled but not yet due.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Moves the clock forward by `step` and returns tickets that came due,
    /// earliest deadline first.
    pub fn advance_by(&mut self, step: Duration) -> Vec<AdvanceTicket> {
        self.now += step;
        let now = self.now;
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(deadline, _)| *deadline <= now);
        self.pending = rest;
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, ticket)| ticket).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, ticket: AdvanceTicket) {
        self.pending.push((self.now + delay, ticket));
    }

    fn cancel(&mut self, ticket: AdvanceTicket) {
        self.pending.retain(|(_, t)| *t != ticket);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_fires_only_once_deadline_reached() {
        let mut sched = ManualScheduler::new();
        sched.schedule(Duration::from_millis(2500), AdvanceTicket(1));

        assert!(sched.advance_by(Duration::from_millis(2499)).is_empty());
        assert_eq!(sched.advance_by(Duration::from_millis(1)), vec![AdvanceTicket(1)]);
        assert_eq!(sched.pending_len(), 0);
    }

    #[test]
    fn cancelled_ticket_never_fires() {
        let mut sched = ManualScheduler::new();
        sched.schedule(Duration::from_secs(1), AdvanceTicket(4));
        sched.cancel(AdvanceTicket(4));
        assert!(sched.advance_by(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn due_tickets_come_back_in_deadline_order() {
        let mut sched = ManualScheduler::new();
        sched.schedule(Duration::from_secs(3), AdvanceTicket(2));
        sched.schedule(Duration::from_secs(1), AdvanceTicket(1));
        assert_eq!(
            sched.advance_by(Duration::from_secs(5)),
            vec![AdvanceTicket(1), AdvanceTicket(2)]
        );
    }
}
