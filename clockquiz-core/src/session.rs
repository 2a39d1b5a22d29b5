//! Quiz session controller.
//!
//! Owns the current question, the feedback banner state, and the lockout flag
//! that is raised between a correct answer and the next question. All
//! transitions are synchronous except the deferred advance, which goes out
//! through the injected [`Scheduler`] and comes back via [`QuizSession::advance`].
//!
//! ```text
//! AwaitingFirstLoad ──initialize──▶ Active(q, none)
//! Active(q, _) ──wrong──▶ Active(q, incorrect)        (retry allowed)
//! Active(q, _) ──right──▶ Active(q, correct, locked)  (ticket scheduled)
//! Active(q, correct, locked) ──advance(ticket)──▶ Active(q', none)
//! ```
//!
//! Observers are notified synchronously after every accepted transition,
//! before the triggering call returns.

use std::time::Duration;

use rand::Rng;

use crate::generator::{build_options, pick_target_hour, DEFAULT_OPTION_COUNT};
use crate::hour::{Hour, HourNames};
use crate::scheduler::{AdvanceTicket, ManualScheduler, Scheduler};

/// Delay between a correct answer and the next question.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(2500);

/// Tunables for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    /// Options per question, including the correct one.
    pub option_count: usize,
    /// How long the success banner stays before the next question loads.
    pub advance_delay: Duration,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            option_count: DEFAULT_OPTION_COUNT,
            advance_delay: DEFAULT_ADVANCE_DELAY,
        }
    }
}

/// The hour currently shown on the clock and the choices offered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Strictly increasing per session; distinguishes questions whose target repeats.
    pub serial: u64,
    pub target: Hour,
    pub options: Vec<Hour>,
}

/// Outcome of the most recent accepted selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Feedback banner state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    /// `None` until the user answers the current question.
    pub verdict: Option<Verdict>,
    pub message: String,
    pub visible: bool,
}

/// Everything the view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub question: Question,
    pub feedback: Feedback,
    /// True between a correct answer and the deferred advance; blocks input.
    pub awaiting_advance: bool,
}

/// Result of [`QuizSession::select_option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Correct,
    Incorrect,
    /// Nothing changed: no question loaded yet, or the session is locked.
    Ignored,
}

/// Receives the new state after every accepted transition.
pub trait SessionObserver {
    fn on_change(&mut self, state: &SessionState);
}

impl<F: FnMut(&SessionState)> SessionObserver for F {
    fn on_change(&mut self, state: &SessionState) {
        self(state)
    }
}

/// The quiz state machine.
///
/// Generic over the deferred-advance [`Scheduler`] and the RNG so hosts and
/// tests can each supply their own.
pub struct QuizSession<S, R> {
    names: HourNames,
    settings: QuizSettings,
    scheduler: S,
    rng: R,
    state: Option<SessionState>,
    pending: Option<AdvanceTicket>,
    next_serial: u64,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl<S: Scheduler, R: Rng> QuizSession<S, R> {
    /// Creates a session in the awaiting-first-load state. Call
    /// [`initialize`](Self::initialize) to load the first question.
    pub fn new(names: HourNames, settings: QuizSettings, scheduler: S, rng: R) -> Self {
        Self {
            names,
            settings,
            scheduler,
            rng,
            state: None,
            pending: None,
            next_serial: 1,
            observers: Vec::new(),
        }
    }

    /// Registers an observer. It is not called retroactively.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Current state, or `None` before the first question is loaded.
    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    pub fn names(&self) -> &HourNames {
        &self.names
    }

    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// True while a correct answer is on screen and input is locked.
    pub fn is_locked(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.awaiting_advance)
    }

    /// Loads a fresh question and clears feedback.
    ///
    /// Any advance still pending from an earlier question is cancelled so it
    /// cannot fire against the new one.
    pub fn initialize(&mut self) {
        if let Some(ticket) = self.pending.take() {
            self.scheduler.cancel(ticket);
        }

        let target = pick_target_hour(&mut self.rng);
        let options = build_options(target, self.settings.option_count, &mut self.rng);
        let serial = self.next_serial;
        self.next_serial += 1;

        tracing::debug!(serial, target = target.value(), ?options, "new question");

        self.state = Some(SessionState {
            question: Question { serial, target, options },
            feedback: Feedback::default(),
            awaiting_advance: false,
        });
        self.notify();
    }

    /// Applies the user's choice.
    ///
    /// A correct choice locks the session and schedules the advance after
    /// `settings.advance_delay`. A wrong choice only updates the banner; the
    /// user may retry any number of times.
    pub fn select_option(&mut self, selected: Hour) -> Selection {
        let Some(state) = self.state.as_mut() else {
            return Selection::Ignored;
        };
        if state.awaiting_advance {
            tracing::trace!(selected = selected.value(), "selection ignored while locked");
            return Selection::Ignored;
        }

        let target = state.question.target;
        state.feedback.visible = true;

        let outcome = if selected == target {
            let ticket = AdvanceTicket(state.question.serial);
            state.feedback.verdict = Some(Verdict::Correct);
            state.feedback.message = format!(
                "Correct! It's {} o'clock! 🎉",
                self.names.display_name(target)
            );
            state.awaiting_advance = true;
            self.pending = Some(ticket);
            self.scheduler.schedule(self.settings.advance_delay, ticket);
            Selection::Correct
        } else {
            state.feedback.verdict = Some(Verdict::Incorrect);
            state.feedback.message = format!(
                "Not quite. That's {} o'clock. Try again! 🤔",
                self.names.display_name(selected)
            );
            Selection::Incorrect
        };

        tracing::debug!(
            selected = selected.value(),
            target = target.value(),
            ?outcome,
            "option selected"
        );
        self.notify();
        outcome
    }

    /// Manual "next question" control.
    ///
    /// Ignored while locked. Otherwise loads a new question immediately; this
    /// also serves as the first load. Returns whether a question was loaded.
    pub fn request_next(&mut self) -> bool {
        if self.is_locked() {
            return false;
        }
        self.initialize();
        true
    }

    /// Deferred-advance entry point, called by the host when `ticket` fires.
    ///
    /// Only the currently pending ticket has any effect; stale tickets from
    /// earlier questions return `false` and leave the state untouched.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> bool {
        if self.pending != Some(ticket) {
            tracing::debug!(serial = ticket.serial(), "stale advance ticket ignored");
            return false;
        }
        self.pending = None;
        self.initialize();
        true
    }

    fn notify(&mut self) {
        if let Some(state) = self.state.as_ref() {
            for observer in &mut self.observers {
                observer.on_change(state);
            }
        }
    }
}

impl<R: Rng> QuizSession<ManualScheduler, R> {
    /// Moves simulated time forward and fires every ticket that came due.
    ///
    /// Returns how many advances actually took effect.
    pub fn advance_time(&mut self, step: Duration) -> usize {
        let due = self.scheduler.advance_by(step);
        due.into_iter().filter(|&ticket| self.advance(ticket)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> QuizSession<ManualScheduler, StdRng> {
        QuizSession::new(
            HourNames::english(),
            QuizSettings::default(),
            ManualScheduler::new(),
            StdRng::seed_from_u64(1),
        )
    }

    #[test]
    fn selection_before_first_load_is_ignored() {
        let mut s = session();
        assert_eq!(s.select_option(Hour::new(1).unwrap()), Selection::Ignored);
        assert!(s.state().is_none());
    }

    #[test]
    fn initialize_resets_feedback_and_lock() {
        let mut s = session();
        s.initialize();
        let state = s.state().unwrap();
        assert_eq!(state.feedback, Feedback::default());
        assert!(!state.awaiting_advance);
        assert_eq!(state.question.options.len(), 3);
        assert!(state.question.options.contains(&state.question.target));
    }

    #[test]
    fn correct_message_names_target() {
        let mut s = session();
        s.initialize();
        let target = s.state().unwrap().question.target;
        s.select_option(target);
        let expected = format!(
            "Correct! It's {} o'clock! 🎉",
            HourNames::english().display_name(target)
        );
        assert_eq!(s.state().unwrap().feedback.message, expected);
    }

    #[test]
    fn wrong_message_names_selected_hour() {
        let mut s = session();
        s.initialize();
        let target = s.state().unwrap().question.target;
        let wrong = Hour::all().find(|&h| h != target).unwrap();
        s.select_option(wrong);
        let expected = format!(
            "Not quite. That's {} o'clock. Try again! 🤔",
            HourNames::english().display_name(wrong)
        );
        assert_eq!(s.state().unwrap().feedback.message, expected);
    }

    #[test]
    fn serials_increase_across_questions() {
        let mut s = session();
        s.initialize();
        let first = s.state().unwrap().question.serial;
        s.request_next();
        assert!(s.state().unwrap().question.serial > first);
    }
}
