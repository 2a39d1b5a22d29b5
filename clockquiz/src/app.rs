//! Central application state for clockquiz.
//!
//! Wraps the quiz session together with the purely visual state the terminal
//! needs on top of it: which option is highlighted for keyboard selection,
//! whether the help overlay is open, and the hit-test rectangles cached by the
//! last render for mouse clicks. No ratatui drawing happens here.

use clockquiz_core::{Hour, QuizSession, Selection};
use rand::rngs::StdRng;
use ratatui::layout::Rect;

use crate::timer::TokioScheduler;

/// The concrete session driven by the terminal app.
pub type Session = QuizSession<TokioScheduler, StdRng>;

/// Which keybinding set is active.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Answering questions (default).
    #[default]
    Normal,
    /// Full-screen help overlay is shown above the quiz.
    HelpOverlay,
}

/// All mutable UI state passed through every render cycle.
pub struct AppState {
    pub session: Session,
    pub mode: Mode,

    /// Index of the keyboard-highlighted option.
    highlight: usize,
    /// Question serial the highlight belongs to; a new question resets it.
    highlight_serial: u64,

    /// Vertical scroll offset of the help overlay.
    pub help_scroll: u16,

    /// Option button rects from the last render, in option order.
    pub option_rects: Vec<Rect>,
    /// "Next Time" button rect from the last render.
    pub next_rect: Rect,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            mode: Mode::default(),
            highlight: 0,
            highlight_serial: 0,
            help_scroll: 0,
            option_rects: Vec::new(),
            next_rect: Rect::default(),
        }
    }

    /// Options of the current question (empty before the first load).
    pub fn options(&self) -> &[Hour] {
        self.session
            .state()
            .map(|s| s.question.options.as_slice())
            .unwrap_or(&[])
    }

    /// Index of the highlighted option, reset to 0 whenever the question changes.
    pub fn highlighted(&self) -> usize {
        let current = self.session.state().map(|s| s.question.serial);
        if current == Some(self.highlight_serial) {
            self.highlight.min(self.options().len().saturating_sub(1))
        } else {
            0
        }
    }

    /// Moves the highlight by `delta`, wrapping around the option row.
    pub fn move_highlight(&mut self, delta: isize) {
        let len = self.options().len();
        if len == 0 {
            return;
        }
        let current = self.highlighted() as isize;
        self.highlight = (current + delta).rem_euclid(len as isize) as usize;
        if let Some(state) = self.session.state() {
            self.highlight_serial = state.question.serial;
        }
    }

    /// Selects the option at `index`; out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) -> Selection {
        let Some(&hour) = self.options().get(index) else {
            return Selection::Ignored;
        };
        let outcome = self.session.select_option(hour);
        if outcome != Selection::Ignored {
            self.highlight = index;
            if let Some(state) = self.session.state() {
                self.highlight_serial = state.question.serial;
            }
        }
        outcome
    }

    /// Selects the highlighted option.
    pub fn select_highlighted(&mut self) -> Selection {
        self.select_index(self.highlighted())
    }

    /// "Next Time" control. Ignored while waiting for the automatic advance.
    pub fn next_question(&mut self) -> bool {
        self.session.request_next()
    }
}
