//! Core logic for the clockquiz "what time is it?" quiz.
//!
//! Nothing in this crate touches the terminal. The binary crate renders
//! [`session::SessionState`] and feeds user intent back into
//! [`session::QuizSession`].

pub mod generator;
pub mod geometry;
pub mod hour;
pub mod scheduler;
pub mod session;

pub use hour::{Hour, HourNames};
pub use scheduler::{AdvanceTicket, ManualScheduler, Scheduler};
pub use session::{
    Feedback, QuizSession, QuizSettings, Question, Selection, SessionObserver, SessionState,
    Verdict,
};
