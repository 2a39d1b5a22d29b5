//! UI rendering module for clockquiz.
//!
//! This is the module root for `ui/`. It exposes `render()` as the single entry
//! point called by the event loop's `terminal.draw()` closure.
//!
//! Layout arithmetic lives in `layout.rs`, the clock face in `clock_face.rs`,
//! and the option/feedback/next controls in `controls.rs`.

pub mod clock_face;
pub mod controls;
pub mod help;
pub mod keybindings;
mod layout;

use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{AppState, Mode};
use crate::theme::Theme;
use layout::{compute_layout, render_status_bar, square_cells};

/// Heading shown above the clock.
pub const TITLE: &str = "What time is it?";

/// Renders one complete frame: title, clock, options, feedback, next button,
/// status bar, and (when open) the help overlay.
///
/// Called exactly once per `AppEvent::Render` inside `terminal.draw()`. Button
/// rects are written back into `state` so the *next* mouse click can be
/// hit-tested against what is currently on screen.
pub fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        frame.area(),
    );
    let areas = compute_layout(frame.area());

    frame.render_widget(
        Paragraph::new(TITLE)
            .style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD))
            .centered(),
        areas.title,
    );

    // Before the first question loads there is nothing to draw but chrome.
    if let Some(session) = state.session.state() {
        let hour = session.question.target.value();
        clock_face::render_clock(frame, square_cells(areas.clock), hour, 0, theme);
        controls::render_feedback(frame, areas.feedback, &session.feedback, theme);
    }
    controls::render_options(frame, areas.options, state, theme);
    controls::render_next_button(frame, areas.next, state, theme);

    render_status_bar(frame, areas.status_bar, state, theme);

    // Help overlay: rendered last so it sits on top.
    if state.mode == Mode::HelpOverlay {
        help::render_help_overlay(frame, theme, state.help_scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::AppEvent;
    use crate::timer::TokioScheduler;
    use clockquiz_core::{HourNames, QuizSession, QuizSettings};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tokio::sync::mpsc;

    fn app() -> (AppState, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut session = QuizSession::new(
            HourNames::english(),
            QuizSettings::default(),
            TokioScheduler::new(tx),
            StdRng::seed_from_u64(17),
        );
        session.initialize();
        (AppState::new(session), rx)
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn frame_shows_title_options_and_next_button() {
        let (mut state, _rx) = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, &mut state, &Theme::dark())).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains(TITLE));
        assert!(text.contains("Next Time"));
        let names = HourNames::english();
        for &hour in state.options() {
            let label = format!("{} o'clock", names.display_name(hour));
            assert!(text.contains(&label), "missing {label}");
        }
        assert_eq!(state.option_rects.len(), 3);
        assert!(state.next_rect.width > 0);
    }

    #[tokio::test]
    async fn feedback_banner_appears_after_answer() {
        let (mut state, _rx) = app();
        let wrong = {
            let s = state.session.state().unwrap();
            s.question.options.iter().position(|&h| h != s.question.target).unwrap()
        };
        state.select_index(wrong);

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, &mut state, &Theme::dark())).unwrap();
        assert!(screen_text(&terminal).contains("Not quite."));
    }

    #[tokio::test]
    async fn tiny_terminal_does_not_panic() {
        let (mut state, _rx) = app();
        state.mode = Mode::HelpOverlay;
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        terminal.draw(|frame| render(frame, &mut state, &Theme::dark())).unwrap();
    }
}
