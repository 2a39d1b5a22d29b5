//! Keybinding dispatcher for clockquiz.
//!
//! Translates raw crossterm key and mouse events into `AppState` mutations and
//! returns a `KeyAction` telling the event loop whether to continue or quit.
//! The dispatcher branches first on `state.mode` so Normal and HelpOverlay have
//! isolated handler functions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::app::{AppState, Mode};

/// Control-flow signal returned from the key dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Continue the event loop normally.
    Continue,
    /// Exit cleanly.
    Quit,
}

/// Dispatches a key event to the handler matching the current mode.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match state.mode {
        Mode::HelpOverlay => handle_help(key, state),
        Mode::Normal => handle_normal(key, state),
    }
}

// ---------------------------------------------------------------------------
// Normal mode
// ---------------------------------------------------------------------------

/// Handles a key event while answering.
///
/// Selection keys go through `AppState`, which forwards to the session; the
/// session itself ignores them while a correct answer is on screen.
fn handle_normal(key: KeyEvent, state: &mut AppState) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => KeyAction::Quit,

        KeyCode::Char(digit @ '1'..='9') => {
            let index = (digit as u8 - b'1') as usize;
            state.select_index(index);
            KeyAction::Continue
        }

        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
            state.move_highlight(-1);
            KeyAction::Continue
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
            state.move_highlight(1);
            KeyAction::Continue
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.select_highlighted();
            KeyAction::Continue
        }

        KeyCode::Char('n') | KeyCode::Char('N') => {
            state.next_question();
            KeyAction::Continue
        }

        KeyCode::Char('?') => {
            state.help_scroll = 0;
            state.mode = Mode::HelpOverlay;
            KeyAction::Continue
        }

        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

        _ => KeyAction::Continue,
    }
}

// ---------------------------------------------------------------------------
// HelpOverlay mode
// ---------------------------------------------------------------------------

/// Handles a key event while the help overlay is visible.
///
/// Any of `?`, `Esc`, or `q` dismisses the overlay and returns to Normal mode.
fn handle_help(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            state.help_scroll = state.help_scroll.saturating_add(1);
            KeyAction::Continue
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.help_scroll = state.help_scroll.saturating_sub(1);
            KeyAction::Continue
        }
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            state.mode = Mode::Normal;
            KeyAction::Continue
        }
        _ => KeyAction::Continue,
    }
}

// ---------------------------------------------------------------------------
// Mouse events
// ---------------------------------------------------------------------------

/// Handles a mouse event: left click on an option or the Next button.
///
/// Hit-testing uses the rects cached by the previous render. Clicks are
/// ignored while the help overlay is open.
pub fn handle_mouse(mouse: MouseEvent, state: &mut AppState) -> KeyAction {
    if state.mode != Mode::Normal {
        return KeyAction::Continue;
    }
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let pos = Position { x: mouse.column, y: mouse.row };
        if let Some(index) = state.option_rects.iter().position(|r| r.contains(pos)) {
            state.select_index(index);
        } else if state.next_rect.contains(pos) {
            state.next_question();
        }
    }
    KeyAction::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::AppEvent;
    use crate::timer::TokioScheduler;
    use clockquiz_core::{HourNames, QuizSession, QuizSettings, Verdict};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::layout::Rect;
    use tokio::sync::mpsc;

    fn app() -> (AppState, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut session = QuizSession::new(
            HourNames::english(),
            QuizSettings::default(),
            TokioScheduler::new(tx),
            StdRng::seed_from_u64(9),
        );
        session.initialize();
        (AppState::new(session), rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn digit_for_target(state: &AppState) -> char {
        let s = state.session.state().unwrap();
        let index = s.question.options.iter().position(|&h| h == s.question.target).unwrap();
        char::from(b'1' + index as u8)
    }

    fn digit_for_wrong(state: &AppState) -> char {
        let s = state.session.state().unwrap();
        let index = s.question.options.iter().position(|&h| h != s.question.target).unwrap();
        char::from(b'1' + index as u8)
    }

    #[tokio::test]
    async fn digit_selects_matching_option() {
        let (mut state, _rx) = app();
        let wrong = digit_for_wrong(&state);
        assert_eq!(handle_key(press(KeyCode::Char(wrong)), &mut state), KeyAction::Continue);
        assert_eq!(
            state.session.state().unwrap().feedback.verdict,
            Some(Verdict::Incorrect)
        );

        let right = digit_for_target(&state);
        handle_key(press(KeyCode::Char(right)), &mut state);
        assert!(state.session.is_locked());
    }

    #[tokio::test]
    async fn keys_are_inert_while_locked() {
        let (mut state, _rx) = app();
        let right = digit_for_target(&state);
        handle_key(press(KeyCode::Char(right)), &mut state);
        let locked = state.session.state().unwrap().clone();

        let wrong = digit_for_wrong(&state);
        handle_key(press(KeyCode::Char(wrong)), &mut state);
        handle_key(press(KeyCode::Char('n')), &mut state);
        handle_key(press(KeyCode::Enter), &mut state);
        assert_eq!(state.session.state().unwrap(), &locked);
    }

    #[tokio::test]
    async fn arrows_wrap_and_enter_selects_highlight() {
        let (mut state, _rx) = app();
        assert_eq!(state.highlighted(), 0);
        handle_key(press(KeyCode::Left), &mut state);
        assert_eq!(state.highlighted(), 2);
        handle_key(press(KeyCode::Right), &mut state);
        assert_eq!(state.highlighted(), 0);

        let target_index = (digit_for_target(&state) as u8 - b'1') as usize;
        for _ in 0..target_index {
            handle_key(press(KeyCode::Tab), &mut state);
        }
        handle_key(press(KeyCode::Enter), &mut state);
        assert_eq!(
            state.session.state().unwrap().feedback.verdict,
            Some(Verdict::Correct)
        );
    }

    #[tokio::test]
    async fn n_skips_to_a_new_question() {
        let (mut state, _rx) = app();
        let serial = state.session.state().unwrap().question.serial;
        handle_key(press(KeyCode::Char('n')), &mut state);
        assert!(state.session.state().unwrap().question.serial > serial);
    }

    #[tokio::test]
    async fn help_overlay_swallows_quiz_keys() {
        let (mut state, _rx) = app();
        handle_key(press(KeyCode::Char('?')), &mut state);
        assert_eq!(state.mode, Mode::HelpOverlay);

        let serial = state.session.state().unwrap().question.serial;
        handle_key(press(KeyCode::Char('n')), &mut state);
        assert_eq!(state.session.state().unwrap().question.serial, serial);
        assert_eq!(handle_key(press(KeyCode::Char('q')), &mut state), KeyAction::Continue);
        assert_eq!(state.mode, Mode::Normal);
    }

    #[tokio::test]
    async fn q_and_esc_quit() {
        let (mut state, _rx) = app();
        assert_eq!(handle_key(press(KeyCode::Char('q')), &mut state), KeyAction::Quit);
        assert_eq!(handle_key(press(KeyCode::Esc), &mut state), KeyAction::Quit);
    }

    #[tokio::test]
    async fn click_on_cached_rect_selects_option() {
        let (mut state, _rx) = app();
        state.option_rects = vec![
            Rect::new(0, 0, 10, 3),
            Rect::new(11, 0, 10, 3),
            Rect::new(22, 0, 10, 3),
        ];
        let index = (digit_for_target(&state) as u8 - b'1') as u16;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: index * 11 + 2,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(click, &mut state);
        assert!(state.session.is_locked());
    }
}
