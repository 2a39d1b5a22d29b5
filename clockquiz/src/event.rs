//! Event bus for clockquiz.
//!
//! All user input, render ticks, and deferred quiz advances are normalised into
//! a single `AppEvent` enum and sent over a tokio unbounded MPSC channel. The
//! main loop receives from this channel and dispatches accordingly.
//!
//! Three producers feed the channel:
//! - **Render interval** (33 ms ≈ 30 FPS): keeps the frame in sync with resizes.
//! - **Session observer**: posts an extra `Render` the moment quiz state changes.
//! - **Advance timers** (`timer.rs`): post `Advance(ticket)` when a delay elapses.

use clockquiz_core::AdvanceTicket;
use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::{FutureExt, StreamExt};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

/// All events the application can receive from any source.
#[derive(Debug)]
#[non_exhaustive]
pub enum AppEvent {
    /// A key press from the terminal (`KeyEventKind::Press` only).
    ///
    /// Release and repeat events are filtered in [`spawn_event_task`] to avoid
    /// double-firing on Windows, which synthesises both press and release for
    /// every keystroke.
    Key(KeyEvent),
    /// A mouse event from the terminal (click, scroll, move).
    Mouse(MouseEvent),
    /// Terminal was resized to (columns, rows).
    Resize(u16, u16),
    /// Triggers a `terminal.draw()` call.
    Render,
    /// The post-answer delay for this ticket has elapsed.
    Advance(AdvanceTicket),
    /// Quit signal.
    Quit,
}

/// Holds the sender and receiver ends of the unified event channel.
///
/// The sender (`tx`) is cloned and distributed to producers;
/// the receiver (`rx`) is owned by the main event loop.
pub struct EventHandler {
    /// Send half: clone this for each producer.
    pub tx: mpsc::UnboundedSender<AppEvent>,
    /// Receive half: owned by the main loop.
    pub rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    /// Creates a new `EventHandler` with a fresh unbounded channel.
    ///
    /// Producers run at a bounded hardware or timer rate and the main loop
    /// always keeps up, so the channel is unbounded.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawns the background tokio task that feeds terminal input and render ticks.
///
/// The task runs until the receiver is dropped; every send after that fails
/// and the task exits.
///
/// - `reader.next().fuse()`: required so that if the crossterm stream
///   terminates unexpectedly, `tokio::select!` does not keep polling a
///   completed future.
/// - `KeyEventKind::Press` filter: Windows fires both `Press` and `Release`
///   for every keystroke.
pub fn spawn_event_task(tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let mut render_interval = interval(Duration::from_millis(33));
        let mut reader = EventStream::new();

        loop {
            let render_tick = render_interval.tick();
            let crossterm_event = reader.next().fuse();

            let keep_going = tokio::select! {
                _ = render_tick => tx.send(AppEvent::Render).is_ok(),
                maybe_event = crossterm_event => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        tx.send(AppEvent::Key(key)).is_ok()
                    }
                    Some(Ok(Event::Resize(w, h))) => tx.send(AppEvent::Resize(w, h)).is_ok(),
                    Some(Ok(Event::Mouse(mouse))) => tx.send(AppEvent::Mouse(mouse)).is_ok(),
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event stream error");
                        true
                    }
                    // Input stream closed: nothing more can drive the quiz.
                    None => {
                        let _ = tx.send(AppEvent::Quit);
                        false
                    }
                    _ => true,
                },
            };
            if !keep_going {
                break;
            }
        }
    });
}
