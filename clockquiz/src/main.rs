//! clockquiz: "What time is it?" analog clock quiz for the terminal.
//!
//! Entry point for the `clockquiz` binary. Wires together configuration
//! (`config`), file logging (`logging`), the terminal lifecycle (`tui`), the
//! unified event bus (`event`), the tokio-backed advance timer (`timer`), and
//! the quiz session from `clockquiz-core`.
//!
//! # Startup sequence
//!
//! 1. Load config. Read-only, safe before terminal init. Errors fall back to
//!    defaults.
//! 2. Start file logging if `log_file` is configured.
//! 3. `install_panic_hook()`: restores the terminal before the panic message.
//! 4. `register_sigterm()`: flag polled in the event loop heartbeat.
//! 5. `init_tui()`: enters alternate screen and enables raw mode.
//! 6. Create the event channel, build the session, load the first question.
//!
//! `restore_tui()` is called after the event loop exits (quit key, SIGTERM,
//! or channel close). Inside the loop `?` is only used on `terminal.draw()`,
//! and that error is carried out of the loop so the terminal is restored first.

mod app;
mod config;
mod event;
mod logging;
mod theme;
mod timer;
mod tui;
mod ui;

use std::sync::atomic::Ordering;

use clockquiz_core::{QuizSession, SessionState};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::event::AppEvent;
use crate::ui::keybindings::{handle_key, handle_mouse, KeyAction};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Step 1: config. Soft failures, printed before the terminal is taken over.
    let path = config::config_path();
    let (config, config_error) = match config::load_config(&path) {
        Ok(c) => (c, None),
        Err(e) => {
            eprintln!("clockquiz: {e}; using defaults");
            (config::Config::default(), Some(e))
        }
    };

    // Step 2: logging goes to a file or nowhere; stderr belongs to the TUI.
    if let Err(e) = logging::init_logging(config.log_file.as_deref()) {
        eprintln!("clockquiz: could not start logging: {e}");
    }
    if let Some(e) = config_error {
        tracing::warn!(error = %e, path = ?path, "config ignored");
    }
    tracing::info!(?config, "starting");

    let theme = theme::Theme::from_name(&config.theme);
    let names = config.resolve_hour_names().unwrap_or_default();
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Step 3: panic hook installed first; the innermost hook restores terminal.
    tui::install_panic_hook();

    // Step 4: SIGTERM flag, polled in the 50ms heartbeat arm below.
    let term_flag = tui::register_sigterm()?;

    // Step 5: enter alternate screen and raw mode.
    let mut terminal = tui::init_tui()?;

    // Step 6: event channel, input task, and the session wired to both.
    let handler = event::EventHandler::new();
    event::spawn_event_task(handler.tx.clone());
    let mut rx = handler.rx;

    let mut session = QuizSession::new(
        names,
        config.quiz_settings(),
        timer::TokioScheduler::new(handler.tx.clone()),
        rng,
    );
    let render_tx = handler.tx.clone();
    session.subscribe(move |_: &SessionState| {
        let _ = render_tx.send(AppEvent::Render);
    });
    session.initialize();
    let mut state = app::AppState::new(session);

    // Event loop. Exits only via `break`, never via `?`.
    let result: std::io::Result<()> = 'event_loop: loop {
        tokio::select! {
            // Heartbeat: guarantees SIGTERM is checked at least every 50ms.
            _ = tokio::time::sleep(std::time::Duration::from_millis(50)) => {}
            maybe_event = rx.recv() => {
                match maybe_event {
                    Some(AppEvent::Render) => {
                        // Exactly one draw() call per Render event, never elsewhere.
                        if let Err(e) = terminal.draw(|frame| ui::render(frame, &mut state, &theme)) {
                            break 'event_loop Err(e);
                        }
                    }
                    Some(AppEvent::Key(key)) => {
                        if handle_key(key, &mut state) == KeyAction::Quit {
                            break 'event_loop Ok(());
                        }
                        let _ = handler.tx.send(AppEvent::Render);
                    }
                    Some(AppEvent::Mouse(mouse)) => {
                        if handle_mouse(mouse, &mut state) == KeyAction::Quit {
                            break 'event_loop Ok(());
                        }
                    }
                    Some(AppEvent::Advance(ticket)) => {
                        state.session.advance(ticket);
                    }
                    Some(AppEvent::Resize(_, _)) => {
                        // frame.area() picks up the new size on the next Render.
                    }
                    Some(AppEvent::Quit) | None => break 'event_loop Ok(()),
                }
            }
        }
        if term_flag.load(Ordering::Relaxed) {
            tracing::info!("SIGTERM received");
            break 'event_loop Ok(());
        }
    };

    // Restore the terminal at the single exit point of the loop.
    tui::restore_tui()?;
    tracing::info!(
        pending_timers = state.session.scheduler().active_timers(),
        "exiting"
    );
    result
}
