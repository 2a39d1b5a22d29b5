//! Screen layout for clockquiz.
//!
//! Pure layout arithmetic; no mutable application state lives here. Called
//! inside `terminal.draw()` on every render so every frame reflects the current
//! terminal size.
//!
//! ```text
//! ┌──────────── title ────────────┐
//! │            clock              │  Fill
//! │   [ opt ] [ opt ] [ opt ]     │  3 rows
//! │         feedback banner       │  3 rows
//! │         [ Next Time ]         │  3 rows
//! └──────────── status ───────────┘  1 row
//! ```

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::theme::Theme;

/// Rects for each region of the quiz screen.
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub title: Rect,
    pub clock: Rect,
    pub options: Rect,
    pub feedback: Rect,
    pub next: Rect,
    pub status_bar: Rect,
}

/// Splits the frame into the quiz regions.
///
/// The rects are valid only for the current draw closure; never store them
/// across frames (the option and next-button rects cached in `AppState` are
/// refreshed every render for exactly this reason).
pub fn compute_layout(area: Rect) -> ScreenAreas {
    let [title, clock, options, feedback, next, status_bar] = area.layout(&Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ]));
    ScreenAreas { title, clock, options, feedback, next, status_bar }
}

/// Largest centred rect inside `area` that looks square on screen.
///
/// Terminal cells are roughly twice as tall as they are wide, so a visually
/// round clock needs twice as many columns as rows.
pub fn square_cells(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height.saturating_mul(2);
    let [row] = area.layout(&Layout::vertical([Constraint::Length(height)]).flex(Flex::Center));
    let [cell] = row.layout(&Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center));
    cell
}

/// Builds a bordered button `Block`.
///
/// Highlighted buttons get a thick border in `border_active`; disabled buttons
/// are dimmed regardless of highlight.
pub fn button_block<'a>(
    title: &'a str,
    highlighted: bool,
    disabled: bool,
    theme: &Theme,
) -> Block<'a> {
    let color = if disabled {
        theme.button_disabled
    } else if highlighted {
        theme.border_active
    } else {
        theme.border_inactive
    };
    let border_type = if highlighted && !disabled {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };
    Block::bordered()
        .title(title)
        .border_type(border_type)
        .border_style(Style::default().fg(color))
}

/// Renders the 1-row status bar with a mode badge and key hints.
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let (badge, badge_fg) = if state.session.is_locked() {
        (" NEXT QUESTION… ", theme.status_mode_locked)
    } else {
        (" QUIZ ", theme.status_mode_normal)
    };

    let option_count = state.options().len().clamp(1, 9);
    let hints = format!(
        " 1-{option_count} pick · ←/→ move · Enter select · n next · ? help · q quit"
    );

    let status_line = Line::from(vec![
        Span::styled(badge, Style::default().fg(badge_fg).add_modifier(Modifier::BOLD)),
        Span::raw(hints),
    ]);

    frame.render_widget(
        Paragraph::new(status_line)
            .style(Style::default().bg(theme.status_bar_bg).fg(theme.status_bar_fg)),
        area,
    );
}
