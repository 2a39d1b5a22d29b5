//! Option buttons, feedback banner, and the "Next Time" control.
//!
//! Buttons are drawn as bordered paragraphs. Their rects are written back into
//! `AppState` so the mouse handler can hit-test the next click against exactly
//! what is on screen.

use clockquiz_core::{Feedback, Verdict};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::theme::Theme;
use crate::ui::layout::button_block;

/// Columns of padding around each option label (borders plus one space a side).
const BUTTON_PADDING: u16 = 4;

/// Renders one button per option and caches their rects in `state.option_rects`.
pub fn render_options(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let names = state.session.names();
    let labels: Vec<String> = state
        .options()
        .iter()
        .map(|&hour| format!("{} o'clock", names.display_name(hour)))
        .collect();

    let count = labels.len() as u16;
    if count == 0 {
        state.option_rects.clear();
        return;
    }

    let widest = labels.iter().map(|l| l.chars().count() as u16).max().unwrap_or(0);
    let button_width = widest + BUTTON_PADDING;
    let gaps = count - 1;
    let constraints: Vec<Constraint> =
        if button_width.saturating_mul(count).saturating_add(gaps) <= area.width {
            vec![Constraint::Length(button_width); labels.len()]
        } else {
            vec![Constraint::Ratio(1, u32::from(count)); labels.len()]
        };
    let rects = Layout::horizontal(constraints)
        .flex(Flex::Center)
        .spacing(1)
        .split(area);

    let locked = state.session.is_locked();
    let highlighted = state.highlighted();
    let label_style = if locked {
        Style::default().fg(theme.button_disabled)
    } else {
        Style::default().fg(theme.button_fg).add_modifier(Modifier::BOLD)
    };

    for (index, (label, rect)) in labels.iter().zip(rects.iter()).enumerate() {
        let key_hint = if index < 9 { format!(" {} ", index + 1) } else { String::new() };
        let block = button_block(&key_hint, index == highlighted, locked, theme);
        frame.render_widget(
            Paragraph::new(Line::from(label.as_str()))
                .style(label_style)
                .centered()
                .block(block),
            *rect,
        );
    }
    state.option_rects = rects.to_vec();
}

/// Renders the feedback banner. Nothing is drawn until the user answers.
pub fn render_feedback(frame: &mut Frame, area: Rect, feedback: &Feedback, theme: &Theme) {
    if !feedback.visible || feedback.message.is_empty() {
        return;
    }
    let color = match feedback.verdict {
        Some(Verdict::Correct) => theme.feedback_correct,
        Some(Verdict::Incorrect) => theme.feedback_incorrect,
        None => theme.feedback_neutral,
    };
    let width = (feedback.message.chars().count() as u16 + BUTTON_PADDING).min(area.width);
    let [banner] = area.layout(&Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center));

    frame.render_widget(
        Paragraph::new(feedback.message.as_str())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            ),
        banner,
    );
}

/// Renders the "Next Time" button and caches its rect in `state.next_rect`.
pub fn render_next_button(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    const LABEL: &str = "⟳ Next Time";
    let width = (LABEL.chars().count() as u16 + BUTTON_PADDING + 2).min(area.width);
    let [rect] = area.layout(&Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center));

    let locked = state.session.is_locked();
    let style = if locked {
        Style::default().fg(theme.button_disabled)
    } else {
        Style::default().fg(theme.title).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(LABEL)
            .style(style)
            .centered()
            .block(button_block(" n ", false, locked, theme)),
        rect,
    );
    state.next_rect = rect;
}
