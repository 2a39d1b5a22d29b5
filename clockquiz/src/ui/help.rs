//! Help overlay renderer for clockquiz.
//!
//! Provides `render_help_overlay()` which draws a centred modal box over the quiz
//! using ratatui's `Clear` widget to erase the background first. The overlay is
//! rendered inside the same `terminal.draw()` closure as everything else:
//! calling `frame.render_widget(Clear, area)` before the bordered `Paragraph`
//! achieves the modal effect without a second draw call.

use ratatui::{
    layout::Constraint,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme::Theme;

/// Renders the help overlay as a centred modal on top of the quiz screen.
///
/// If the terminal is narrower than 40 columns the overlay is skipped to avoid
/// a zero-height `Rect`.
///
/// # Arguments
///
/// * `frame`: current render frame provided by `terminal.draw()`
/// * `theme`: active color theme (supplies `border_active` for the modal border)
/// * `help_scroll`: vertical scroll offset; j/k in HelpOverlay mode mutate this field
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme, help_scroll: u16) {
    if frame.area().width < 40 {
        return;
    }

    let overlay_area = frame
        .area()
        .centered(Constraint::Percentage(70), Constraint::Percentage(70));

    frame.render_widget(Clear, overlay_area);

    let block = Block::bordered()
        .title(" Help: j/k scroll, ? or Esc to dismiss ")
        .border_style(ratatui::style::Style::default().fg(theme.border_active));

    frame.render_widget(
        Paragraph::new(build_help_text())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((help_scroll, 0)),
        overlay_area,
    );
}

fn build_help_text() -> Text<'static> {
    Text::from(vec![
        Line::from("Read the clock, then pick the hour it shows."),
        Line::from(""),
        Line::from("Answering"),
        Line::from("  1 - 9           Pick the option with that number"),
        Line::from("  ← / →, h / l    Move the highlight"),
        Line::from("  Tab / Shift-Tab Move the highlight"),
        Line::from("  Enter / Space   Pick the highlighted option"),
        Line::from("  Mouse click     Pick an option or press Next Time"),
        Line::from(""),
        Line::from("Flow"),
        Line::from("  A right answer shows for a moment, then a new clock appears."),
        Line::from("  A wrong answer can be retried as often as you like."),
        Line::from("  n               Skip to a new clock (Next Time)"),
        Line::from(""),
        Line::from("General"),
        Line::from("  ?               Open / close this help overlay"),
        Line::from("  q / Esc         Quit"),
    ])
}
