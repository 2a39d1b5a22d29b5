//! Analog clock rendering on a braille `Canvas`.
//!
//! All positions come from `clockquiz_core::geometry`; this module only maps
//! them onto ratatui shapes. The canvas spans `[-1, 1]` on both axes and is
//! drawn into a rect that is twice as wide as tall, so the face reads as a
//! circle on typical terminal fonts.

use clockquiz_core::geometry::{
    hand_tip, hour_hand_degrees, minute_hand_degrees, numeral_positions, tick_marks,
    FACE_RADIUS, HOUR_HAND_LENGTH, MINUTE_HAND_LENGTH, NUMERAL_RADIUS, TICK_INNER_RADIUS,
    TICK_OUTER_RADIUS,
};
use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    symbols::Marker,
    text::Span,
    widgets::canvas::{Canvas, Circle, Line as CanvasLine},
    Frame,
};

use crate::theme::Theme;

/// Pivot dot radius.
const PIVOT_RADIUS: f64 = 0.04;

/// Draws a clock face showing `hour:minute`.
///
/// The quiz always passes `minute = 0`; the parameter keeps the drawing honest
/// for the hour hand's minute offset.
pub fn render_clock(frame: &mut Frame, area: Rect, hour: u8, minute: u8, theme: &Theme) {
    if area.width < 4 || area.height < 2 {
        return;
    }

    let ticks = tick_marks(TICK_INNER_RADIUS, TICK_OUTER_RADIUS);
    let numerals = numeral_positions(NUMERAL_RADIUS);
    let (hour_x, hour_y) = hand_tip(hour_hand_degrees(hour, minute), HOUR_HAND_LENGTH);
    let (min_x, min_y) = hand_tip(minute_hand_degrees(minute), MINUTE_HAND_LENGTH);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            ctx.draw(&Circle { x: 0.0, y: 0.0, radius: FACE_RADIUS, color: theme.clock_rim });
            for tick in &ticks {
                let color = if tick.major { theme.tick_major } else { theme.tick_minor };
                ctx.draw(&CanvasLine::new(tick.x1, tick.y1, tick.x2, tick.y2, color));
            }
            ctx.layer();

            ctx.draw(&CanvasLine::new(0.0, 0.0, min_x, min_y, theme.minute_hand));
            ctx.draw(&CanvasLine::new(0.0, 0.0, hour_x, hour_y, theme.hour_hand));
            ctx.draw(&Circle { x: 0.0, y: 0.0, radius: PIVOT_RADIUS, color: theme.hour_hand });
            ctx.layer();

            for numeral in &numerals {
                ctx.print(
                    numeral.x,
                    numeral.y,
                    Span::styled(numeral.hour.to_string(), Style::default().fg(theme.numerals))
                        .bold(),
                );
            }
        });

    frame.render_widget(canvas, area);
}
