//! Analog clock face geometry.
//!
//! Pure angle and position math, independent of any rendering backend. All
//! coordinates are in a y-up plane centred on the clock pivot, with angles in
//! degrees measured clockwise from 12 o'clock. Radii are expressed as fractions
//! of the face radius so callers can scale to whatever surface they draw on.

use crate::hour::Hour;

/// Radius of the face outline.
pub const FACE_RADIUS: f64 = 0.96;
/// Inner end of the hour tick marks.
pub const TICK_INNER_RADIUS: f64 = 0.84;
/// Outer end of the hour tick marks.
pub const TICK_OUTER_RADIUS: f64 = 0.92;
/// Radius at which hour numerals are placed.
pub const NUMERAL_RADIUS: f64 = 0.76;
/// Length of the hour hand.
pub const HOUR_HAND_LENGTH: f64 = 0.44;
/// Length of the minute hand.
pub const MINUTE_HAND_LENGTH: f64 = 0.64;

/// Rotation of the hour hand in degrees for `hour:minute`.
///
/// Hour 12 (and 0) points straight up. The minute term moves the hand
/// proportionally towards the next hour; it is zero for o'clock times.
pub fn hour_hand_degrees(hour: u8, minute: u8) -> f64 {
    f64::from(hour % 12) / 12.0 * 360.0 + f64::from(minute) / 60.0 / 12.0 * 360.0
}

/// Rotation of the minute hand in degrees.
pub fn minute_hand_degrees(minute: u8) -> f64 {
    f64::from(minute) / 60.0 * 360.0
}

/// Converts a clockwise-from-12 angle and radius into `(x, y)` in a y-up plane.
pub fn polar(degrees: f64, radius: f64) -> (f64, f64) {
    let rad = degrees.to_radians();
    (radius * rad.sin(), radius * rad.cos())
}

/// Where one hour numeral is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Numeral {
    pub hour: Hour,
    pub x: f64,
    pub y: f64,
}

/// One tick mark segment on the rim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// Every third hour (3, 6, 9, 12) gets a major tick.
    pub major: bool,
}

/// The twelve numerals, one every 30°, at `radius` from the centre.
pub fn numeral_positions(radius: f64) -> Vec<Numeral> {
    Hour::all()
        .map(|hour| {
            let (x, y) = polar(f64::from(hour.value()) * 30.0, radius);
            Numeral { hour, x, y }
        })
        .collect()
}

/// The twelve hour tick marks running from `inner` to `outer` radius.
pub fn tick_marks(inner: f64, outer: f64) -> Vec<Tick> {
    Hour::all()
        .map(|hour| {
            let degrees = f64::from(hour.value()) * 30.0;
            let (x1, y1) = polar(degrees, inner);
            let (x2, y2) = polar(degrees, outer);
            Tick { x1, y1, x2, y2, major: hour.value() % 3 == 0 }
        })
        .collect()
}

/// Tip of a hand of `length` rotated by `degrees`.
pub fn hand_tip(degrees: f64, length: f64) -> (f64, f64) {
    polar(degrees, length)
}
