//! Color theme system for clockquiz.
//!
//! A `Theme` holds named `ratatui::style::Color` fields covering every UI surface
//! clockquiz renders. Two built-in themes are provided:
//!
//! - `dark`: uses ANSI 16 colors (`Color::Reset`, `Color::DarkGray`, etc.) so it
//!   works on any terminal including 256-color SSH sessions with no truecolor support.
//! - `catppuccin_mocha`: Catppuccin Mocha palette in RGB; requires truecolor.

use ratatui::style::Color;

/// All color values used across clockquiz's UI surfaces.
///
/// Callers use `theme.field` directly inside `Style::default().fg(theme.title)`.
#[derive(Debug, Clone)]
pub struct Theme {
    // Panel borders
    /// Border color for the highlighted option and the help overlay.
    pub border_active: Color,
    /// Border color for everything else.
    pub border_inactive: Color,

    /// Heading above the clock.
    pub title: Color,

    // Clock face
    pub clock_rim: Color,
    /// Ticks at 3, 6, 9 and 12.
    pub tick_major: Color,
    pub tick_minor: Color,
    pub numerals: Color,
    pub hour_hand: Color,
    pub minute_hand: Color,

    // Buttons
    /// Label color for enabled option and "Next Time" buttons.
    pub button_fg: Color,
    /// Label and border color while input is locked.
    pub button_disabled: Color,

    // Feedback banner
    pub feedback_correct: Color,
    pub feedback_incorrect: Color,
    pub feedback_neutral: Color,

    // Status bar
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    /// Badge color while answering.
    pub status_mode_normal: Color,
    /// Badge color while waiting for the next question.
    pub status_mode_locked: Color,

    /// Application background (used for clearing areas).
    pub background: Color,
}

impl Theme {
    /// Returns the built-in dark theme using ANSI 16 colors.
    ///
    /// Works on all terminals: 16-color, 256-color, and truecolor.
    pub fn dark() -> Self {
        Self {
            border_active: Color::Cyan,
            border_inactive: Color::DarkGray,

            title: Color::Magenta,

            clock_rim: Color::Yellow,
            tick_major: Color::LightRed,
            tick_minor: Color::Yellow,
            numerals: Color::LightYellow,
            hour_hand: Color::White,
            minute_hand: Color::Gray,

            button_fg: Color::LightBlue,
            button_disabled: Color::DarkGray,

            feedback_correct: Color::Green,
            feedback_incorrect: Color::Red,
            feedback_neutral: Color::Reset,

            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
            status_mode_normal: Color::Cyan,
            status_mode_locked: Color::Green,

            background: Color::Reset,
        }
    }

    /// Returns the Catppuccin Mocha theme using RGB truecolor values.
    ///
    /// Palette source: <https://github.com/catppuccin/catppuccin> Mocha variant.
    pub fn catppuccin_mocha() -> Self {
        // Catppuccin Mocha palette (selected subset)
        let green = Color::Rgb(166, 227, 161);    // #a6e3a1
        let red = Color::Rgb(243, 139, 168);      // #f38ba8
        let yellow = Color::Rgb(249, 226, 175);   // #f9e2af
        let sky = Color::Rgb(137, 220, 235);      // #89dceb
        let pink = Color::Rgb(245, 194, 231);     // #f5c2e7
        let lavender = Color::Rgb(180, 190, 254); // #b4befe
        let overlay1 = Color::Rgb(127, 132, 156); // #7f849c
        let surface1 = Color::Rgb(69, 71, 90);    // #45475a
        let base = Color::Rgb(30, 30, 46);        // #1e1e2e
        let text = Color::Rgb(205, 214, 244);     // #cdd6f4
        let subtext0 = Color::Rgb(166, 173, 200); // #a6adc8
        let peach = Color::Rgb(250, 179, 135);    // #fab387

        Self {
            border_active: lavender,
            border_inactive: overlay1,

            title: pink,

            clock_rim: peach,
            tick_major: peach,
            tick_minor: yellow,
            numerals: yellow,
            hour_hand: text,
            minute_hand: subtext0,

            button_fg: sky,
            button_disabled: overlay1,

            feedback_correct: green,
            feedback_incorrect: red,
            feedback_neutral: text,

            status_bar_bg: surface1,
            status_bar_fg: text,
            status_mode_normal: lavender,
            status_mode_locked: green,

            background: base,
        }
    }

    /// Resolves a theme name string to the corresponding built-in theme.
    ///
    /// Unknown names fall back to `dark()` so a typo in config never prevents
    /// startup. The fallback is logged as a warning.
    pub fn from_name(name: &str) -> Self {
        match name {
            "catppuccin-mocha" | "catppuccin_mocha" => Self::catppuccin_mocha(),
            "dark" => Self::dark(),
            other => {
                tracing::warn!(theme = other, "unknown theme, falling back to 'dark'");
                Self::dark()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_falls_back_to_dark() {
        assert_eq!(Theme::from_name("neon").title, Theme::dark().title);
    }

    #[test]
    fn both_spellings_select_catppuccin() {
        let expected = Theme::catppuccin_mocha().background;
        assert_eq!(Theme::from_name("catppuccin-mocha").background, expected);
        assert_eq!(Theme::from_name("catppuccin_mocha").background, expected);
    }
}
