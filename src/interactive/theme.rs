//! Palette selection for the interactive surface
//!
//! Colors are picked per terminal background. COLORFGBG is the only
//! portable hint, so anything unreadable falls back to the dark palette.

use ratatui::style::{Color, Style};
use std::env;

/// Terminal background class, inferred once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundType {
    Dark,
    Light,
}

/// Resolved colors for the current terminal
#[derive(Debug, Clone)]
pub struct ThemeManager {
    pub background: BackgroundType,
    pub palette: ColorPalette,
}

impl ThemeManager {
    /// Pick a palette for the terminal this process is attached to
    pub fn detect() -> Self {
        let background = background_from_env(env::var("COLORFGBG").ok().as_deref());
        Self {
            background,
            palette: ColorPalette::for_background(background),
        }
    }

    /// Fill drawn behind the text input that holds focus
    pub fn input_highlight(&self) -> Color {
        match self.background {
            BackgroundType::Dark => Color::Rgb(40, 40, 40),
            BackgroundType::Light => Color::Rgb(230, 230, 230),
        }
    }
}

/// Classify the background from a COLORFGBG value.
///
/// The variable holds "fg;bg", with some terminals inserting a middle
/// field, so the background is the last field. Values 0-7 are dark,
/// 8-15 light.
fn background_from_env(colorfgbg: Option<&str>) -> BackgroundType {
    let bg = colorfgbg.and_then(|value| value.rsplit(';').next()?.parse::<u8>().ok());
    match bg {
        Some(value) if value >= 8 => BackgroundType::Light,
        _ => BackgroundType::Dark,
    }
}

/// Color assignments for the widgets
#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub accent: Color,
    pub highlight: Color,
    pub muted: Color,
    pub background: Color,
    pub foreground: Color,
    pub badge_active: Color,
    pub badge_inactive: Color,
}

impl ColorPalette {
    pub fn for_background(bg: BackgroundType) -> Self {
        match bg {
            BackgroundType::Dark => Self::dark(),
            BackgroundType::Light => Self::light(),
        }
    }

    fn dark() -> Self {
        Self {
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Cyan,
            accent: Color::Magenta,
            highlight: Color::LightBlue,
            muted: Color::DarkGray,
            background: Color::Black,
            foreground: Color::White,
            badge_active: Color::Cyan,
            badge_inactive: Color::Rgb(30, 30, 30),
        }
    }

    fn light() -> Self {
        Self {
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
            accent: Color::Magenta,
            highlight: Color::Blue,
            muted: Color::Gray,
            background: Color::White,
            foreground: Color::Black,
            badge_active: Color::Blue,
            badge_inactive: Color::Rgb(225, 225, 225),
        }
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorfgbg_classification() {
        assert_eq!(background_from_env(Some("15;0")), BackgroundType::Dark);
        assert_eq!(background_from_env(Some("0;15")), BackgroundType::Light);
        // Three-field values read the last field
        assert_eq!(
            background_from_env(Some("15;default;0")),
            BackgroundType::Dark
        );
        assert_eq!(background_from_env(Some("garbage")), BackgroundType::Dark);
        assert_eq!(background_from_env(None), BackgroundType::Dark);
    }

    #[test]
    fn test_palettes_differ_where_the_background_does() {
        let dark = ColorPalette::for_background(BackgroundType::Dark);
        let light = ColorPalette::for_background(BackgroundType::Light);
        assert_eq!(dark.success, light.success);
        assert_ne!(dark.foreground, light.foreground);
        assert_ne!(dark.badge_inactive, light.badge_inactive);
    }
}
