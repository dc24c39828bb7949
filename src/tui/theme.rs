//! TUI theme and styles
//!
//! The appearance is an explicit [`Theme`] value owned by the app and passed
//! to every render function. Each mode reads from one fixed colour table, so
//! toggling swaps the whole palette at once.

use ratatui::style::{Color, Modifier, Style};

use crate::core::toast::ToastKind;

/// Light or dark appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ThemeMode::Dark
    }
}

/// Colours that depend on the appearance mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub secondary_text: Color,
    pub border: Color,
    pub emoji_backdrop: Color,
    /// Icon tint on settings rows
    pub icon: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(0xF9, 0xFA, 0xFB),
    surface: Color::Rgb(0xFF, 0xFF, 0xFF),
    text: Color::Rgb(0x1C, 0x1C, 0x1E),
    secondary_text: Color::Rgb(0x8E, 0x8E, 0x93),
    border: Color::Rgb(0xE5, 0xE5, 0xEA),
    emoji_backdrop: Color::Rgb(0xF2, 0xF2, 0xF7),
    icon: Color::Rgb(0x00, 0x7A, 0xFF),
};

const DARK: Palette = Palette {
    background: Color::Rgb(0x00, 0x00, 0x00),
    surface: Color::Rgb(0x1C, 0x1C, 0x1E),
    text: Color::Rgb(0xFF, 0xFF, 0xFF),
    secondary_text: Color::Rgb(0x8E, 0x8E, 0x93),
    border: Color::Rgb(0x38, 0x38, 0x3A),
    emoji_backdrop: Color::Rgb(0x2C, 0x2C, 0x2E),
    icon: Color::Rgb(0x0A, 0x84, 0xFF),
};

/// Application color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme {
    pub mode: ThemeMode,
}

impl Theme {
    /// Brand accent (header, active tab, primary buttons)
    pub const ACCENT: Color = Color::Rgb(0x34, 0xC7, 0x59);

    /// Calories stat
    pub const CALORIES: Color = Color::Rgb(0xFF, 0x3B, 0x30);

    /// Minutes stat
    pub const MINUTES: Color = Color::Rgb(0x00, 0x7A, 0xFF);

    /// Workout count stat
    pub const WORKOUTS: Color = Color::Rgb(0x58, 0x56, 0xD6);

    /// Success color
    pub const SUCCESS: Color = Color::Rgb(0x34, 0xC7, 0x59);

    /// Error color
    pub const ERROR: Color = Color::Rgb(0xFF, 0x3B, 0x30);

    /// Warning color
    pub const WARNING: Color = Color::Rgb(0xFF, 0x95, 0x00);

    /// Info color
    pub const INFO: Color = Color::Rgb(0x00, 0x7A, 0xFF);

    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Flip between light and dark
    pub fn toggle(&mut self) {
        self.mode = match self.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Colours for the current mode
    pub fn palette(&self) -> &'static Palette {
        match self.mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    /// Background color for a toast of the given kind
    pub fn toast_color(kind: ToastKind) -> Color {
        match kind {
            ToastKind::Success => Self::SUCCESS,
            ToastKind::Error => Self::ERROR,
            ToastKind::Warning => Self::WARNING,
            ToastKind::Info => Self::INFO,
        }
    }

    /// Base style for the whole screen
    pub fn base(&self) -> Style {
        let p = self.palette();
        Style::default().bg(p.background).fg(p.text)
    }

    /// Card / surface style
    pub fn surface(&self) -> Style {
        let p = self.palette();
        Style::default().bg(p.surface).fg(p.text)
    }

    /// Border style for cards
    pub fn border(&self) -> Style {
        Style::default().fg(self.palette().border)
    }

    /// Header style
    pub fn header(&self) -> Style {
        Style::default()
            .bg(Self::ACCENT)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected item style
    pub fn selected(&self) -> Style {
        Style::default().bg(Self::ACCENT).fg(Color::Black)
    }

    /// Normal text style
    pub fn normal(&self) -> Style {
        Style::default().fg(self.palette().text)
    }

    /// Muted text style
    pub fn muted(&self) -> Style {
        Style::default().fg(self.palette().secondary_text)
    }

    /// Section title style
    pub fn title(&self) -> Style {
        self.normal().add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_whole_palette() {
        let mut theme = Theme::new(ThemeMode::Light);
        let light = *theme.palette();

        theme.toggle();
        assert!(theme.is_dark());
        let dark = *theme.palette();

        // Every mode-dependent entry changes together
        assert_ne!(light.background, dark.background);
        assert_ne!(light.surface, dark.surface);
        assert_ne!(light.text, dark.text);
        assert_ne!(light.border, dark.border);
        assert_ne!(light.emoji_backdrop, dark.emoji_backdrop);
        assert_ne!(light.icon, dark.icon);
        assert_eq!(light.secondary_text, dark.secondary_text);

        theme.toggle();
        assert_eq!(*theme.palette(), light);
    }

    #[test]
    fn test_styles_follow_mode() {
        let light = Theme::new(ThemeMode::Light);
        let dark = Theme::new(ThemeMode::Dark);
        assert_eq!(light.base().bg, Some(Color::Rgb(0xF9, 0xFA, 0xFB)));
        assert_eq!(dark.base().bg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(dark.surface().fg, Some(Color::Rgb(0xFF, 0xFF, 0xFF)));
    }

    #[test]
    fn test_toast_colors() {
        assert_eq!(Theme::toast_color(ToastKind::Success), Theme::SUCCESS);
        assert_eq!(Theme::toast_color(ToastKind::Warning), Theme::WARNING);
        assert_ne!(
            Theme::toast_color(ToastKind::Error),
            Theme::toast_color(ToastKind::Info)
        );
    }
}
