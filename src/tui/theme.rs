//! Light/dark color themes.

use ratatui::style::Color;

/// Selected UI theme, toggleable at runtime with the `t` key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Toggles between dark and light.
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }

    /// Returns a display label for the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// Returns the color palette for this theme.
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::Black,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                card: Color::DarkGray,
                positive: Color::Green,
                negative: Color::Red,
            },
            Theme::Light => Palette {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                card: Color::Gray,
                positive: Color::Green,
                negative: Color::Red,
            },
        }
    }
}

/// Concrete colors used by the widgets.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    /// Border color for card/panel blocks.
    pub card: Color,
    pub positive: Color,
    pub negative: Color,
}
