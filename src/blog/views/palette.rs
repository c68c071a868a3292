//! Screen colors for each theme.

use crate::blog::events::Theme;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    /// Focused component and headings
    pub accent: Color,
    /// Post bodies, placeholders and hints
    pub muted: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb {
        r: 250,
        g: 250,
        b: 250,
    },
    foreground: Color::Rgb {
        r: 30,
        g: 30,
        b: 30,
    },
    accent: Color::Rgb {
        r: 0,
        g: 122,
        b: 204,
    },
    muted: Color::Rgb {
        r: 110,
        g: 110,
        b: 110,
    },
};

const DARK: Palette = Palette {
    background: Color::Rgb {
        r: 24,
        g: 24,
        b: 27,
    },
    foreground: Color::Rgb {
        r: 230,
        g: 230,
        b: 230,
    },
    accent: Color::Rgb {
        r: 97,
        g: 218,
        b: 251,
    },
    muted: Color::Rgb {
        r: 150,
        g: 150,
        b: 150,
    },
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_should_use_different_backgrounds() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.foreground, dark.foreground);
    }
}
