//! # Core Event Types
//!
//! Small value types shared by events, commands and views: which component
//! has keyboard focus and which color theme is active.

use crate::blog::models::FormField;

/// Component that currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    Search,
    Title,
    Body,
    Posts,
    Archive,
}

impl Focus {
    /// Focus order for Tab
    pub const RING: [Focus; 5] = [
        Focus::Search,
        Focus::Title,
        Focus::Body,
        Focus::Posts,
        Focus::Archive,
    ];

    pub fn next(self) -> Self {
        let index = self.ring_index();
        Self::RING[(index + 1) % Self::RING.len()]
    }

    pub fn previous(self) -> Self {
        let index = self.ring_index();
        Self::RING[(index + Self::RING.len() - 1) % Self::RING.len()]
    }

    /// Whether printable keys edit text while this component is focused
    pub fn is_text_input(self) -> bool {
        matches!(self, Focus::Search | Focus::Title | Focus::Body)
    }

    /// Form field behind this focus, if any
    pub fn form_field(self) -> Option<FormField> {
        match self {
            Focus::Title => Some(FormField::Title),
            Focus::Body => Some(FormField::Body),
            _ => None,
        }
    }

    fn ring_index(self) -> usize {
        Self::RING
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }
}

/// Color theme of the whole screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Icon of the theme toggle: a moon offers dark mode, a sun offers light mode
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}
