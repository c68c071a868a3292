//! # Terminal Renderer
//!
//! Paints the blog screen from a [`PostContext`] snapshot. Every region is
//! repainted row by row across its full width, so a partial redraw never
//! leaves stale text behind and the theme background covers the screen.

use crate::blog::events::Focus;
use crate::blog::geometry::{Rect, ScreenLayout, POST_ROWS};
use crate::blog::io::RenderStream;
use crate::blog::view_models::PostContext;
use crate::blog::views::palette::Palette;
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
};
use std::borrow::Cow;
use std::io::Write;
use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// Helper macro to convert crossterm errors to anyhow errors
macro_rules! queue_term {
    ($($arg:expr),* $(,)?) => {
        queue!($($arg),*).map_err(anyhow::Error::from)
    };
}

pub const SEARCH_LABEL: &str = "Search: ";
pub const TITLE_LABEL: &str = "Title: ";
pub const BODY_LABEL: &str = "Body:  ";

const SEARCH_PLACEHOLDER: &str = "Search posts...";
const TITLE_PLACEHOLDER: &str = "Post title";
const BODY_PLACEHOLDER: &str = "Post body";
const FOOTER_TEXT: &str = "© by The Cosmic Blog ✌️";
const SEPARATOR: &str = "│ ";

/// Row of the header holding the search box
const SEARCH_ROW: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Normal,
    Accent,
    Muted,
}

#[derive(Debug, Clone, Copy)]
struct Style {
    tone: Tone,
    bold: bool,
    reverse: bool,
}

impl Style {
    const NORMAL: Style = Style::new(Tone::Normal);
    const MUTED: Style = Style::new(Tone::Muted);
    const ACCENT: Style = Style::new(Tone::Accent);

    const fn new(tone: Tone) -> Self {
        Self {
            tone,
            bold: false,
            reverse: false,
        }
    }

    const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    const fn reversed(self) -> Self {
        Self {
            reverse: true,
            ..self
        }
    }

    /// Accent when `focused`, otherwise `self`
    const fn focused(self, focused: bool) -> Self {
        if focused {
            Self {
                tone: Tone::Accent,
                ..self
            }
        } else {
            self
        }
    }

    fn color(self, palette: &Palette) -> Color {
        match self.tone {
            Tone::Normal => palette.foreground,
            Tone::Accent => palette.accent,
            Tone::Muted => palette.muted,
        }
    }
}

/// `text` with control characters replaced by spaces
///
/// Post text can come from a seed file; a raw newline, tab or escape
/// sequence would move the cursor out of its region.
pub fn printable(text: &str) -> Cow<'_, str> {
    if text.chars().any(char::is_control) {
        Cow::Owned(
            text.chars()
                .map(|ch| if ch.is_control() { ' ' } else { ch })
                .collect(),
        )
    } else {
        Cow::Borrowed(text)
    }
}

/// Longest prefix of `text` that fits in `width` columns, and its width
pub fn truncate_to_width(text: &str, width: usize) -> (&str, usize) {
    let mut used = 0;
    for (index, ch) in text.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            return (&text[..index], used);
        }
        used += ch_width;
    }
    (text, used)
}

pub fn result_count_text(count: usize) -> String {
    format!("🚀 {count} Cosmic posts found")
}

/// Archive rows to show so that `selected` stays on screen
pub fn archive_window(selected: usize, len: usize, rows: usize) -> Range<usize> {
    if rows == 0 || len == 0 {
        return 0..0;
    }
    let start = if selected >= rows {
        selected + 1 - rows
    } else {
        0
    };
    start..(start + rows).min(len)
}

pub fn key_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Search => "Tab next · Ctrl+T theme · Ctrl+X clear posts · Ctrl+C quit",
        Focus::Title => "Enter next field · Tab next · Ctrl+C quit",
        Focus::Body => "Enter Add post · Tab next · Ctrl+C quit",
        Focus::Posts => "↑/↓ scroll · / search · Tab next · q quit",
        Focus::Archive => "Ctrl+A show/hide · ↑/↓ select · Enter Add as new post · q quit",
    }
}

/// Screen position of the text cursor, or `None` when a list has focus
pub fn cursor_position(context: &PostContext) -> Option<(u16, u16)> {
    let (width, height) = context.terminal_dimensions;
    let layout = ScreenLayout::compute(width, height);
    let (rect, row, label, text) = match context.focus {
        Focus::Search => (
            layout.header,
            SEARCH_ROW,
            SEARCH_LABEL,
            context.search_query.as_str(),
        ),
        Focus::Title => (layout.form, 0, TITLE_LABEL, context.form.title()),
        Focus::Body => (layout.form, 1, BODY_LABEL, context.form.body()),
        Focus::Posts | Focus::Archive => return None,
    };
    if rect.is_empty() || row >= rect.height {
        return None;
    }
    let column = (label.width() + text.width()).min(usize::from(rect.width) - 1);
    Some((rect.x + column as u16, rect.y + row))
}

/// Trait for rendering views
pub trait ViewRenderer {
    /// Take over the terminal
    fn initialize(&mut self) -> Result<()>;

    fn render_full(&mut self, context: &PostContext) -> Result<()>;

    /// Title bar, result count and search box
    fn render_header(&mut self, context: &PostContext) -> Result<()>;

    fn render_form(&mut self, context: &PostContext) -> Result<()>;

    fn render_posts(&mut self, context: &PostContext) -> Result<()>;

    fn render_archive(&mut self, context: &PostContext) -> Result<()>;

    fn render_footer(&mut self, context: &PostContext) -> Result<()>;

    /// Place or hide the cursor and flush the frame
    fn render_cursor(&mut self, context: &PostContext) -> Result<()>;

    /// Give the terminal back
    fn cleanup(&mut self) -> Result<()>;
}

/// crossterm renderer writing to any [`RenderStream`]
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn render_stream(&self) -> &RS {
        &self.render_stream
    }

    fn layout(context: &PostContext) -> ScreenLayout {
        let (width, height) = context.terminal_dimensions;
        ScreenLayout::compute(width, height)
    }

    /// Paint one full-width row of `rect` from styled spans
    fn paint_row(
        &mut self,
        rect: Rect,
        row: u16,
        spans: &[(&str, Style)],
        palette: &Palette,
    ) -> Result<()> {
        if row >= rect.height || rect.width == 0 {
            return Ok(());
        }
        let mut remaining = usize::from(rect.width);
        queue_term!(
            self.render_stream,
            MoveTo(rect.x, rect.y + row),
            SetBackgroundColor(palette.background)
        )?;
        for (text, style) in spans {
            if remaining == 0 {
                break;
            }
            let text = printable(text);
            let (piece, used) = truncate_to_width(&text, remaining);
            remaining -= used;
            queue_term!(self.render_stream, SetForegroundColor(style.color(palette)))?;
            if style.bold {
                queue_term!(self.render_stream, SetAttribute(Attribute::Bold))?;
            }
            if style.reverse {
                queue_term!(self.render_stream, SetAttribute(Attribute::Reverse))?;
            }
            queue_term!(
                self.render_stream,
                Print(piece),
                SetAttribute(Attribute::Reset),
                SetBackgroundColor(palette.background)
            )?;
        }
        queue_term!(self.render_stream, Print(" ".repeat(remaining)), ResetColor)?;
        Ok(())
    }

    fn paint_blank(&mut self, rect: Rect, row: u16, palette: &Palette) -> Result<()> {
        self.paint_row(rect, row, &[], palette)
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.hide_cursor()?;
        tracing::debug!("Terminal initialized at {:?}", self.terminal_size);
        Ok(())
    }

    fn render_full(&mut self, context: &PostContext) -> Result<()> {
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;
        self.render_header(context)?;
        self.render_form(context)?;
        self.render_posts(context)?;
        self.render_archive(context)?;
        self.render_footer(context)?;
        self.render_cursor(context)
    }

    fn render_header(&mut self, context: &PostContext) -> Result<()> {
        let rect = Self::layout(context).header;
        let palette = Palette::for_theme(context.theme);

        self.paint_row(
            rect,
            0,
            &[
                ("⚛️ The Cosmic Blog", Style::ACCENT.bold()),
                ("   ", Style::NORMAL),
                (context.theme.toggle_icon(), Style::NORMAL),
                (" Ctrl+T   ", Style::MUTED),
                ("Clear posts", Style::NORMAL),
                (" Ctrl+X", Style::MUTED),
            ],
            &palette,
        )?;
        let results = result_count_text(context.posts.len());
        self.paint_row(rect, 1, &[(results.as_str(), Style::NORMAL)], &palette)?;

        let label = Style::NORMAL.bold().focused(context.focus == Focus::Search);
        let query = if context.search_query.is_empty() {
            (SEARCH_PLACEHOLDER, Style::MUTED)
        } else {
            (context.search_query.as_str(), Style::NORMAL)
        };
        self.paint_row(rect, SEARCH_ROW, &[(SEARCH_LABEL, label), query], &palette)
    }

    fn render_form(&mut self, context: &PostContext) -> Result<()> {
        let rect = Self::layout(context).form;
        let palette = Palette::for_theme(context.theme);

        let fields = [
            (TITLE_LABEL, context.form.title(), TITLE_PLACEHOLDER, Focus::Title),
            (BODY_LABEL, context.form.body(), BODY_PLACEHOLDER, Focus::Body),
        ];
        for (row, (label, text, placeholder, focus)) in (0u16..).zip(fields) {
            let label_style = Style::NORMAL.bold().focused(context.focus == focus);
            let value = if text.is_empty() {
                (placeholder, Style::MUTED)
            } else {
                (text, Style::NORMAL)
            };
            self.paint_row(rect, row, &[(label, label_style), value], &palette)?;
        }

        let button = Style::NORMAL.focused(context.focus == Focus::Body);
        self.paint_row(rect, 2, &[("[ Add post ]", button)], &palette)?;
        for row in 3..rect.height {
            self.paint_blank(rect, row, &palette)?;
        }
        Ok(())
    }

    fn render_posts(&mut self, context: &PostContext) -> Result<()> {
        let layout = Self::layout(context);
        let rect = layout.posts;
        let palette = Palette::for_theme(context.theme);
        let per_page = layout.posts_per_page();
        let title_style = Style::NORMAL.bold().focused(context.focus == Focus::Posts);

        for row in 0..rect.height {
            let slot = usize::from(row / POST_ROWS);
            let post = (slot < per_page)
                .then(|| context.posts.get(context.posts_scroll + slot))
                .flatten();
            let span = match (post, row % POST_ROWS) {
                (Some(post), 0) => (post.title.as_str(), title_style),
                (Some(post), _) => (post.body.as_str(), Style::MUTED),
                (None, _) => ("", Style::NORMAL),
            };
            self.paint_row(rect, row, &[span], &palette)?;
        }
        Ok(())
    }

    fn render_archive(&mut self, context: &PostContext) -> Result<()> {
        let layout = Self::layout(context);
        let rect = layout.archive;
        if rect.is_empty() {
            return Ok(());
        }
        let palette = Palette::for_theme(context.theme);
        let focused = context.focus == Focus::Archive;
        let separator = (SEPARATOR, Style::MUTED);

        self.paint_row(
            rect,
            0,
            &[separator, ("Post archive", Style::NORMAL.bold().focused(focused))],
            &palette,
        )?;
        let toggle = if context.archive_visible {
            "[Hide archive posts]"
        } else {
            "[Show archive posts]"
        };
        self.paint_row(
            rect,
            1,
            &[separator, (toggle, Style::NORMAL), (" Ctrl+A", Style::MUTED)],
            &palette,
        )?;

        let window = if context.archive_visible {
            archive_window(
                context.archive_selected_index,
                context.archive_posts.len(),
                layout.archive_rows(),
            )
        } else {
            0..0
        };
        let mut row = 2;
        for index in window {
            let post = &context.archive_posts[index];
            let line = format!("{}: {}", post.title, post.body);
            let (marker, style) = if index == context.archive_selected_index {
                let style = if focused {
                    Style::NORMAL.reversed()
                } else {
                    Style::ACCENT
                };
                ("▸ ", style)
            } else {
                ("  ", Style::NORMAL)
            };
            let spans = [separator, (marker, style), (line.as_str(), style)];
            self.paint_row(rect, row, &spans, &palette)?;
            row += 1;
        }
        for row in row..rect.height {
            self.paint_row(rect, row, &[separator], &palette)?;
        }
        Ok(())
    }

    fn render_footer(&mut self, context: &PostContext) -> Result<()> {
        let rect = Self::layout(context).footer;
        let palette = Palette::for_theme(context.theme);
        self.paint_row(
            rect,
            0,
            &[
                (FOOTER_TEXT, Style::MUTED),
                ("   ", Style::NORMAL),
                (key_hints(context.focus), Style::MUTED),
            ],
            &palette,
        )
    }

    fn render_cursor(&mut self, context: &PostContext) -> Result<()> {
        match cursor_position(context) {
            Some((x, y)) => {
                self.render_stream.move_cursor(x, y)?;
                self.render_stream.show_cursor()?;
            }
            None => self.render_stream.hide_cursor()?,
        }
        self.render_stream.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        queue_term!(self.render_stream, ResetColor)?;
        self.render_stream.show_cursor()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.disable_raw_mode()?;
        tracing::debug!("Terminal restored");
        Ok(())
    }
}
