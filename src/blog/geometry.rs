//! # Geometry Types
//!
//! Screen regions of the blog layout. Both the view model (page sizes for
//! scrolling) and the renderer (where to paint) derive them from the
//! terminal size, so they always agree.

/// Rows each post occupies in the list: title and body
pub const POST_ROWS: u16 = 2;

/// Rows above the archive entries: heading and toggle button
pub const ARCHIVE_CHROME_ROWS: u16 = 2;

/// Below this width the archive aside is dropped
pub const MIN_WIDTH_FOR_ARCHIVE: u16 = 60;

const HEADER_ROWS: u16 = 3;
const FORM_ROWS: u16 = 4;
const FOOTER_ROWS: u16 = 1;

/// A rectangular region of the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Row just below the region
    pub const fn bottom(self) -> u16 {
        self.y + self.height
    }
}

/// Regions of the blog screen
///
/// ```text
/// ┌───────────────────────────────────────────┐
/// │ header: title, result count, search       │
/// ├──────────────────────────┬────────────────┤
/// │ form                     │ archive        │
/// ├──────────────────────────┤                │
/// │ posts                    │                │
/// ├──────────────────────────┴────────────────┤
/// │ footer                                    │
/// └───────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub form: Rect,
    pub posts: Rect,
    pub archive: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn compute(width: u16, height: u16) -> Self {
        let main_width = if width >= MIN_WIDTH_FOR_ARCHIVE {
            (u32::from(width) * 3 / 5) as u16
        } else {
            width
        };
        let aside_width = width - main_width;

        let header = Rect::new(0, 0, width, HEADER_ROWS.min(height));
        let footer_y = height.saturating_sub(FOOTER_ROWS);
        let footer = Rect::new(0, footer_y, width, height.min(FOOTER_ROWS));

        let body_top = header.bottom().min(footer_y);
        let form = Rect::new(0, body_top, main_width, FORM_ROWS.min(footer_y - body_top));
        let posts_top = form.bottom();
        let posts = Rect::new(0, posts_top, main_width, footer_y - posts_top);
        let archive = Rect::new(main_width, body_top, aside_width, footer_y - body_top);

        Self {
            header,
            form,
            posts,
            archive,
            footer,
        }
    }

    /// Number of posts that fit in the list region
    pub fn posts_per_page(&self) -> usize {
        (self.posts.height / POST_ROWS).max(1) as usize
    }

    /// Number of archive entries that fit below the archive heading
    pub fn archive_rows(&self) -> usize {
        self.archive.height.saturating_sub(ARCHIVE_CHROME_ROWS) as usize
    }
}
