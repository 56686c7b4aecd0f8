//! Menu layout, frame snapshots and rendering.
//!
//! A [`MenuFrame`] is a fixed-size copy of everything one screen of a menu
//! needs. [`FrameChanges`] diffs two frames, and [`render_frame`] draws a
//! frame with `embedded-graphics`.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text},
};
use heapless::String;
use twin_menu::MenuView;

/// Maximum number of item rows a [`MenuFrame`] can hold.
pub const MAX_FRAME_ROWS: usize = 8;
/// Bytes of the `n/m` position marker: two full `usize` values and a slash.
pub const POSITION_BYTES: usize = 2 * 20 + 1;

/// Bytes of text kept per title or caption; longer strings are cut at the
/// last full character that fits.
pub const TEXT_BYTES: usize = 20;

// ── DisplayConfig ────────────────────────────────────────────────────────

/// Layout geometry and refresh rate for the menu screen.
///
/// All layout geometry lives here. [`DisplayConfig::default()`] fits an
/// SSD1306 128×64 panel with the 6×10 font: a 12 px title bar and five
/// 10 px item rows, refreshed at 30 Hz.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Refresh rate of the session task in Hz. Default: 30. Max: 60.
    pub update_frequency_hz: u32,

    // ── Layout geometry ──────────────────────────────────────────────
    /// Total display width in pixels. Default: 128.
    pub display_width: u32,
    /// Total display height in pixels. Default: 64.
    pub display_height: u32,
    /// Height of the title bar, including its underline. Default: 12.
    pub header_height: u32,
    /// Height of one item row. Default: 10.
    pub row_height: u32,
    /// Left margin of item captions. Default: 4.
    pub margin_x: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            update_frequency_hz: 30,
            display_width: 128,
            display_height: 64,
            header_height: 12,
            row_height: 10,
            margin_x: 4,
        }
    }
}

impl DisplayConfig {
    /// Timer period for the configured frequency (`1000 / update_frequency_hz`).
    pub fn update_period_ms(&self) -> u64 {
        1000 / self.update_frequency_hz.max(1) as u64
    }

    /// Number of item rows below the title bar, capped at [`MAX_FRAME_ROWS`].
    pub fn visible_rows(&self) -> usize {
        let body = self.display_height.saturating_sub(self.header_height);
        let rows = (body / self.row_height.max(1)) as usize;
        rows.min(MAX_FRAME_ROWS)
    }
}

// ── Selection window ─────────────────────────────────────────────────────

/// First item index of the window of `rows` items that keeps `selected`
/// on screen.
///
/// The window stays at the top until the selection reaches the last
/// visible row, then follows it down. Wrapping back to item 0 snaps the
/// window back to the top.
pub fn window_start(selected: usize, item_count: usize, rows: usize) -> usize {
    if rows == 0 || item_count <= rows {
        return 0;
    }
    let last_start = item_count - rows;
    selected.saturating_sub(rows - 1).min(last_start)
}

// ── MenuFrame ────────────────────────────────────────────────────────────

/// Immutable snapshot of one menu screen.
///
/// Fixed-size arrays avoid heap allocation. Text is stored as zero-padded
/// UTF-8 of at most [`TEXT_BYTES`] bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuFrame {
    /// Menu title, zero-padded UTF-8.
    pub title: [u8; TEXT_BYTES],
    /// Captions of the visible rows, zero-padded UTF-8.
    pub rows: [[u8; TEXT_BYTES]; MAX_FRAME_ROWS],
    /// Number of meaningful entries in `rows`.
    pub row_count: usize,
    /// Item index shown in the first row.
    pub first_item: usize,
    /// Index of the selected item within the whole menu.
    pub selected_idx: usize,
    /// Total number of items in the menu.
    pub item_count: usize,
}

impl MenuFrame {
    /// Snapshot `view`, keeping at most `rows` captions around the selection.
    ///
    /// # Example
    ///
    /// ```
    /// use twin_menu::{MenuItem, MenuView};
    /// use twin_menu_oled_display_rs::MenuFrame;
    ///
    /// let items = [MenuItem::new("On", "1"), MenuItem::new("Off", "0")];
    /// let frame = MenuFrame::from_view(&MenuView::new("Sound", &items, 1), 5);
    ///
    /// assert_eq!(frame.title_str(), "Sound");
    /// assert_eq!(frame.row_str(1), "Off");
    /// assert_eq!(frame.selected_row(), Some(1));
    /// ```
    pub fn from_view(view: &MenuView<'_, '_>, rows: usize) -> Self {
        let rows = rows.min(MAX_FRAME_ROWS);
        let item_count = view.len();
        let selected_idx = view.selected_idx();
        let first_item = window_start(selected_idx, item_count, rows);

        let mut frame = Self {
            first_item,
            selected_idx,
            item_count,
            ..Self::default()
        };
        copy_text(&mut frame.title, view.title());

        for (slot, caption) in frame
            .rows
            .iter_mut()
            .zip(view.captions().skip(first_item).take(rows))
        {
            copy_text(slot, caption);
            frame.row_count += 1;
        }
        frame
    }

    pub fn title_str(&self) -> &str {
        Self::bytes_to_str(&self.title)
    }

    /// Caption of visible row `row`, or `""` past the last row.
    pub fn row_str(&self, row: usize) -> &str {
        if row >= self.row_count {
            return "";
        }
        Self::bytes_to_str(&self.rows[row])
    }

    /// Visible row holding the selected item, if it is on screen.
    pub fn selected_row(&self) -> Option<usize> {
        let row = self.selected_idx.checked_sub(self.first_item)?;
        (row < self.row_count).then_some(row)
    }

    /// `true` when the menu has more items than visible rows.
    pub fn is_windowed(&self) -> bool {
        self.item_count > self.row_count
    }

    /// One-based `selected/total` marker shown on windowed menus.
    pub fn position_text(&self) -> String<POSITION_BYTES> {
        let mut text = String::new();
        // Two usize values and the slash always fit, so write! cannot fail.
        let _ = write!(text, "{}/{}", self.selected_idx.saturating_add(1), self.item_count);
        text
    }

    /// Convert a zero-padded byte buffer back to `&str`.
    ///
    /// Stops at the first zero byte; returns `""` on invalid UTF-8.
    pub fn bytes_to_str(bytes: &[u8]) -> &str {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        core::str::from_utf8(&bytes[..end]).unwrap_or("")
    }
}

/// Copy `text` into `buf`, truncated on a character boundary.
fn copy_text(buf: &mut [u8; TEXT_BYTES], text: &str) {
    let mut len = text.len().min(TEXT_BYTES);
    while !text.is_char_boundary(len) {
        len -= 1;
    }
    buf[..len].copy_from_slice(&text.as_bytes()[..len]);
}

// ── FrameChanges ─────────────────────────────────────────────────────────

/// Which parts of the screen differ between two [`MenuFrame`]s.
///
/// Gates the flush in the session task; per-row flags leave room for
/// partial updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameChanges {
    pub title_changed: bool,
    /// The `n/m` position marker in the title bar differs.
    pub position_changed: bool,
    /// Per visible row: caption or highlight differs.
    pub row_changed: [bool; MAX_FRAME_ROWS],
}

impl FrameChanges {
    pub fn detect(old: &MenuFrame, new: &MenuFrame) -> Self {
        let title_changed = old.title != new.title;
        let position_changed = old.is_windowed() != new.is_windowed()
            || (new.is_windowed()
                && (old.selected_idx, old.item_count) != (new.selected_idx, new.item_count));

        let mut row_changed = [false; MAX_FRAME_ROWS];
        for (i, changed) in row_changed.iter_mut().enumerate() {
            let was_selected = old.selected_row() == Some(i);
            let is_selected = new.selected_row() == Some(i);
            *changed = old.row_str(i) != new.row_str(i) || was_selected != is_selected;
        }

        Self {
            title_changed,
            position_changed,
            row_changed,
        }
    }

    pub fn any_changed(&self) -> bool {
        self.title_changed || self.position_changed || self.row_changed.iter().any(|&c| c)
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Render a [`MenuFrame`] with `embedded-graphics`.
///
/// # Layout
///
/// ```text
/// ┌──────────────────────────────────┐
/// │            TITLE          3/7    │  ← header_height (position only
/// ├──────────────────────────────────┤     when the list is windowed)
/// │  Caption                         │  ← row_height each
/// │██Selected caption████████████████│  ← inverted
/// │  Caption                         │
/// └──────────────────────────────────┘
/// ```
///
/// The target is not cleared first.
pub fn render_frame<D>(display: &mut D, frame: &MenuFrame, config: &DisplayConfig) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let text_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let inverted_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::Off);
    let header = config.header_height as i32;
    let width = config.display_width as i32;

    // ── Title bar ────────────────────────────────────────────────────
    let title = frame.title_str();
    if !title.is_empty() {
        Text::with_alignment(title, Point::new(width / 2, header - 3), text_style, Alignment::Center)
            .draw(display)?;
    }

    if frame.is_windowed() {
        let position = frame.position_text();
        Text::with_alignment(
            position.as_str(),
            Point::new(width - 1, header - 3),
            text_style,
            Alignment::Right,
        )
        .draw(display)?;
    }

    Line::new(Point::new(0, header - 1), Point::new(width - 1, header - 1))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(display)?;

    // ── Item rows ────────────────────────────────────────────────────
    let selected_row = frame.selected_row();
    for row in 0..frame.row_count {
        let top = header + (row as u32 * config.row_height) as i32;
        let style = if selected_row == Some(row) {
            Rectangle::new(Point::new(0, top), Size::new(config.display_width, config.row_height))
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(display)?;
            inverted_style
        } else {
            text_style
        };

        Text::with_baseline(frame.row_str(row), Point::new(config.margin_x, top), style, Baseline::Top)
            .draw(display)?;
    }

    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────
