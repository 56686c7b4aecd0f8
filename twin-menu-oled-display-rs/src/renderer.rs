//! [`MenuRenderer`] implementations for `embedded-graphics` targets.
//!
//! - [`GraphicsRenderer`] draws straight into any monochrome
//!   [`DrawTarget`], for hosts that own their display and call
//!   `MenuSet::draw()` synchronously.
//! - [`FrameRecorder`] only captures a [`MenuFrame`], letting the caller
//!   decide whether the frame is worth an I2C flush.

use core::convert::Infallible;

use embedded_graphics::{draw_target::DrawTarget, pixelcolor::BinaryColor};
use twin_menu::{MenuRenderer, MenuView};

use crate::layout::{render_frame, DisplayConfig, MenuFrame};

/// Renders menus onto a borrowed `embedded-graphics` target.
///
/// Each call clears the target before drawing. Flushing a buffered
/// display afterwards is up to the caller.
///
/// # Example
///
/// ```no_run
/// # use twin_menu::MenuSet;
/// # use twin_menu_oled_display_rs::{DisplayConfig, GraphicsRenderer};
/// # fn example(
/// #     display: &mut impl embedded_graphics::draw_target::DrawTarget<Color = embedded_graphics::pixelcolor::BinaryColor>,
/// #     menu_set: &MenuSet,
/// # ) {
/// let config = DisplayConfig::default();
/// let mut renderer = GraphicsRenderer::new(display, &config);
/// menu_set.draw(&mut renderer).ok();
/// # }
/// ```
pub struct GraphicsRenderer<'d, D> {
    target: &'d mut D,
    config: &'d DisplayConfig,
}

impl<'d, D> GraphicsRenderer<'d, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: &'d mut D, config: &'d DisplayConfig) -> Self {
        Self { target, config }
    }
}

impl<D> MenuRenderer for GraphicsRenderer<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Error = D::Error;

    fn render_menu(&mut self, view: &MenuView<'_, '_>) -> Result<(), Self::Error> {
        let frame = MenuFrame::from_view(view, self.config.visible_rows());
        self.target.clear(BinaryColor::Off)?;
        render_frame(&mut *self.target, &frame, self.config)
    }
}

/// Captures the most recently drawn menu as a [`MenuFrame`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameRecorder {
    rows: usize,
    frame: MenuFrame,
}

impl FrameRecorder {
    /// Recorder keeping as many rows as `config` can show.
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            rows: config.visible_rows(),
            frame: MenuFrame::default(),
        }
    }

    pub fn frame(&self) -> &MenuFrame {
        &self.frame
    }
}

impl MenuRenderer for FrameRecorder {
    type Error = Infallible;

    fn render_menu(&mut self, view: &MenuView<'_, '_>) -> Result<(), Infallible> {
        self.frame = MenuFrame::from_view(view, self.rows);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::*;
    use twin_menu::{ButtonEvent, Menu, MenuSet};

    use super::*;

    /// Counts lit pixels; every `clear` resets the count.
    #[derive(Default)]
    struct LitCounter {
        lit: usize,
        clears: usize,
    }

    impl OriginDimensions for LitCounter {
        fn size(&self) -> Size {
            Size::new(128, 64)
        }
    }

    impl DrawTarget for LitCounter {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            self.lit += pixels.into_iter().filter(|Pixel(_, c)| c.is_on()).count();
            Ok(())
        }

        fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
            self.clears += 1;
            self.lit = if color.is_on() { 128 * 64 } else { 0 };
            Ok(())
        }
    }

    fn session() -> MenuSet<'static, 2, 8> {
        let mut brightness = Menu::new("Brightness");
        brightness.add_menu_item("Low", "low").unwrap();
        brightness.add_menu_item("High", "high").unwrap();

        let mut interval = Menu::new("Interval");
        for caption in ["1 s", "2 s", "5 s", "10 s", "30 s", "60 s", "5 min"] {
            interval.add_menu_item(caption, caption).unwrap();
        }

        let mut set = MenuSet::new();
        set.add_menu(brightness).unwrap();
        set.add_menu(interval).unwrap();
        set
    }

    #[test]
    fn recorder_captures_current_menu() {
        let mut set = session();
        set.start();
        set.handle_event(ButtonEvent::A);

        let mut recorder = FrameRecorder::new(&DisplayConfig::default());
        set.draw(&mut recorder).unwrap();

        let frame = recorder.frame();
        assert_eq!(frame.title_str(), "Brightness");
        assert_eq!(frame.row_count, 2);
        assert_eq!(frame.selected_row(), Some(1));
    }

    #[test]
    fn recorder_windows_long_menu() {
        let mut set = session();
        set.start();
        set.handle_event(ButtonEvent::B);
        for _ in 0..6 {
            set.handle_event(ButtonEvent::A);
        }

        let mut recorder = FrameRecorder::new(&DisplayConfig::default());
        set.draw(&mut recorder).unwrap();

        let frame = recorder.frame();
        assert_eq!(frame.title_str(), "Interval");
        assert_eq!(frame.row_count, 5);
        assert_eq!(frame.first_item, 2);
        assert_eq!(frame.row_str(4), "5 min");
        assert_eq!(frame.selected_row(), Some(4));
    }

    #[test]
    fn recorder_unchanged_while_inactive() {
        let set = session();
        let mut recorder = FrameRecorder::new(&DisplayConfig::default());
        set.draw(&mut recorder).unwrap();
        assert_eq!(*recorder.frame(), MenuFrame::default());
    }

    #[test]
    fn graphics_renderer_clears_then_draws() {
        let mut set = session();
        set.start();

        let config = DisplayConfig::default();
        let mut target = LitCounter::default();
        set.draw(&mut GraphicsRenderer::new(&mut target, &config)).unwrap();

        assert_eq!(target.clears, 1);
        assert!(target.lit > 0);
    }

    #[test]
    fn graphics_renderer_skips_inactive_set() {
        let set = session();
        let config = DisplayConfig::default();
        let mut target = LitCounter::default();
        set.draw(&mut GraphicsRenderer::new(&mut target, &config)).unwrap();

        assert_eq!(target.clears, 0);
        assert_eq!(target.lit, 0);
    }
}
