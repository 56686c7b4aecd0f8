//! SSD1306 wrapper that puts [`MenuFrame`]s on the panel.
//!
//! [`OledDriver`] owns the display in async buffered-graphics mode:
//! construction without I2C traffic, explicit async initialisation, then
//! one [`show()`](OledDriver::show) per changed frame.

use display_interface_i2c::I2CInterface;
use embedded_hal_async::i2c::I2c;
use ssd1306::{mode::BufferedGraphicsModeAsync, prelude::*, I2CDisplayInterface, Ssd1306Async};

use crate::error::OledError;
use crate::layout::{render_frame, DisplayConfig, MenuFrame};

/// Concrete display type used internally by [`OledDriver`].
pub type Display<I2C> =
    Ssd1306Async<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsModeAsync<DisplaySize128x64>>;

/// Async driver for an SSD1306 128×64 OLED showing the menu screen.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`]: no I2C traffic.
/// 2. [`OledDriver::init()`]: sends the SSD1306 initialisation sequence.
/// 3. [`OledDriver::show()`]: clear, render and flush a [`MenuFrame`];
///    or draw manually via [`display_mut()`](Self::display_mut) and
///    [`flush()`](Self::flush).
/// 4. [`OledDriver::blank()`]: clear the panel when the session ends.
pub struct OledDriver<I2C> {
    display: Display<I2C>,
    initialized: bool,
}

impl<I2C> OledDriver<I2C>
where
    I2C: I2c,
{
    /// Construct an uninitialised driver.
    ///
    /// * `i2c`: I2C peripheral or shared-bus device (owned).
    /// * `address`: 7-bit address, typically `0x3C` or `0x3D`.
    pub fn new(i2c: I2C, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let display = Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            display,
            initialized: false,
        }
    }

    /// Initialise the SSD1306 hardware.
    ///
    /// # Errors
    ///
    /// [`OledError::InitializationFailed`] if the panel does not respond.
    pub async fn init(&mut self) -> Result<(), OledError> {
        self.display
            .init()
            .await
            .map_err(|_| OledError::InitializationFailed)?;
        self.initialized = true;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Clear the in-memory frame buffer. No I2C traffic.
    pub fn clear_buffer(&mut self) {
        self.display.clear_buffer();
    }

    /// Frame buffer as an `embedded-graphics` [`DrawTarget`], or `None`
    /// before [`init()`](Self::init).
    ///
    /// [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget
    pub fn display_mut(&mut self) -> Option<&mut Display<I2C>> {
        self.initialized.then_some(&mut self.display)
    }

    /// Transfer the frame buffer to the panel (~20 ms at 400 kHz).
    ///
    /// # Errors
    ///
    /// [`OledError::NotInitialized`] before [`init()`](Self::init), or
    /// [`OledError::Display`] on a bus failure.
    pub async fn flush(&mut self) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        self.display.flush().await?;
        Ok(())
    }

    /// Replace the panel contents with `frame`.
    pub async fn show(&mut self, frame: &MenuFrame, config: &DisplayConfig) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        self.display.clear_buffer();
        render_frame(&mut self.display, frame, config)?;
        self.flush().await
    }

    /// Clear the panel.
    pub async fn blank(&mut self) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        self.display.clear_buffer();
        self.flush().await
    }
}
