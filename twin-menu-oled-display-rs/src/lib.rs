//! SSD1306 (128×64) OLED front end for the `twin-menu` engine.
//!
//! This crate renders a [`MenuSet`]'s current menu with
//! `embedded-graphics`: a centred title bar above a list of item rows, the
//! selected row inverted. It provides
//!
//! - [`OledDriver`]: async SSD1306 wrapper in buffered-graphics mode,
//! - [`GraphicsRenderer`] / [`FrameRecorder`]: [`MenuRenderer`]
//!   implementations for any monochrome `DrawTarget`,
//! - [`menu_session_task`] *(feature `task`)*: an Embassy-friendly loop
//!   running a whole menu session from a button-event channel.
//!
//! # Quick Start
//!
//! ```ignore
//! use twin_menu_oled_display_rs::{menu_session_task, DisplayConfig, OledDriver};
//!
//! static BUTTONS: Channel<CriticalSectionRawMutex, ButtonEvent, 4> = Channel::new();
//!
//! let mut oled = OledDriver::new(i2c, 0x3C);
//! let config = DisplayConfig::default();
//! let outcome = menu_session_task(&mut oled, &mut menus, BUTTONS.receiver(), &config).await?;
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`].
//! - **`task`**: [`menu_session_task`], pulling in `embassy-sync` and
//!   `embassy-time`.
//!
//! [`MenuSet`]: twin_menu::MenuSet
//! [`MenuRenderer`]: twin_menu::MenuRenderer

#![no_std]

pub mod driver;
pub mod error;
pub mod layout;
pub mod renderer;
#[cfg(any(feature = "task", test))]
pub mod session_task;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use driver::OledDriver;
pub use error::OledError;
pub use layout::{render_frame, window_start, DisplayConfig, FrameChanges, MenuFrame};
pub use renderer::{FrameRecorder, GraphicsRenderer};
#[cfg(any(feature = "task", test))]
pub use session_task::{menu_session_task, ChannelInput, SessionOutcome};
