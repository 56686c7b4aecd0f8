//! Two-button menu navigation for small embedded displays.
//!
//! - [`menu`]: [`MenuItem`](menu::MenuItem), [`Menu`](menu::Menu) and the
//!   [`MenuSet`](menu::MenuSet) state machine.
//! - [`input`]: the [`ButtonEvent`](input::ButtonEvent)s the state machine
//!   consumes and the [`ButtonInput`](input::ButtonInput) collaborator.
//! - [`view`]: the [`MenuRenderer`](view::MenuRenderer) collaborator that
//!   puts the current menu on a display.
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`] and `defmt::Format` on
//!   public data and error types.

#![no_std]

pub mod input;
pub mod menu;
pub mod view;

pub use input::{ButtonEvent, ButtonInput, ButtonQueue};
pub use menu::{Menu, MenuError, MenuItem, MenuSet};
pub use view::{MenuRenderer, MenuView};
