//! Menu data model and the two-button navigation state machine.
//!
//! A [`MenuSet`] walks the user through a fixed sequence of [`Menu`]s,
//! each a titled list of [`MenuItem`]s. Two buttons drive it:
//!
//! ```text
//! Menu 0 "Mode":     [Auto]*  [Manual]
//! Menu 1 "Interval": [1 s]*   [5 s]    [10 s]
//! Menu 2 "Sound":    [On]*    [Off]
//!                       ^
//!                       selected_idx (A cycles right, wrapping)
//! B confirms the current menu and moves down; B on the last menu ends
//! the session.
//! ```
//!
//! # Host protocol
//!
//! 1. Build the menus and add them with [`MenuSet::add_menu()`].
//! 2. Call [`MenuSet::start()`].
//! 3. Every main-loop iteration call [`MenuSet::tick()`] with the input
//!    collaborator, then [`MenuSet::draw()`] while [`MenuSet::is_started()`].
//! 4. When `tick()` returns `false`, read [`MenuSet::values()`] and
//!    [`MenuSet::is_modified()`].
//!
//! # `no_std` Compatibility
//!
//! No heap allocation: menus and items live in `heapless::Vec`s sized by
//! const generics that default to [`MAX_MENUS`] and [`MAX_MENU_ITEMS`].
//! The optional `defmt` feature logs state transitions.

mod error;
mod item;
mod list;
mod set;

pub use error::MenuError;
pub use item::MenuItem;
pub use list::Menu;
pub use set::MenuSet;

/// Default item capacity of a [`Menu`].
pub const MAX_MENU_ITEMS: usize = 8;

/// Default menu capacity of a [`MenuSet`].
pub const MAX_MENUS: usize = 8;
