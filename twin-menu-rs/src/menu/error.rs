use core::fmt;

/// Errors raised by [`Menu`](super::Menu) and [`MenuSet`](super::MenuSet)
/// when a precondition is not met.
///
/// None of these leave the menu state partially modified: the operation
/// that fails is rejected as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuError {
    /// The menu has no items, so there is nothing to select or cycle.
    EmptyMenu,
    /// Item index is out of bounds (must be < the menu's item count).
    ItemIndexOutOfRange,
    /// The menu's item storage is at capacity.
    MenuFull,
    /// The menu set's menu storage is at capacity.
    MenuSetFull,
    /// Structural change attempted while a menu session is running.
    SessionActive,
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MenuError::EmptyMenu => write!(f, "menu has no items"),
            MenuError::ItemIndexOutOfRange => write!(f, "menu item index out of range"),
            MenuError::MenuFull => write!(f, "menu item capacity exhausted"),
            MenuError::MenuSetFull => write!(f, "menu set capacity exhausted"),
            MenuError::SessionActive => write!(f, "menu session is active"),
        }
    }
}
