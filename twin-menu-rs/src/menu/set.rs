use heapless::Vec;

use super::error::MenuError;
use super::list::Menu;
use super::{MAX_MENUS, MAX_MENU_ITEMS};
use crate::input::{ButtonEvent, ButtonInput};
use crate::view::{MenuRenderer, MenuView};

/// An ordered sequence of [`Menu`]s driven by two buttons.
///
/// The set is either **inactive** (initial state, and again once the last
/// menu is confirmed) or **active**, with one menu current at
/// [`menu_idx()`](Self::menu_idx).
///
/// ```text
///            start()                      B on last menu
/// Inactive ───────────▶ Active(menu 0) ─ ─ ─ ─ ─ ─ ─ ─ ─▶ Inactive
///                        │  ▲     │
///                     A  └──┘     │ B
///              (next item)        ▼
///                           Active(menu 1) ...
/// ```
///
/// # Modification tracking
///
/// When a menu becomes current its cursor is snapshotted. Confirming it
/// with button B compares the cursor to that snapshot; any difference sets
/// [`is_modified()`](Self::is_modified), which stays set until the next
/// [`start()`](Self::start). Cycling all the way round back to the
/// starting item therefore does not count as a modification.
///
/// # Examples
///
/// ```
/// use twin_menu::input::{ButtonEvent, ButtonQueue};
/// use twin_menu::menu::{Menu, MenuSet};
///
/// let mut mode: Menu = Menu::new("Mode");
/// mode.add_menu_item("Auto", "auto").unwrap();
/// mode.add_menu_item("Manual", "manual").unwrap();
///
/// let mut set: MenuSet = MenuSet::new();
/// set.add_menu(mode).unwrap();
/// assert!(set.start());
///
/// let mut buttons: ButtonQueue = ButtonQueue::new();
/// buttons.push(ButtonEvent::A).unwrap();
/// buttons.push(ButtonEvent::B).unwrap();
///
/// assert!(set.tick(&mut buttons)); // A: cycle to "Manual"
/// assert!(!set.tick(&mut buttons)); // B: last menu confirmed, session over
/// assert!(set.is_modified());
/// assert_eq!(set.menu(0).unwrap().value(), Ok("manual"));
/// ```
#[derive(Debug, Clone)]
pub struct MenuSet<'a, const M: usize = MAX_MENUS, const N: usize = MAX_MENU_ITEMS> {
    menus: Vec<Menu<'a, N>, M>,
    menu_idx: usize,
    started: bool,
    modified: bool,
    prev_menu_selected_idx: usize,
}

impl<'a, const M: usize, const N: usize> Default for MenuSet<'a, M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const M: usize, const N: usize> MenuSet<'a, M, N> {
    /// Create an empty, inactive set.
    pub const fn new() -> Self {
        Self {
            menus: Vec::new(),
            menu_idx: 0,
            started: false,
            modified: false,
            prev_menu_selected_idx: 0,
        }
    }

    // ── Construction ─────────────────────────────────────────────────

    /// Append a menu; menus are shown in insertion order.
    ///
    /// # Errors
    ///
    /// * [`MenuError::SessionActive`] if called after [`start()`](Self::start)
    ///   while the session is still running.
    /// * [`MenuError::EmptyMenu`] if `menu` has no items.
    /// * [`MenuError::MenuSetFull`] once `M` menus are stored.
    pub fn add_menu(&mut self, menu: Menu<'a, N>) -> Result<(), MenuError> {
        if self.started {
            #[cfg(feature = "defmt")]
            defmt::warn!("add_menu rejected: session active");
            return Err(MenuError::SessionActive);
        }
        if menu.is_empty() {
            #[cfg(feature = "defmt")]
            defmt::warn!("add_menu rejected: menu '{}' has no items", menu.title());
            return Err(MenuError::EmptyMenu);
        }
        self.menus.push(menu).map_err(|_| MenuError::MenuSetFull)
    }

    // ── Session control ──────────────────────────────────────────────

    /// Begin a menu session on the first menu.
    ///
    /// Clears the modified flag and snapshots the first menu's cursor.
    /// Returns `false`, leaving the set inactive, when there are no menus
    /// to show. Calling it on an active set restarts the session.
    pub fn start(&mut self) -> bool {
        let Some(first) = self.menus.first() else {
            #[cfg(feature = "defmt")]
            defmt::warn!("start: no menus");
            return false;
        };

        self.prev_menu_selected_idx = first.selected_idx();
        self.menu_idx = 0;
        self.modified = false;
        self.started = true;

        #[cfg(feature = "defmt")]
        defmt::debug!("menu session started ({} menus)", self.menus.len());
        true
    }

    /// One iteration of the host loop.
    ///
    /// Polls at most one event from `input` and applies it with
    /// [`handle_event()`](Self::handle_event). Returns `true` while the
    /// session continues (including when no event was pending) and `false`
    /// once the last menu has been confirmed. On an inactive set the input
    /// is not polled and `false` is returned.
    pub fn tick<I: ButtonInput + ?Sized>(&mut self, input: &mut I) -> bool {
        if !self.started {
            return false;
        }
        match input.poll_event() {
            Some(event) => self.handle_event(event),
            None => true,
        }
    }

    /// Apply one button press to the active session.
    ///
    /// * [`ButtonEvent::A`] cycles the current menu to its next item.
    /// * [`ButtonEvent::B`] confirms the current menu and activates the next
    ///   one, or ends the session after the last menu.
    ///
    /// Returns whether the session is still active afterwards. A no-op
    /// returning `false` on an inactive set.
    pub fn handle_event(&mut self, event: ButtonEvent) -> bool {
        if !self.started {
            return false;
        }

        match event {
            ButtonEvent::A => {
                // add_menu() refuses empty menus, so Err is unreachable.
                match self.menus[self.menu_idx].next_item() {
                    Ok(_selected) => {
                        #[cfg(feature = "defmt")]
                        defmt::debug!("menu {}: cursor -> {}", self.menu_idx, _selected);
                    }
                    Err(_e) => {
                        #[cfg(feature = "defmt")]
                        defmt::error!("menu {}: cannot cycle: {}", self.menu_idx, _e);
                    }
                }
                true
            }
            ButtonEvent::B => self.confirm_current(),
        }
    }

    /// Render the current menu. No-op while inactive.
    ///
    /// # Errors
    ///
    /// Whatever the renderer reports; the set itself is never modified.
    pub fn draw<R: MenuRenderer + ?Sized>(&self, renderer: &mut R) -> Result<(), R::Error> {
        match self.current_menu() {
            Some(menu) => {
                let view = MenuView::new(menu.title(), menu.items(), menu.selected_idx());
                renderer.render_menu(&view)
            }
            None => Ok(()),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// `true` if any confirmed menu ended on a different item than it
    /// started on during the current (or last) session.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Index of the current menu, or `None` while inactive.
    pub fn menu_idx(&self) -> Option<usize> {
        self.started.then_some(self.menu_idx)
    }

    /// The menu currently shown, or `None` while inactive.
    pub fn current_menu(&self) -> Option<&Menu<'a, N>> {
        self.menu_idx().and_then(|idx| self.menus.get(idx))
    }

    pub fn menu(&self, idx: usize) -> Option<&Menu<'a, N>> {
        self.menus.get(idx)
    }

    /// Mutable access to a stored menu between sessions.
    ///
    /// Lets the host re-seed a cursor or rebind values (for example from
    /// stored settings) before the next [`start()`](Self::start). Returns
    /// `None` for an unknown index and while a session is active; a cursor
    /// set here becomes that menu's default at activation.
    pub fn menu_mut(&mut self, idx: usize) -> Option<&mut Menu<'a, N>> {
        if self.started {
            #[cfg(feature = "defmt")]
            defmt::warn!("menu_mut rejected: session active");
            return None;
        }
        self.menus.get_mut(idx)
    }

    pub fn menus(&self) -> &[Menu<'a, N>] {
        &self.menus
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    /// Selected value of every menu, in menu order.
    ///
    /// Intended for reading the outcome after [`tick()`](Self::tick) has
    /// returned `false`.
    pub fn values(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.menus.iter().filter_map(|menu| menu.value().ok())
    }

    // ── Private helpers ──────────────────────────────────────────────

    /// Button B: record a modification, then step to the next menu or end.
    fn confirm_current(&mut self) -> bool {
        let selected = self.menus[self.menu_idx].selected_idx();
        if selected != self.prev_menu_selected_idx {
            self.modified = true;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "menu {} confirmed at item {} (was {})",
            self.menu_idx,
            selected,
            self.prev_menu_selected_idx
        );

        self.menu_idx += 1;
        match self.menus.get(self.menu_idx) {
            Some(next) => {
                self.prev_menu_selected_idx = next.selected_idx();
                true
            }
            None => {
                self.started = false;
                #[cfg(feature = "defmt")]
                defmt::debug!("menu session finished, modified={}", self.modified);
                false
            }
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
