use heapless::Vec;

use super::error::MenuError;
use super::item::MenuItem;
use super::MAX_MENU_ITEMS;

/// A titled list of [`MenuItem`]s with a cyclic selection cursor.
///
/// Items are stored inline (no heap); `N` is the item capacity. Insertion
/// order is both the display order and the order button A cycles through.
///
/// **Invariant:** `selected_idx < len()` whenever the menu is non-empty.
/// The cursor only moves through [`next_item()`](Self::next_item) and the
/// checked [`set_selected_idx()`](Self::set_selected_idx).
#[derive(Debug, Clone)]
pub struct Menu<'a, const N: usize = MAX_MENU_ITEMS> {
    title: &'a str,
    items: Vec<MenuItem<'a>, N>,
    selected_idx: usize,
}

impl<'a, const N: usize> Menu<'a, N> {
    /// Create an empty menu. The cursor starts on the first item.
    pub const fn new(title: &'a str) -> Self {
        Self {
            title,
            items: Vec::new(),
            selected_idx: 0,
        }
    }

    pub fn title(&self) -> &'a str {
        self.title
    }

    /// Number of items in the menu.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in display order.
    pub fn items(&self) -> &[MenuItem<'a>] {
        &self.items
    }

    // ── Construction ─────────────────────────────────────────────────

    /// Append an item to the end of the menu.
    ///
    /// Returns [`MenuError::MenuFull`] once `N` items are stored; the menu
    /// is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_menu::menu::Menu;
    ///
    /// let mut menu: Menu = Menu::new("Volume");
    /// menu.add_menu_item("Low", "1").unwrap();
    /// menu.add_menu_item("High", "3").unwrap();
    /// assert_eq!(menu.len(), 2);
    /// assert_eq!(menu.value(), Ok("1"));
    /// ```
    pub fn add_menu_item(&mut self, caption: &'a str, value: &'a str) -> Result<(), MenuError> {
        self.items
            .push(MenuItem::new(caption, value))
            .map_err(|_| MenuError::MenuFull)
    }

    // ── Item access ──────────────────────────────────────────────────

    /// Returns the item at `idx`, or [`MenuError::ItemIndexOutOfRange`].
    pub fn menu_item(&self, idx: usize) -> Result<&MenuItem<'a>, MenuError> {
        self.items.get(idx).ok_or(MenuError::ItemIndexOutOfRange)
    }

    /// Mutable counterpart of [`menu_item()`](Self::menu_item).
    pub fn menu_item_mut(&mut self, idx: usize) -> Result<&mut MenuItem<'a>, MenuError> {
        self.items.get_mut(idx).ok_or(MenuError::ItemIndexOutOfRange)
    }

    /// The item under the cursor, or [`MenuError::EmptyMenu`].
    pub fn selected_item(&self) -> Result<&MenuItem<'a>, MenuError> {
        self.items.get(self.selected_idx).ok_or(MenuError::EmptyMenu)
    }

    // ── Cursor ───────────────────────────────────────────────────────

    pub fn selected_idx(&self) -> usize {
        self.selected_idx
    }

    /// Move the cursor to `idx`.
    ///
    /// Rejects `idx >= len()` with [`MenuError::ItemIndexOutOfRange`] and
    /// leaves the cursor where it was, so the cursor invariant holds on
    /// every call path.
    pub fn set_selected_idx(&mut self, idx: usize) -> Result<(), MenuError> {
        if idx >= self.items.len() {
            return Err(MenuError::ItemIndexOutOfRange);
        }
        self.selected_idx = idx;
        Ok(())
    }

    /// Advance the cursor by one, wrapping from the last item to the first.
    ///
    /// Returns the new cursor position, or [`MenuError::EmptyMenu`] when
    /// there is nothing to cycle through.
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_menu::menu::Menu;
    ///
    /// let mut menu: Menu = Menu::new("Mode");
    /// menu.add_menu_item("Auto", "auto").unwrap();
    /// menu.add_menu_item("Manual", "manual").unwrap();
    ///
    /// assert_eq!(menu.next_item(), Ok(1));
    /// assert_eq!(menu.next_item(), Ok(0)); // wrapped
    /// ```
    pub fn next_item(&mut self) -> Result<usize, MenuError> {
        let len = self.items.len();
        if len == 0 {
            return Err(MenuError::EmptyMenu);
        }
        self.selected_idx = (self.selected_idx + 1) % len;
        Ok(self.selected_idx)
    }

    // ── Selected value ───────────────────────────────────────────────

    /// Value of the item under the cursor.
    pub fn value(&self) -> Result<&'a str, MenuError> {
        self.selected_item().map(MenuItem::value)
    }

    /// Rebind the value of the item under the cursor.
    pub fn set_value(&mut self, value: &'a str) -> Result<(), MenuError> {
        let item = self
            .items
            .get_mut(self.selected_idx)
            .ok_or(MenuError::EmptyMenu)?;
        item.set_value(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Menu<'static, 4> {
        let mut menu = Menu::new("Letters");
        menu.add_menu_item("A", "a").unwrap();
        menu.add_menu_item("B", "b").unwrap();
        menu.add_menu_item("C", "c").unwrap();
        menu
    }

    #[test]
    fn new_menu_is_empty_with_cursor_at_zero() {
        let menu: Menu<'_, 4> = Menu::new("Empty");
        assert_eq!(menu.title(), "Empty");
        assert!(menu.is_empty());
        assert_eq!(menu.len(), 0);
        assert_eq!(menu.selected_idx(), 0);
    }

    #[test]
    fn items_keep_insertion_order() {
        let menu = abc();
        let captions: [&str; 3] = core::array::from_fn(|i| menu.items()[i].caption());
        assert_eq!(captions, ["A", "B", "C"]);
        assert_eq!(menu.menu_item(2).unwrap().value(), "c");
    }

    #[test]
    fn add_menu_item_rejects_past_capacity() {
        let mut menu: Menu<'_, 2> = Menu::new("Tiny");
        menu.add_menu_item("1", "1").unwrap();
        menu.add_menu_item("2", "2").unwrap();
        assert_eq!(menu.add_menu_item("3", "3"), Err(MenuError::MenuFull));
        assert_eq!(menu.len(), 2);
    }

    #[test]
    fn menu_item_out_of_range() {
        let menu = abc();
        assert_eq!(menu.menu_item(3), Err(MenuError::ItemIndexOutOfRange));
        assert_eq!(menu.menu_item(100), Err(MenuError::ItemIndexOutOfRange));
    }

    #[test]
    fn menu_item_mut_edits_in_place() {
        let mut menu = abc();
        menu.menu_item_mut(1).unwrap().set_caption("Bee");
        assert_eq!(menu.menu_item(1).unwrap().caption(), "Bee");
        assert!(menu.menu_item_mut(5).is_err());
    }

    #[test]
    fn next_item_wraps_around() {
        let mut menu = abc();
        assert_eq!(menu.next_item(), Ok(1));
        assert_eq!(menu.next_item(), Ok(2));
        assert_eq!(menu.next_item(), Ok(0));
    }

    #[test]
    fn next_item_len_times_returns_to_start() {
        let mut menu = abc();
        for start in 0..menu.len() {
            menu.set_selected_idx(start).unwrap();
            for _ in 0..menu.len() {
                menu.next_item().unwrap();
            }
            assert_eq!(menu.selected_idx(), start);
        }
    }

    #[test]
    fn single_item_menu_stays_put() {
        let mut menu: Menu<'_, 1> = Menu::new("One");
        menu.add_menu_item("Only", "only").unwrap();
        assert_eq!(menu.next_item(), Ok(0));
        assert_eq!(menu.value(), Ok("only"));
    }

    #[test]
    fn empty_menu_operations_fail_explicitly() {
        let mut menu: Menu<'_, 4> = Menu::new("Empty");
        assert_eq!(menu.next_item(), Err(MenuError::EmptyMenu));
        assert_eq!(menu.value(), Err(MenuError::EmptyMenu));
        assert_eq!(menu.set_value("x"), Err(MenuError::EmptyMenu));
        assert_eq!(menu.selected_item(), Err(MenuError::EmptyMenu));
        assert_eq!(menu.selected_idx(), 0);
    }

    #[test]
    fn set_selected_idx_checks_range() {
        let mut menu = abc();
        assert!(menu.set_selected_idx(2).is_ok());
        assert_eq!(menu.value(), Ok("c"));

        assert_eq!(menu.set_selected_idx(3), Err(MenuError::ItemIndexOutOfRange));
        // Cursor unchanged after the rejected call.
        assert_eq!(menu.selected_idx(), 2);
    }

    #[test]
    fn value_follows_cursor() {
        let mut menu = abc();
        assert_eq!(menu.value(), Ok("a"));
        menu.next_item().unwrap();
        assert_eq!(menu.value(), Ok("b"));
    }

    #[test]
    fn set_value_touches_only_selected_item() {
        let mut menu = abc();
        menu.next_item().unwrap();
        menu.set_value("bee").unwrap();

        assert_eq!(menu.menu_item(0).unwrap().value(), "a");
        assert_eq!(menu.menu_item(1).unwrap().value(), "bee");
        assert_eq!(menu.menu_item(2).unwrap().value(), "c");
    }
}
