//! The display-side contract of the menu engine.
//!
//! [`MenuSet::draw()`](crate::menu::MenuSet::draw) hands a [`MenuView`] of
//! the active menu to a [`MenuRenderer`]. The engine decides *what* is
//! shown; the renderer owns fonts, layout and the physical display.

use crate::menu::MenuItem;

/// Read-only view of one menu as it should appear on screen.
#[derive(Debug, Clone, Copy)]
pub struct MenuView<'v, 'a> {
    title: &'a str,
    items: &'v [MenuItem<'a>],
    selected_idx: usize,
}

impl<'v, 'a> MenuView<'v, 'a> {
    pub fn new(title: &'a str, items: &'v [MenuItem<'a>], selected_idx: usize) -> Self {
        Self {
            title,
            items,
            selected_idx,
        }
    }

    pub fn title(&self) -> &'a str {
        self.title
    }

    /// Item captions in display order.
    pub fn captions(&self) -> impl Iterator<Item = &'a str> + 'v {
        let items: &'v [MenuItem<'a>] = self.items;
        items.iter().map(MenuItem::caption)
    }

    /// Index of the highlighted item.
    pub fn selected_idx(&self) -> usize {
        self.selected_idx
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Display collaborator used by [`MenuSet::draw()`](crate::menu::MenuSet::draw).
///
/// Implementations render the title, the ordered captions and a highlight
/// on the selected entry. Errors are passed straight back to the caller
/// of `draw()`.
pub trait MenuRenderer {
    type Error;

    fn render_menu(&mut self, view: &MenuView<'_, '_>) -> Result<(), Self::Error>;
}

impl<R: MenuRenderer + ?Sized> MenuRenderer for &mut R {
    type Error = R::Error;

    fn render_menu(&mut self, view: &MenuView<'_, '_>) -> Result<(), Self::Error> {
        (**self).render_menu(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_exposes_captions_in_order() {
        let items = [MenuItem::new("On", "1"), MenuItem::new("Off", "0")];
        let view = MenuView::new("Power", &items, 1);

        assert_eq!(view.title(), "Power");
        assert_eq!(view.len(), 2);
        assert_eq!(view.selected_idx(), 1);

        let mut captions = view.captions();
        assert_eq!(captions.next(), Some("On"));
        assert_eq!(captions.next(), Some("Off"));
        assert_eq!(captions.next(), None);
    }
}
