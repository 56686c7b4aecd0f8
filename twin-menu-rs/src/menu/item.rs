/// A single selectable entry of a [`Menu`](super::Menu).
///
/// Both the caption and the value are borrowed: the item never copies or
/// validates them. The value is opaque to the menu engine; firmware
/// typically uses it as a setting identifier read back after the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuItem<'a> {
    caption: &'a str,
    value: &'a str,
}

impl<'a> MenuItem<'a> {
    /// Create an item from its display caption and payload value.
    pub const fn new(caption: &'a str, value: &'a str) -> Self {
        Self { caption, value }
    }

    /// Label shown on the display.
    pub fn caption(&self) -> &'a str {
        self.caption
    }

    pub fn set_caption(&mut self, caption: &'a str) {
        self.caption = caption;
    }

    /// Payload reported when this item is the final selection.
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// Rebind the payload, e.g. once a late-computed identifier is known.
    pub fn set_value(&mut self, value: &'a str) {
        self.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_caption_and_value() {
        let item = MenuItem::new("Bright", "b");
        assert_eq!(item.caption(), "Bright");
        assert_eq!(item.value(), "b");
    }

    #[test]
    fn setters_replace_fields_independently() {
        let mut item = MenuItem::new("Low", "1");
        item.set_value("low");
        assert_eq!(item.caption(), "Low");
        assert_eq!(item.value(), "low");

        item.set_caption("Quiet");
        assert_eq!(item.caption(), "Quiet");
        assert_eq!(item.value(), "low");
    }
}
