//! Button events consumed by the menu state machine.
//!
//! Debouncing and edge detection happen upstream; the engine only sees
//! discrete presses delivered through [`ButtonInput`].

use heapless::Deque;

/// Default depth of a [`ButtonQueue`].
pub const BUTTON_QUEUE_DEPTH: usize = 4;

/// A debounced button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Button A: cycle to the next item of the current menu.
    A,
    /// Button B: confirm the current menu and advance to the next one.
    B,
}

/// Input collaborator polled by [`MenuSet::tick()`](crate::menu::MenuSet::tick).
///
/// `poll_event()` must not block: it returns the oldest pending press, or
/// `None` when nothing is waiting.
pub trait ButtonInput {
    fn poll_event(&mut self) -> Option<ButtonEvent>;
}

impl<I: ButtonInput + ?Sized> ButtonInput for &mut I {
    fn poll_event(&mut self) -> Option<ButtonEvent> {
        (**self).poll_event()
    }
}

/// Bounded FIFO of button presses.
///
/// Useful when presses are collected in one place (an interrupt handler,
/// a GPIO polling loop) and consumed by the menu tick elsewhere.
///
/// # Examples
///
/// ```
/// use twin_menu::input::{ButtonEvent, ButtonInput, ButtonQueue};
///
/// let mut queue: ButtonQueue = ButtonQueue::new();
/// queue.push(ButtonEvent::A).unwrap();
/// queue.push(ButtonEvent::B).unwrap();
///
/// assert_eq!(queue.poll_event(), Some(ButtonEvent::A));
/// assert_eq!(queue.poll_event(), Some(ButtonEvent::B));
/// assert_eq!(queue.poll_event(), None);
/// ```
#[derive(Debug, Default)]
pub struct ButtonQueue<const Q: usize = BUTTON_QUEUE_DEPTH> {
    events: Deque<ButtonEvent, Q>,
}

impl<const Q: usize> ButtonQueue<Q> {
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
        }
    }

    /// Enqueue a press. When the queue is full the press is handed back
    /// in `Err` and the queue is unchanged.
    pub fn push(&mut self, event: ButtonEvent) -> Result<(), ButtonEvent> {
        let result = self.events.push_back(event);
        if result.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("button queue full, dropping {}", event);
        }
        result
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop every pending press.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<const Q: usize> ButtonInput for ButtonQueue<Q> {
    fn poll_event(&mut self) -> Option<ButtonEvent> {
        self.events.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_queue_polls_none() {
        let mut queue: ButtonQueue<2> = ButtonQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.poll_event(), None);
    }

    #[test]
    fn full_queue_returns_event() {
        let mut queue: ButtonQueue<2> = ButtonQueue::new();
        queue.push(ButtonEvent::A).unwrap();
        queue.push(ButtonEvent::A).unwrap();
        assert_eq!(queue.push(ButtonEvent::B), Err(ButtonEvent::B));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn clear_drops_pending_events() {
        let mut queue: ButtonQueue<2> = ButtonQueue::new();
        queue.push(ButtonEvent::B).unwrap();
        queue.clear();
        assert_eq!(queue.poll_event(), None);
    }

    #[test]
    fn mut_ref_forwards_poll() {
        fn poll_owned<I: ButtonInput>(mut input: I) -> Option<ButtonEvent> {
            input.poll_event()
        }

        let mut queue: ButtonQueue<2> = ButtonQueue::new();
        queue.push(ButtonEvent::B).unwrap();
        assert_eq!(poll_owned(&mut queue), Some(ButtonEvent::B));
        assert!(queue.is_empty());
    }
}
