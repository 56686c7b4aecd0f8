//! Async menu session on the OLED.
//!
//! [`menu_session_task`] runs the full host protocol of a
//! [`MenuSet`]: `start()`, then `tick()` + `draw()` at the configured
//! refresh rate until the last menu is confirmed. Button presses arrive
//! over an embassy [`Channel`](embassy_sync::channel::Channel).

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Receiver;
use embedded_hal_async::i2c::I2c;
use twin_menu::{ButtonEvent, ButtonInput, MenuSet};

use crate::driver::OledDriver;
use crate::error::OledError;
use crate::layout::{DisplayConfig, FrameChanges, MenuFrame};
use crate::renderer::FrameRecorder;

/// [`ButtonInput`] over the receiving end of an embassy channel.
///
/// Never waits: an empty channel polls as `None`.
pub struct ChannelInput<'ch, M: RawMutex, const Q: usize> {
    receiver: Receiver<'ch, M, ButtonEvent, Q>,
}

impl<'ch, M: RawMutex, const Q: usize> ChannelInput<'ch, M, Q> {
    pub fn new(receiver: Receiver<'ch, M, ButtonEvent, Q>) -> Self {
        Self { receiver }
    }
}

impl<M: RawMutex, const Q: usize> ButtonInput for ChannelInput<'_, M, Q> {
    fn poll_event(&mut self) -> Option<ButtonEvent> {
        self.receiver.try_receive().ok()
    }
}

/// How a session run by [`menu_session_task`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionOutcome {
    /// The last menu was confirmed.
    Completed {
        /// Whether any menu ended on a different item than it started on.
        modified: bool,
    },
    /// The set had no menus, so nothing was shown.
    NoMenus,
}

/// Run one menu session to completion.
///
/// This is a regular `async fn`, **not** an Embassy `#[task]`; wrap it in
/// a concrete task since Embassy tasks cannot be generic:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn menu_task(
///     mut driver: OledDriver<MyI2c>,
///     mut menus: MenuSet<'static>,
///     events: Receiver<'static, CriticalSectionRawMutex, ButtonEvent, 4>,
/// ) {
///     let config = DisplayConfig::default();
///     let outcome = menu_session_task(&mut driver, &mut menus, events, &config).await;
/// }
/// ```
///
/// # Control flow
///
/// 1. Initialise the display if needed, then `start()` the set.
/// 2. Every `config.update_period_ms()`:
///    - **Draw**: `draw()` into a [`FrameRecorder`]; flush to the panel
///      only when the frame differs from the last one shown.
///    - **Tick**: `tick()` with at most one pending press.
/// 3. When `tick()` reports the end of the session, blank the panel.
///
/// # Errors
///
/// Initialisation failure is returned. Flush failures are logged and the
/// frame is retried on the next period; a failed final blank is logged.
pub async fn menu_session_task<I2C, M, const MENUS: usize, const ITEMS: usize, const Q: usize>(
    driver: &mut OledDriver<I2C>,
    menu_set: &mut MenuSet<'_, MENUS, ITEMS>,
    events: Receiver<'_, M, ButtonEvent, Q>,
    config: &DisplayConfig,
) -> Result<SessionOutcome, OledError>
where
    I2C: I2c,
    M: RawMutex,
{
    // ── Initialisation ───────────────────────────────────────────────
    if !driver.is_initialized() {
        driver.init().await?;
        #[cfg(feature = "defmt")]
        defmt::info!("OLED initialised");
    }

    if !menu_set.start() {
        #[cfg(feature = "defmt")]
        defmt::warn!("menu session not started: no menus");
        return Ok(SessionOutcome::NoMenus);
    }

    let period = embassy_time::Duration::from_millis(config.update_period_ms());
    let mut input = ChannelInput::new(events);
    let mut recorder = FrameRecorder::new(config);
    let mut shown: Option<MenuFrame> = None;

    // ── Main loop ────────────────────────────────────────────────────
    loop {
        // ── Draw: flush only changed frames ──────────────────────────
        match menu_set.draw(&mut recorder) {
            Ok(()) => {}
            Err(never) => match never {},
        }
        let frame = *recorder.frame();
        let changed = shown
            .as_ref()
            .is_none_or(|last| FrameChanges::detect(last, &frame).any_changed());

        if changed {
            match driver.show(&frame, config).await {
                Ok(()) => shown = Some(frame),
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    defmt::error!("Menu flush failed: {}", _e);
                }
            }
        }

        embassy_time::Timer::after(period).await;

        // ── Tick: consume at most one press ──────────────────────────
        if !menu_set.tick(&mut input) {
            break;
        }
    }

    let modified = menu_set.is_modified();
    #[cfg(feature = "defmt")]
    defmt::info!("menu session complete, modified={}", modified);

    if let Err(_e) = driver.blank().await {
        #[cfg(feature = "defmt")]
        defmt::warn!("Failed to blank OLED: {}", _e);
    }

    Ok(SessionOutcome::Completed { modified })
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use embassy_sync::channel::Channel;
    use twin_menu::Menu;

    use super::*;

    #[test]
    fn empty_channel_polls_none() {
        let channel: Channel<NoopRawMutex, ButtonEvent, 4> = Channel::new();
        let mut input = ChannelInput::new(channel.receiver());
        assert_eq!(input.poll_event(), None);
    }

    #[test]
    fn events_arrive_one_at_a_time_in_order() {
        let channel: Channel<NoopRawMutex, ButtonEvent, 4> = Channel::new();
        channel.try_send(ButtonEvent::A).unwrap();
        channel.try_send(ButtonEvent::B).unwrap();

        let mut input = ChannelInput::new(channel.receiver());
        assert_eq!(input.poll_event(), Some(ButtonEvent::A));
        assert_eq!(input.poll_event(), Some(ButtonEvent::B));
        assert_eq!(input.poll_event(), None);
    }

    #[test]
    fn channel_drives_session_to_completion() {
        let mut mode = Menu::new("Mode");
        mode.add_menu_item("Auto", "auto").unwrap();
        mode.add_menu_item("Manual", "manual").unwrap();
        let mut sound = Menu::new("Sound");
        sound.add_menu_item("On", "on").unwrap();
        sound.add_menu_item("Off", "off").unwrap();

        let mut menus: MenuSet<'static, 2, 2> = MenuSet::new();
        menus.add_menu(mode).unwrap();
        menus.add_menu(sound).unwrap();
        assert!(menus.start());

        let channel: Channel<NoopRawMutex, ButtonEvent, 4> = Channel::new();
        let mut input = ChannelInput::new(channel.receiver());
        for event in [ButtonEvent::A, ButtonEvent::B, ButtonEvent::B] {
            channel.try_send(event).unwrap();
        }

        assert!(menus.tick(&mut input));
        assert!(menus.tick(&mut input));
        assert_eq!(menus.menu_idx(), Some(1));
        assert!(!menus.tick(&mut input));

        assert!(menus.is_modified());
        let mut values = menus.values();
        assert_eq!(values.next(), Some("manual"));
        assert_eq!(values.next(), Some("on"));
    }
}
