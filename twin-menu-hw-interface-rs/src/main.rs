//! twin-menu-hw-interface
//!
//! Two-button settings menu firmware for the Raspberry Pi Pico 2. Wires the
//! library crates into a live session:
//!
//! 1. A button is pressed; its task sees the falling edge on the GPIO.
//! 2. After the debounce delay the task re-reads the pin and, if still
//!    pressed, sends a [`ButtonEvent`] into the event channel.
//! 3. The menu task ticks the [`MenuSet`] at 30 Hz, consuming at most one
//!    event per tick, and redraws the OLED whenever the screen changes.
//! 4. When the last menu is confirmed the panel is blanked and the
//!    selected values are logged.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use twin_menu::{ButtonEvent, Menu, MenuError, MenuSet};
use twin_menu_oled_display_rs::{menu_session_task, DisplayConfig, OledDriver, SessionOutcome};

// ---------------------------------------------------------------------------
// Boot block and interrupt binding
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

// Wire the I2C0 peripheral interrupt to Embassy's async handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

// ---------------------------------------------------------------------------
// Static storage and constants
// ---------------------------------------------------------------------------

/// Depth of the button event channel.
const EVENT_QUEUE_DEPTH: usize = 4;

/// Time a press must stay low before it counts.
const DEBOUNCE_MS: u64 = 20;

/// Debounced presses from both button tasks to the menu task.
static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonEvent, EVENT_QUEUE_DEPTH> =
    Channel::new();

// ---------------------------------------------------------------------------
// Type aliases
// ---------------------------------------------------------------------------

type OledI2c = I2c<'static, I2C0, i2c::Async>;

type EventSender = Sender<'static, CriticalSectionRawMutex, ButtonEvent, EVENT_QUEUE_DEPTH>;

type EventReceiver = Receiver<'static, CriticalSectionRawMutex, ButtonEvent, EVENT_QUEUE_DEPTH>;

// ---------------------------------------------------------------------------
// Menu definition
// ---------------------------------------------------------------------------

/// Settings shown at boot, one menu per setting. The first item of each
/// menu is the default.
fn build_menus() -> Result<MenuSet<'static>, MenuError> {
    let mut mode = Menu::new("Mode");
    mode.add_menu_item("Auto", "auto")?;
    mode.add_menu_item("Manual", "manual")?;

    let mut interval = Menu::new("Interval");
    interval.add_menu_item("1 s", "1000")?;
    interval.add_menu_item("5 s", "5000")?;
    interval.add_menu_item("10 s", "10000")?;
    interval.add_menu_item("30 s", "30000")?;
    interval.add_menu_item("1 min", "60000")?;
    interval.add_menu_item("5 min", "300000")?;

    let mut sound = Menu::new("Sound");
    sound.add_menu_item("On", "on")?;
    sound.add_menu_item("Off", "off")?;

    let mut menus = MenuSet::new();
    menus.add_menu(mode)?;
    menus.add_menu(interval)?;
    menus.add_menu(sound)?;
    Ok(menus)
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Turns one active-low push button into debounced [`ButtonEvent`]s.
///
/// Spawned once per button.
#[embassy_executor::task(pool_size = 2)]
async fn button_task(mut pin: Input<'static>, event: ButtonEvent, events: EventSender) {
    loop {
        pin.wait_for_falling_edge().await;
        Timer::after_millis(DEBOUNCE_MS).await;

        if pin.is_low() {
            debug!("Button {} pressed", event);
            events.send(event).await;
        }

        // One event per press: wait for release before re-arming.
        pin.wait_for_high().await;
        Timer::after_millis(DEBOUNCE_MS).await;
    }
}

/// Runs the menu session on the OLED and logs the outcome.
#[embassy_executor::task]
async fn menu_task(mut driver: OledDriver<OledI2c>, mut menus: MenuSet<'static>, events: EventReceiver) {
    let config = DisplayConfig::default(); // 30 Hz refresh rate

    match menu_session_task(&mut driver, &mut menus, events, &config).await {
        Ok(SessionOutcome::Completed { modified }) => {
            info!("Menu session complete (modified={})", modified);
            for menu in menus.menus() {
                if let Ok(value) = menu.value() {
                    info!("  {} = {}", menu.title(), value);
                }
            }
        }
        Ok(SessionOutcome::NoMenus) => warn!("No menus configured"),
        Err(e) => error!("Menu session aborted: {}", e),
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("twin-menu-hw-interface starting");

    // -- Pin assignments ----------------------------------------------------
    // I2C_SDA → GP20  (p.PIN_20)
    // I2C_SCL → GP21  (p.PIN_21)
    // BTN_A   → GP14  (p.PIN_14)  active-low, pull-up enabled
    // BTN_B   → GP15  (p.PIN_15)  active-low, pull-up enabled
    // -----------------------------------------------------------------------

    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );

    // OLED display at the standard SSD1306 I2C address.
    let oled_driver = OledDriver::new(i2c, 0x3C);

    let button_a = Input::new(p.PIN_14, Pull::Up);
    let button_b = Input::new(p.PIN_15, Pull::Up);

    let menus = match build_menus() {
        Ok(menus) => menus,
        Err(e) => {
            error!("Invalid menu configuration: {}", e);
            return;
        }
    };

    // -- Spawn tasks --------------------------------------------------------

    spawner.spawn(unwrap!(button_task(button_a, ButtonEvent::A, BUTTON_EVENTS.sender())));
    spawner.spawn(unwrap!(button_task(button_b, ButtonEvent::B, BUTTON_EVENTS.sender())));
    spawner.spawn(unwrap!(menu_task(oled_driver, menus, BUTTON_EVENTS.receiver())));

    info!("All tasks spawned");
}
