//! Menu preview example
//!
//! Standalone hardware demonstration that drives a [`MenuSet`] from a
//! scripted button sequence instead of real buttons, verifying that the
//! OLED initialises and that menu screens, the inverted selection row and
//! the windowed `n/m` marker render correctly on real hardware.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes           |
//! |-----------|------------|-----------------|
//! | I2C0 SDA  | GP20       |                 |
//! | I2C0 SCL  | GP21       |                 |
//! | OLED VCC  | 3V3        |                 |
//! | OLED GND  | GND        |                 |
//!
//! # Script
//!
//! One press every 600 ms: a few A presses on each menu, then B. After the
//! last menu the session is restarted, so the preview loops forever.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use twin_menu::{ButtonEvent, ButtonQueue, Menu, MenuSet};
use twin_menu_oled_display_rs::{DisplayConfig, GraphicsRenderer, OledDriver};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

// Wire the I2C0 interrupt to Embassy's handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// Presses replayed by the preview, one per step.
const SCRIPT: [ButtonEvent; 14] = [
    ButtonEvent::A,
    ButtonEvent::A,
    ButtonEvent::A,
    ButtonEvent::B,
    ButtonEvent::A,
    ButtonEvent::A,
    ButtonEvent::A,
    ButtonEvent::A,
    ButtonEvent::A,
    ButtonEvent::A,
    ButtonEvent::B,
    ButtonEvent::A,
    ButtonEvent::A,
    ButtonEvent::B,
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Menu preview starting");

    // --- I2C bus (GP20 = SDA, GP21 = SCL) ---
    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );

    let mut oled = OledDriver::new(i2c, 0x3C);
    unwrap!(oled.init().await);
    info!("OLED initialised");

    let mut colour = Menu::new("Colour");
    for caption in ["Red", "Green", "Blue"] {
        unwrap!(colour.add_menu_item(caption, caption));
    }
    let mut speed = Menu::new("Speed");
    for caption in ["1x", "2x", "4x", "8x", "16x", "32x", "64x"] {
        unwrap!(speed.add_menu_item(caption, caption));
    }
    let mut repeat = Menu::new("Repeat");
    for caption in ["Off", "Once", "Always"] {
        unwrap!(repeat.add_menu_item(caption, caption));
    }

    let mut menus: MenuSet = MenuSet::new();
    unwrap!(menus.add_menu(colour));
    unwrap!(menus.add_menu(speed));
    unwrap!(menus.add_menu(repeat));

    let config = DisplayConfig::default();
    let mut buttons: ButtonQueue = ButtonQueue::new();
    let mut step = 0;

    menus.start();
    loop {
        if let Some(display) = oled.display_mut() {
            menus.draw(&mut GraphicsRenderer::new(display, &config)).ok();
        }
        oled.flush().await.ok();

        Timer::after(Duration::from_millis(600)).await;

        buttons.push(SCRIPT[step % SCRIPT.len()]).ok();
        step += 1;

        if !menus.tick(&mut buttons) {
            info!("Session done, modified={}", menus.is_modified());
            buttons.clear();
            step = 0;
            menus.start();
        }
    }
}
