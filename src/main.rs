//! nibcalc firmware entry point (nRF52840).
//!
//! Brings up GPIO, the I²C OLED and the shutdown button, then hands the
//! board to the session controller until the operator shuts it down.

#![no_std]
#![no_main]

mod ui;

use defmt::{error, info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin;
use embassy_nrf::{bind_interrupts, peripherals, twim};
use embassy_time::Delay;
use nibcalc::config::Timing;
use nibcalc::panel::Panel;
use nibcalc::session::Session;
use ui::buttons::{pin_bank, shutdown_task, ShutdownRequest};
use ui::display::Oled;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("nibcalc starting");

    unwrap!(spawner.spawn(shutdown_task(p.P0_25.degrade())));

    // Order matches `Channel::ALL`: BIT0..BIT3, ENTER, LEFT, RIGHT.
    let buttons = pin_bank([
        p.P0_03.degrade(),
        p.P0_04.degrade(),
        p.P0_28.degrade(),
        p.P0_29.degrade(),
        p.P0_30.degrade(),
        p.P0_31.degrade(),
        p.P1_01.degrade(),
    ]);

    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let oled = match Oled::init(i2c) {
        Ok(oled) => oled,
        Err(e) => {
            error!("Startup failed: {}", e);
            return;
        }
    };

    let panel = Panel::new(buttons, Delay, oled, Timing::DEFAULT);
    let rounds = Session::new(panel).run(&ShutdownRequest::get()).await;

    // The panel is gone: display cleared, button pins released.
    info!("nibcalc stopped after {} rounds", rounds);
}
