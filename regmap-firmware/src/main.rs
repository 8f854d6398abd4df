//! Regmap - register loader demonstration firmware
//!
//! Boots an RP2040, loads the embedded register definitions into a
//! simulated EEPROM held in RAM, and logs what landed where over RTT.
//!
//! Edit registers.csv or loader.toml and rebuild to change what is loaded;
//! build.rs rejects either file if it would not load cleanly.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use regmap_core::{BackingStore, Loader};

mod config;
mod report;

include!(concat!(env!("OUT_DIR"), "/eeprom.rs"));

/// Register definitions (the simulated input source)
const EMBEDDED_RECORDS: &str = include_str!("../registers.csv");

/// Driver configuration
const EMBEDDED_CONFIG: &str = include_str!("../loader.toml");

// Simulated EEPROM, owned by main for the life of the program
static EEPROM: StaticCell<BackingStore<EEPROM_SIZE>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Regmap firmware starting...");

    // Clocks and time driver; no peripherals are used beyond that
    let _p = embassy_rp::init(Default::default());

    let config = config::load_embedded(EMBEDDED_CONFIG);

    let store = EEPROM.init_with(BackingStore::new);
    info!("Simulated EEPROM ready: {} bytes", EEPROM_SIZE);

    let loader = Loader::new(config.loader);
    let summary = loader.load(EMBEDDED_RECORDS, store, report::log_event);
    report::log_summary(&summary);

    report::dump(store, &config.dump);

    info!("Load complete, idling");
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
