use core::mem::MaybeUninit;
use core::ptr::addr_of_mut;

use nrf52832_hal::gpiote::Gpiote;
use nrf52832_hal::gpio::{Level, p0};
use nrf52832_hal::spim::{self, MODE_3, Spim};
use nrf52832_hal::delay::Delay;
use nrf52832_hal::saadc::{Saadc, SaadcConfig};
use nrf52832_hal::clocks::Clocks;
use nrf52832_hal::pac::TIMER0;
use nrf52832_hal::rtc::Rtc;

use chrono::DateTime;

use watchface::services::{BatteryStateService, TickTimerService, TimeUnit};

use crate::drivers::battery::Battery;
use crate::drivers::clock::Clock;
use crate::drivers::display::Display;
use crate::drivers::timer::MonoTimer;
use crate::pinetimers::{ConnectedRtc, Watchface};

include!(concat!(env!("OUT_DIR"), "/build_time.rs"));

const HEAP_SIZE: usize = 16 * 1024;
static mut HEAP_MEMORY: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];

/// Everything `init` hands over to RTIC.
pub struct Hardware {
    pub gpiote: Gpiote,
    pub display: Display,
    pub battery: Battery,
    pub clock: Clock<ConnectedRtc>,
    pub mono: MonoTimer<TIMER0>,

    pub battery_service: BatteryStateService,
    pub tick_service: TickTimerService,
    pub current_screen: Watchface,
}

pub fn init(ctx: crate::tasks::init::Context) -> Hardware {
    crate::logger::init();
    log::info!("Pijn tijd");

    unsafe {
        // Set up heap
        crate::HEAP
            .lock()
            .init(addr_of_mut!(HEAP_MEMORY) as usize, HEAP_SIZE);
    }

    let gpio = p0::Parts::new(ctx.device.P0);

    let mono = MonoTimer::new(ctx.device.TIMER0);

    // Set up GPIOTE
    let gpiote = Gpiote::new(ctx.device.GPIOTE);

    // Set up SAADC
    let saadc_config = SaadcConfig::default();
    let saadc = Saadc::new(ctx.device.SAADC, saadc_config);

    // Set up charging
    let charging_input_pin = gpio.p0_19.into_floating_input().degrade();

    // Fire event on charging state change
    gpiote.channel0()
        .input_pin(&charging_input_pin)
        .toggle()
        .enable_interrupt();

    let battery = Battery::new(
        // Charge indicator pin
        charging_input_pin,

        // Voltage pin (don't degrade because we need the typecheck if the
        // pin can be analog)
        gpio.p0_31.into_floating_input(),
        saadc,
    );

    // Set up SPI
    let spi_pins = spim::Pins {
        sck: gpio.p0_02.into_push_pull_output(Level::Low).degrade(),
        mosi: Some(gpio.p0_03.into_push_pull_output(Level::Low).degrade()),
        // MISO is only connected to the (unused) flash chip
        miso: None,
    };
    let spi = Spim::new(
        ctx.device.SPIM0,
        spi_pins,
        spim::Frequency::M8,
        MODE_3,
        0
    );

    // Set up display
    let display = Display::new(
        // Backlight pins
        gpio.p0_14.into_push_pull_output(Level::High).degrade(),
        gpio.p0_22.into_push_pull_output(Level::High).degrade(),
        gpio.p0_23.into_push_pull_output(Level::High).degrade(),

        // Command/Data pin
        gpio.p0_18.into_push_pull_output(Level::Low).degrade(),

        // Chip Select pin
        gpio.p0_25.into_push_pull_output(Level::High).degrade(),

        // Reset pin
        gpio.p0_26.into_push_pull_output(Level::High).degrade(),

        spi,
        Delay::new(ctx.core.SYST),
    );

    // Keep the flash chip deselected
    gpio.p0_05.into_push_pull_output(Level::High);

    // Enable LFCLK
    Clocks::new(ctx.device.CLOCK).start_lfclk();

    // Set up RTC
    // Prescaler value for 8Hz (125ms period)
    let rtc = match Rtc::new(ctx.device.RTC1, 4095) {
        Ok(rtc) => rtc,
        Err(_) => panic!("RTC prescaler out of range"),
    };
    rtc.enable_counter();

    let start = match DateTime::from_timestamp(BUILD_TIME, 0) {
        Some(start) => start.naive_utc(),
        None => panic!("build time out of range"),
    };
    let clock = Clock::new(rtc, start);
    log::info!("clock starts at {}", start);

    Hardware {
        gpiote,
        display,
        battery,
        clock,
        mono,

        battery_service: BatteryStateService::new(),
        tick_service: TickTimerService::subscribe(TimeUnit::Minute),
        current_screen: Watchface::new(),
    }
}
