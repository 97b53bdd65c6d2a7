use nrf52832_hal::pac::{SPIM0, RTC1};

use chrono::NaiveDateTime;
use tinybmp::Bmp;

use watchface::host::{ClockStyle, Host};
use watchface::resources::{self, ResourceId};
use watchface::services::{BatteryChargeState, BatteryStateService};
use watchface::ui::screen::ScreenWatchface;
use watchface::ui::PixelType;

use crate::drivers::clock::Clock;

pub type ConnectedSpim = SPIM0;
pub type ConnectedRtc = RTC1;

pub type Watchface = ScreenWatchface<Bmp<'static, PixelType>>;

/// Hour display used on the watch.
pub const CLOCK_STYLE: ClockStyle = ClockStyle::TwentyFourHour;

pub mod init;
pub mod tasks_impl;

/// Host services backed by the PineTime peripherals, borrowed for the
/// duration of one task.
pub struct PineTimeHost<'a> {
    pub clock: &'a Clock<ConnectedRtc>,
    pub battery: &'a BatteryStateService,
}

impl Host for PineTimeHost<'_> {
    type Image = Bmp<'static, PixelType>;

    fn now(&self) -> NaiveDateTime {
        self.clock.datetime
    }

    fn clock_style(&self) -> ClockStyle {
        CLOCK_STYLE
    }

    fn battery_peek(&self) -> BatteryChargeState {
        self.battery.peek().unwrap_or_default()
    }

    fn load_image(&self, id: ResourceId) -> watchface::Result<Self::Image> {
        resources::load_bitmap(id)
    }
}
