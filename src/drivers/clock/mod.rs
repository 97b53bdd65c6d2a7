use nrf52832_hal::rtc::{self, Rtc};

use chrono::{NaiveDateTime, Duration};

/// The RTC counter is 24 bits wide.
const COUNTER_MASK: u32 = 0x00ff_ffff;

/// Milliseconds per RTC tick with a prescaler of 4095 (8 Hz).
const TICK_MILLIS: u32 = 125;

/// Wall-clock time kept by counting RTC ticks from a known starting point.
pub struct Clock<RTC> {
    rtc: Rtc<RTC>,
    pub datetime: NaiveDateTime,
    prev_counter: u32,
}

impl<RTC: rtc::Instance> Clock<RTC> {
    pub fn new(rtc: Rtc<RTC>, start: NaiveDateTime) -> Self {
        let prev_counter = rtc.get_counter();
        Clock {
            rtc,
            datetime: start,
            prev_counter,
        }
    }

    /// Advance `datetime` by the ticks counted since the previous call.
    pub fn tick(&mut self) {
        let new_counter = self.rtc.get_counter();
        let elapsed = new_counter.wrapping_sub(self.prev_counter) & COUNTER_MASK;

        self.datetime += Duration::milliseconds((elapsed * TICK_MILLIS).into());
        self.prev_counter = new_counter;
    }
}
