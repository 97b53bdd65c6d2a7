//! Event sources feeding the watchface: the minute tick and battery changes.

mod battery;
mod tick;

pub use battery::{percent_from_millivolts, BatteryChargeState, BatteryStateService};
pub use tick::{Tick, TickTimerService, TimeUnit};
