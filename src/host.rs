//! Services the watchface needs from the device it runs on.

use chrono::NaiveDateTime;
use embedded_graphics::image::ImageDrawable;

use crate::error::Result;
use crate::resources::ResourceId;
use crate::services::BatteryChargeState;
use crate::ui::PixelType;

/// User preference for the hour display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStyle {
    TwentyFourHour,
    TwelveHour,
}

pub trait Host {
    type Image: ImageDrawable<Color = PixelType>;

    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    fn clock_style(&self) -> ClockStyle;

    /// Last known battery state, without waiting for a change notification.
    fn battery_peek(&self) -> BatteryChargeState;

    fn load_image(&self, id: ResourceId) -> Result<Self::Image>;
}
