//! In-memory display and host used by the unit tests.

use core::convert::Infallible;

use alloc::vec;
use alloc::vec::Vec;

use chrono::{NaiveDate, NaiveDateTime};
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, OriginDimensions, Point, Size};
use embedded_graphics::image::ImageDrawable;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::primitives::{PointsIter, Rectangle};
use embedded_graphics::Pixel;

use crate::error::Result;
use crate::host::{ClockStyle, Host};
use crate::resources::ResourceId;
use crate::services::BatteryChargeState;
use crate::ui::layout::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::ui::PixelType;

/// Records every pixel written to it. Unwritten pixels read as `None`.
pub struct FrameBuffer {
    pixels: Vec<Option<Rgb565>>,
    writes: usize,
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: vec![None; (WINDOW_WIDTH * WINDOW_HEIGHT) as usize],
            writes: 0,
        }
    }

    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        if !self.bounding_box().contains(point) {
            return None;
        }
        self.pixels[point.y as usize * WINDOW_WIDTH as usize + point.x as usize]
    }

    /// Number of pixels currently holding `color`.
    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|p| **p == Some(color)).count()
    }

    /// Count of pixels within `area` holding `color`.
    pub fn count_in(&self, area: &Rectangle, color: Rgb565) -> usize {
        area.points().filter(|p| self.pixel(*p) == Some(color)).count()
    }

    /// Pixel writes since the last call.
    pub fn take_writes(&mut self) -> usize {
        core::mem::take(&mut self.writes)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                self.pixels[point.y as usize * WINDOW_WIDTH as usize + point.x as usize] =
                    Some(color);
                self.writes += 1;
            }
        }
        Ok(())
    }
}

/// Single colour stand-in for the bundled backgrounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidImage {
    pub color: Rgb565,
}

impl SolidImage {
    pub const DAY: Rgb565 = Rgb565::BLUE;
    pub const NIGHT: Rgb565 = Rgb565::MAGENTA;
}

impl OriginDimensions for SolidImage {
    fn size(&self) -> Size {
        Size::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    }
}

impl ImageDrawable for SolidImage {
    type Color = Rgb565;

    fn draw<D>(&self, target: &mut D) -> core::result::Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.fill_solid(&self.bounding_box(), self.color)
    }

    fn draw_sub_image<D>(&self, target: &mut D, area: &Rectangle) -> core::result::Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let area = area.intersection(&self.bounding_box());
        target.fill_solid(&Rectangle::new(Point::zero(), area.size), self.color)
    }
}

pub struct FakeHost {
    pub now: NaiveDateTime,
    pub style: ClockStyle,
    pub battery: u8,
}

impl FakeHost {
    pub fn at(hour: u32, minute: u32) -> Self {
        FakeHost {
            now: datetime(2024, 3, 7, hour, minute),
            style: ClockStyle::TwentyFourHour,
            battery: 80,
        }
    }
}

impl Host for FakeHost {
    type Image = SolidImage;

    fn now(&self) -> NaiveDateTime {
        self.now
    }

    fn clock_style(&self) -> ClockStyle {
        self.style
    }

    fn battery_peek(&self) -> BatteryChargeState {
        BatteryChargeState {
            charge_percent: self.battery,
            is_charging: false,
        }
    }

    fn load_image(&self, id: ResourceId) -> Result<SolidImage> {
        let color: PixelType = match id {
            ResourceId::BackgroundDay => SolidImage::DAY,
            ResourceId::BackgroundNight => SolidImage::NIGHT,
        };
        Ok(SolidImage { color })
    }
}

pub fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}
