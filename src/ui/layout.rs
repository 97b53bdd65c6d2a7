//! Compile-time placement of every element on the 240x240 panel.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_9X18_BOLD};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::primitives::Rectangle;

use crate::ui::PixelType;

pub const WINDOW_WIDTH: u32 = 240;
pub const WINDOW_HEIGHT: u32 = 240;

/// Side margin shared by the weekday, the date and the battery bar.
const MARGIN: i32 = 17;

pub const WINDOW: Rectangle =
    Rectangle::new(Point::zero(), Size::new(WINDOW_WIDTH, WINDOW_HEIGHT));

pub const TIME: Rectangle = Rectangle::new(Point::zero(), Size::new(WINDOW_WIDTH, 50));

pub const BATTERY_BAR: Rectangle = Rectangle::new(Point::new(MARGIN, 50), Size::new(111, 5));

pub const WEEKDAY: Rectangle =
    Rectangle::new(Point::new(MARGIN, 55), Size::new(WINDOW_WIDTH / 2, 25));

pub const DATE: Rectangle = Rectangle::new(
    Point::new((WINDOW_WIDTH / 2) as i32, 55),
    Size::new(WINDOW_WIDTH / 2 - MARGIN as u32, 25),
);

pub const TIME_FONT: &MonoFont<'static> = &FONT_10X20;
pub const LABEL_FONT: &MonoFont<'static> = &FONT_9X18_BOLD;

pub const WINDOW_COLOR: PixelType = PixelType::BLACK;
pub const TEXT_COLOR: PixelType = PixelType::WHITE;

/// Neutral grey behind the battery fill.
pub fn battery_track_color() -> PixelType {
    Rgb888::new(86, 86, 86).into()
}

pub const BATTERY_FILL_COLOR: PixelType = PixelType::WHITE;
