use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Size, Dimensions};
use embedded_graphics_core::pixelcolor::IntoStorage;
use embedded_graphics_core::primitives::Rectangle;
use embedded_graphics_core::prelude::PointsIter;
use embedded_graphics_core::Pixel;

use nrf52832_hal::spim;

use watchface::ui::layout::{WINDOW_HEIGHT, WINDOW_WIDTH};
use watchface::ui::PixelType;

use crate::drivers::display::Display;

impl OriginDimensions for Display {
    fn size(&self) -> Size {
        Size::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    }
}

impl DrawTarget for Display {
    type Color = PixelType;
    type Error = spim::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>> {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                let (col, row) = (point.x as u16, point.y as u16);
                self.select_area(row, col, row, col)?;
                self.write_pixels([color.into_storage()])?;
            }
        }

        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let drawable_area = area.intersection(&self.bounding_box());
        let bottom_right = match drawable_area.bottom_right() {
            Some(point) => point,
            None => return Ok(()),
        };

        self.select_area(
            drawable_area.top_left.y as u16,
            drawable_area.top_left.x as u16,
            bottom_right.y as u16,
            bottom_right.x as u16,
        )?;

        let pixels = area
            .points()
            .zip(colors)
            .filter(|(p, _)| drawable_area.contains(*p))
            .map(|(_, c)| c.into_storage());
        self.write_pixels(pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        self.fill_contiguous(&area, core::iter::repeat(color))
    }
}
