//! Independently refreshable areas of the watchface window.

use alloc::string::String;

use embedded_graphics::draw_target::{DrawTarget, DrawTargetExt};
use embedded_graphics::geometry::{Dimensions, Point};
use embedded_graphics::image::{Image, ImageDrawable, ImageDrawableExt};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::prelude::Transform;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use embedded_graphics::Drawable;

use crate::ui::battery_bar::render_battery_bar;
use crate::ui::layout::{TEXT_COLOR, WINDOW_COLOR};
use crate::ui::PixelType;

/// A line of text on a transparent background.
pub struct TextRegion {
    bounds: Rectangle,
    font: &'static MonoFont<'static>,
    alignment: Alignment,
    text: String,
    dirty: bool,
}

impl TextRegion {
    pub fn new(bounds: Rectangle, font: &'static MonoFont<'static>, alignment: Alignment) -> Self {
        TextRegion {
            bounds,
            font,
            alignment,
            text: String::new(),
            dirty: true,
        }
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, the region only becomes dirty if it actually changed.
    pub fn set_text(&mut self, text: String) {
        if self.text != text {
            self.text = text;
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Draw the text, clipped to the region. Whatever is underneath must
    /// already have been repainted.
    pub fn draw<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = PixelType>,
    {
        let x = match self.alignment {
            Alignment::Left => self.bounds.top_left.x,
            Alignment::Center => self.bounds.center().x,
            Alignment::Right => self.bounds.top_left.x + self.bounds.size.width as i32 - 1,
        };
        let position = Point::new(x, self.bounds.center().y);

        let character_style = MonoTextStyle::new(self.font, TEXT_COLOR);
        let text_style = TextStyleBuilder::new()
            .alignment(self.alignment)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(&self.text, position, character_style, text_style)
            .draw(&mut target.clipped(&self.bounds))?;

        self.dirty = false;
        Ok(())
    }
}

/// The battery meter, painted from the level owned by the presenter.
#[derive(Debug)]
pub struct BatteryRegion {
    bounds: Rectangle,
    dirty: bool,
}

impl BatteryRegion {
    pub fn new(bounds: Rectangle) -> Self {
        BatteryRegion { bounds, dirty: true }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn draw<D>(&mut self, level: u8, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = PixelType>,
    {
        for rect in render_battery_bar(level, self.bounds).iter() {
            rect.draw(target)?;
        }

        self.dirty = false;
        Ok(())
    }
}

/// Full-window image behind everything else. Owns the decoded image, which is
/// released together with the region.
#[derive(Debug)]
pub struct BackgroundRegion<I> {
    image: I,
    bounds: Rectangle,
}

impl<I> BackgroundRegion<I>
where
    I: ImageDrawable<Color = PixelType>,
{
    pub fn new(image: I, bounds: Rectangle) -> Self {
        BackgroundRegion { image, bounds }
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = PixelType>,
    {
        self.draw_area(target, &self.bounds)
    }

    /// Repaint the part of the background under `area` (window coordinates).
    pub fn draw_area<D>(&self, target: &mut D, area: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = PixelType>,
    {
        let area = area.intersection(&self.bounds);
        let image_area = self
            .image
            .bounding_box()
            .translate(self.bounds.top_left)
            .intersection(&area);

        // Window colour shows wherever the image is smaller than the window
        if image_area != area {
            target.fill_solid(&area, WINDOW_COLOR)?;
        }

        if image_area.size.width > 0 && image_area.size.height > 0 {
            let source = image_area.translate(-self.bounds.top_left);
            Image::new(&self.image.sub_image(&source), image_area.top_left).draw(target)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use embedded_graphics::geometry::Size;
    use embedded_graphics::pixelcolor::RgbColor;

    use crate::testutil::{FrameBuffer, SolidImage};
    use crate::ui::layout::{LABEL_FONT, TIME, TIME_FONT, WINDOW};

    #[test]
    fn set_text_tracks_changes() {
        let mut region = TextRegion::new(TIME, TIME_FONT, Alignment::Center);
        assert!(region.is_dirty());

        let mut display = FrameBuffer::new();
        region.set_text("13:05".into());
        region.draw(&mut display).unwrap();
        assert!(!region.is_dirty());

        region.set_text("13:05".into());
        assert!(!region.is_dirty());

        region.set_text("13:06".into());
        assert!(region.is_dirty());
        assert_eq!(region.text(), "13:06");
    }

    #[test]
    fn text_stays_inside_bounds() {
        let bounds = Rectangle::new(Point::new(17, 55), Size::new(30, 25));
        let mut region = TextRegion::new(bounds, LABEL_FONT, Alignment::Left);
        region.set_text("Wednesday".into());

        let mut display = FrameBuffer::new();
        region.draw(&mut display).unwrap();

        let white = display.count(PixelType::WHITE);
        assert!(white > 0);
        assert_eq!(display.count_in(&bounds, PixelType::WHITE), white);
    }

    #[test]
    fn right_aligned_text_hugs_the_right_edge() {
        let bounds = Rectangle::new(Point::new(120, 55), Size::new(103, 25));
        let mut region = TextRegion::new(bounds, LABEL_FONT, Alignment::Right);
        region.set_text("07/03".into());

        let mut display = FrameBuffer::new();
        region.draw(&mut display).unwrap();

        // Five 9px wide glyphs leave the left half of the region empty
        let left_half = Rectangle::new(bounds.top_left, Size::new(50, 25));
        assert_eq!(display.count_in(&left_half, PixelType::WHITE), 0);
        assert!(display.count_in(&bounds, PixelType::WHITE) > 0);
    }

    #[test]
    fn background_area_repaint() {
        let background = BackgroundRegion::new(
            SolidImage {
                color: SolidImage::DAY,
            },
            WINDOW,
        );
        let mut display = FrameBuffer::new();

        background.draw_area(&mut display, &TIME).unwrap();
        assert_eq!(display.count(SolidImage::DAY), 240 * 50);
        assert_eq!(display.pixel(Point::new(0, 50)), None);

        background.draw(&mut display).unwrap();
        assert_eq!(display.count(SolidImage::DAY), 240 * 240);
    }

    #[test]
    fn battery_region_clears_dirty_flag() {
        let mut region = BatteryRegion::new(crate::ui::layout::BATTERY_BAR);
        let mut display = FrameBuffer::new();

        assert!(region.is_dirty());
        region.draw(100, &mut display).unwrap();
        assert!(!region.is_dirty());
        assert_eq!(display.count(PixelType::WHITE), 108 * 5);

        region.mark_dirty();
        assert!(region.is_dirty());
    }
}
