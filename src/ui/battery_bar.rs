//! The battery meter under the time.

use embedded_graphics::geometry::Size;
use embedded_graphics::primitives::{Primitive, PrimitiveStyle, Rectangle, Styled};

use crate::ui::layout::{battery_track_color, BATTERY_FILL_COLOR};
use crate::ui::PixelType;

/// Width of a full bar in pixels.
pub const FULL_SCALE_WIDTH: u32 = 108;
pub const FILL_HEIGHT: u32 = 5;

pub type BarRect = Styled<Rectangle, PrimitiveStyle<PixelType>>;

/// Fill width for a charge percentage, rounded down.
pub fn fill_width(level: u8) -> u32 {
    u32::from(level) * FULL_SCALE_WIDTH / 100
}

/// The grey track covering `bounds`, then the white fill on top of it.
pub fn render_battery_bar(level: u8, bounds: Rectangle) -> [BarRect; 2] {
    let track = bounds.into_styled(PrimitiveStyle::with_fill(battery_track_color()));
    let fill = Rectangle::new(bounds.top_left, Size::new(fill_width(level), FILL_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(BATTERY_FILL_COLOR));

    [track, fill]
}
