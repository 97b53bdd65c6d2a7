mod watchface;

pub use watchface::ScreenWatchface;

use embedded_graphics::draw_target::DrawTarget;

use crate::ui::PixelType;

pub trait Screen<DISPLAY>
where
    DISPLAY: DrawTarget<Color = PixelType>,
{
    /// Paint everything, used right after the screen is loaded.
    fn draw_init(&mut self, display: &mut DISPLAY) -> Result<(), DISPLAY::Error>;

    /// Paint only what changed since the previous draw.
    fn draw_update(&mut self, display: &mut DISPLAY) -> Result<(), DISPLAY::Error>;
}
