use embedded_graphics::pixelcolor::Rgb565;

pub mod background;
pub mod battery_bar;
pub mod layout;
pub mod region;
pub mod screen;
pub mod text;

/// Colour format of the ST7789 panel.
pub type PixelType = Rgb565;
