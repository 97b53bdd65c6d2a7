//! Image resources bundled into the firmware image.

use tinybmp::Bmp;

use crate::error::{Error, Result};
use crate::ui::PixelType;

static BACKGROUND_DAY: &[u8] = include_bytes!("../assets/background_day.bmp");
static BACKGROUND_NIGHT: &[u8] = include_bytes!("../assets/background_night.bmp");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceId {
    BackgroundDay,
    BackgroundNight,
}

impl ResourceId {
    /// Raw file contents (RGB565 BMP).
    pub fn bytes(self) -> &'static [u8] {
        match self {
            ResourceId::BackgroundDay => BACKGROUND_DAY,
            ResourceId::BackgroundNight => BACKGROUND_NIGHT,
        }
    }
}

/// Decode a bundled bitmap.
pub fn load_bitmap(id: ResourceId) -> Result<Bmp<'static, PixelType>> {
    Bmp::from_slice(id.bytes()).map_err(|err| Error::ResourceDecode(id, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    use embedded_graphics::geometry::{OriginDimensions, Size};

    #[test]
    fn backgrounds_cover_the_display() {
        for id in [ResourceId::BackgroundDay, ResourceId::BackgroundNight] {
            let bmp = load_bitmap(id).unwrap();
            assert_eq!(bmp.size(), Size::new(240, 240));
        }
    }
}
