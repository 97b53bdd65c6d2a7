use embedded_graphics::pixelcolor::RgbColor;
use embedded_graphics_core::draw_target::DrawTarget;
use rtic::Mutex;

use watchface::ui::PixelType;

use super::fatal;

pub fn display_init(mut ctx: crate::tasks::display_init::Context) {
    ctx.shared.display.lock(|display| {
        if let Err(err) = display.init() {
            fatal("display init failed", err);
        }
        if let Err(err) = display.clear(PixelType::BLACK) {
            fatal("display clear failed", err);
        }
    });

    // A failed spawn means the task is already queued
    crate::tasks::init_screen::spawn().ok();
    crate::tasks::periodic_update_device_state::spawn().ok();
}
