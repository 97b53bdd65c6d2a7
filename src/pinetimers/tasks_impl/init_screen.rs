use rtic::mutex_prelude::TupleExt05;

use watchface::ui::screen::Screen;

use crate::pinetimers::PineTimeHost;

use super::fatal;

/// Load the watchface window and paint it in full.
pub fn init_screen(ctx: crate::tasks::init_screen::Context) {
    (
        ctx.shared.display,
        ctx.shared.current_screen,
        ctx.shared.clock,
        ctx.shared.battery,
        ctx.shared.battery_service,
    ).lock(|display, current_screen, clock, battery, battery_service| {
        if current_screen.is_loaded() {
            return;
        }

        // The face peeks the service on load, give it a first reading
        battery_service.poll(battery.get_state());

        let host = PineTimeHost {
            clock,
            battery: battery_service,
        };
        if let Err(err) = current_screen.load(&host) {
            fatal("watchface load failed", err);
        }
        if let Err(err) = current_screen.draw_init(display) {
            fatal("watchface draw failed", err);
        }
    });

    crate::tasks::update_battery::spawn().ok();
}
