use rtic::mutex_prelude::TupleExt03;

use fugit::ExtU32;

use crate::pinetimers::CLOCK_STYLE;

pub fn periodic_update_device_state(ctx: crate::tasks::periodic_update_device_state::Context) {
    crate::tasks::periodic_update_device_state::spawn_after(1.secs()).ok();

    let ticked = (
        ctx.shared.clock,
        ctx.shared.tick_service,
        ctx.shared.current_screen,
    ).lock(|clock, tick_service, current_screen| {
        clock.tick();
        match tick_service.poll(clock.datetime) {
            Some(tick) => {
                current_screen.on_tick(&tick, CLOCK_STYLE);
                true
            }
            None => false,
        }
    });

    if ticked {
        // Sample the gauge once a minute, charger changes arrive via GPIOTE
        crate::tasks::update_battery::spawn().ok();
        crate::tasks::redraw_screen::spawn().ok();
    }
}
