use rtic::mutex_prelude::TupleExt03;

pub fn update_battery(ctx: crate::tasks::update_battery::Context) {
    let changed = (
        ctx.shared.battery,
        ctx.shared.battery_service,
        ctx.shared.current_screen,
    ).lock(|battery, battery_service, current_screen| {
        match battery_service.poll(battery.get_state()) {
            Some(state) => {
                current_screen.on_battery_changed(state.charge_percent);
                true
            }
            None => false,
        }
    });

    if changed {
        crate::tasks::redraw_screen::spawn().ok();
    }
}
