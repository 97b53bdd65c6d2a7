use rtic::Mutex;

pub fn gpiote_interrupt(mut ctx: crate::tasks::gpiote_interrupt::Context) {
    ctx.shared.gpiote.lock(|gpiote| {
        if gpiote.channel0().is_event_triggered() {
            // Charger plugged or unplugged
            crate::tasks::update_battery::spawn().ok();
        } else {
            log::warn!("unexpected GPIOTE event");
        }
        gpiote.reset_events();
    });
}
