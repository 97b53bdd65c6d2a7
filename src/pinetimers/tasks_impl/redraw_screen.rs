use rtic::mutex_prelude::TupleExt02;

use watchface::ui::screen::Screen;

use super::fatal;

pub fn redraw_screen(ctx: crate::tasks::redraw_screen::Context) {
    (
        ctx.shared.display,
        ctx.shared.current_screen,
    ).lock(|display, current_screen| {
        if let Err(err) = current_screen.draw_update(display) {
            fatal("watchface redraw failed", err);
        }
    });
}
