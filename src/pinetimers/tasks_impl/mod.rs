mod display_init;
mod gpiote_interrupt;
mod init_screen;
mod periodic_update_device_state;
mod redraw_screen;
mod update_battery;

pub use display_init::display_init;
pub use gpiote_interrupt::gpiote_interrupt;
pub use init_screen::init_screen;
pub use periodic_update_device_state::periodic_update_device_state;
pub use redraw_screen::redraw_screen;
pub use update_battery::update_battery;

use core::fmt::Debug;

/// Host failures are not recoverable on the watch.
fn fatal(context: &str, err: impl Debug) -> ! {
    panic!("{}: {:?}", context, err)
}
