#![no_main]
#![no_std]

extern crate alloc;

mod drivers;
mod logger;
mod pinetimers;

use core::panic::PanicInfo;

use linked_list_allocator::LockedHeap;
use rtt_target::rprintln;

#[global_allocator]
static HEAP: LockedHeap = LockedHeap::empty();

#[rtic::app(device = nrf52832_hal::pac, peripherals = true, dispatchers = [SWI0_EGU0, SWI1_EGU1])]
mod tasks {
    use nrf52832_hal::gpiote::Gpiote;
    use nrf52832_hal::pac::TIMER0;

    use watchface::services::{BatteryStateService, TickTimerService};

    use crate::drivers::battery::Battery;
    use crate::drivers::clock::Clock;
    use crate::drivers::display::Display;
    use crate::drivers::timer::MonoTimer;
    use crate::pinetimers::init::Hardware;
    use crate::pinetimers::tasks_impl::{
        display_init, gpiote_interrupt, init_screen, periodic_update_device_state,
        redraw_screen, update_battery,
    };
    use crate::pinetimers::{ConnectedRtc, Watchface};

    #[monotonic(binds = TIMER0, default = true)]
    type Mono = MonoTimer<TIMER0>;

    #[shared]
    struct Shared {
        gpiote: Gpiote,
        display: Display,
        battery: Battery,
        clock: Clock<ConnectedRtc>,
        battery_service: BatteryStateService,
        tick_service: TickTimerService,
        current_screen: Watchface,
    }

    #[local]
    struct Local {}

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let Hardware {
            gpiote,
            display,
            battery,
            clock,
            mono,
            battery_service,
            tick_service,
            current_screen,
        } = crate::pinetimers::init::init(ctx);

        display_init::spawn().ok();

        (Shared {
            gpiote,
            display,
            battery,
            clock,
            battery_service,
            tick_service,
            current_screen,
        }, Local {}, init::Monotonics(mono))
    }

    extern "Rust" {
        #[task(shared = [display])]
        fn display_init(ctx: display_init::Context);

        #[task(shared = [display, current_screen, clock, battery, battery_service])]
        fn init_screen(ctx: init_screen::Context);

        #[task(shared = [clock, tick_service, current_screen])]
        fn periodic_update_device_state(ctx: periodic_update_device_state::Context);

        #[task(shared = [battery, battery_service, current_screen])]
        fn update_battery(ctx: update_battery::Context);

        #[task(shared = [display, current_screen])]
        fn redraw_screen(ctx: redraw_screen::Context);

        #[task(binds = GPIOTE, shared = [gpiote])]
        fn gpiote_interrupt(ctx: gpiote_interrupt::Context);
    }
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    rprintln!("----- PANIC -----");
    rprintln!("{:#?}", info);
    loop {
        cortex_m::asm::bkpt();
    }
}
