//! `log` backend printing over RTT.

use log::{LevelFilter, Log, Metadata, Record};
use rtt_target::{rprintln, rtt_init_print};

struct RttLogger;

static LOGGER: RttLogger = RttLogger;

impl Log for RttLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            rprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn init() {
    rtt_init_print!();

    // Only fails when a logger is already installed
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}
