//! Puts `memory.x` on the linker search path and records the build time, which
//! the firmware uses as the initial wall-clock time.

use std::{env, fs::File, io::Write, path::PathBuf};

fn main() {
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());

    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();
    println!("cargo:rustc-link-search={}", out.display());

    // Local wall-clock time, the watch has no notion of timezones
    let now = chrono::Local::now().naive_local();
    File::create(out.join("build_time.rs"))
        .unwrap()
        .write_fmt(format_args!(
            "pub const BUILD_TIME: i64 = {};",
            now.and_utc().timestamp()
        ))
        .unwrap();
}
