//! Day/night digital watchface.
//!
//! The presenter in [`ui::screen::ScreenWatchface`] owns everything the face
//! shows and only talks to the device through the [`host::Host`] trait, so it
//! runs unchanged on the PineTime firmware (the `pinetime` binary) and in
//! host-side tests.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod devicestate;
pub mod error;
pub mod host;
pub mod resources;
pub mod services;
pub mod ui;

#[cfg(test)]
mod testutil;

pub use error::{Error, Result};
